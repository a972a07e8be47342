use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApodRecord {
    pub date: String,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
    pub media_type: String,
    pub service_version: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

/// Query accepted by the upstream-style `/planetary/apod` route.
#[derive(Deserialize)]
pub struct UpstreamQuery {
    pub api_key: Option<String>,
    pub date: Option<String>,
}

/// Query accepted by the proxy-style `/api/nasa/apod` route.
#[derive(Deserialize)]
pub struct ProxyQuery {
    pub date: Option<String>,
}

/// Records keyed by date. The latest date is "today".
pub type Catalog = Arc<BTreeMap<String, ApodRecord>>;

pub fn sample_catalog() -> BTreeMap<String, ApodRecord> {
    let records = [
        ApodRecord {
            date: "1995-06-16".to_string(),
            explanation: "If the Earth could somehow be transformed to the ultra-high \
                          density of a neutron star, it might appear as it does here."
                .to_string(),
            hdurl: None,
            media_type: "image".to_string(),
            service_version: "v1".to_string(),
            title: "Neutron Star Earth".to_string(),
            url: "https://apod.nasa.gov/apod/image/e_lens.gif".to_string(),
            copyright: None,
        },
        ApodRecord {
            date: "2024-01-01".to_string(),
            explanation: "A full moon rises over the horizon.".to_string(),
            hdurl: Some("https://apod.nasa.gov/apod/image/2401/moon_hd.jpg".to_string()),
            media_type: "image".to_string(),
            service_version: "v1".to_string(),
            title: "Moon".to_string(),
            url: "https://apod.nasa.gov/apod/image/2401/moon.jpg".to_string(),
            copyright: Some("Jane Doe".to_string()),
        },
    ];
    records.into_iter().map(|r| (r.date.clone(), r)).collect()
}

pub fn app() -> Router {
    app_with_catalog(sample_catalog())
}

pub fn app_with_catalog(records: BTreeMap<String, ApodRecord>) -> Router {
    let catalog: Catalog = Arc::new(records);
    Router::new()
        .route("/planetary/apod", get(upstream_apod))
        .route("/api/nasa/apod", get(proxy_apod))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn upstream_apod(
    State(catalog): State<Catalog>,
    Query(query): Query<UpstreamQuery>,
) -> Result<Json<ApodRecord>, StatusCode> {
    if query.api_key.as_deref().map_or(true, str::is_empty) {
        return Err(StatusCode::FORBIDDEN);
    }
    lookup(&catalog, query.date.as_deref())
}

async fn proxy_apod(
    State(catalog): State<Catalog>,
    Query(query): Query<ProxyQuery>,
) -> Result<Json<ApodRecord>, StatusCode> {
    lookup(&catalog, query.date.as_deref())
}

fn lookup(catalog: &Catalog, date: Option<&str>) -> Result<Json<ApodRecord>, StatusCode> {
    let record = match date.filter(|d| !d.is_empty()) {
        Some(date) => {
            if !is_iso_date(date) {
                return Err(StatusCode::BAD_REQUEST);
            }
            catalog.get(date)
        }
        None => catalog.values().next_back(),
    };
    debug!(?date, found = record.is_some(), "apod lookup");
    record.cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Exact `YYYY-MM-DD` shape that also names a real calendar day.
fn is_iso_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
        && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}
