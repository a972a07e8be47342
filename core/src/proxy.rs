//! Stateless request builder and response parser for the local APOD proxy.
//!
//! # Design
//! `ProxyClient` holds only a `base_url` and carries no mutable state between
//! calls. The operation is split into `build_get_apod`, which validates the
//! date and produces an `HttpRequest`, and `parse_get_apod`, which consumes an
//! `HttpResponse`. `get_apod` glues the two around a `Transport`. Because
//! validation happens in the build step, a malformed date never reaches the
//! transport.

use tracing::debug;

use crate::config::DEFAULT_PROXY_BASE_URL;
use crate::date::validate_date;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::ApodRecord;

pub const APOD_PATH: &str = "/api/nasa/apod";

#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
}

impl Default for ProxyClient {
    fn default() -> Self {
        Self::new(DEFAULT_PROXY_BASE_URL)
    }
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// An absent or empty `date` means "today" and adds no query parameter.
    pub fn build_get_apod(&self, date: Option<&str>) -> Result<HttpRequest, ApiError> {
        let request = HttpRequest::get(format!("{}{APOD_PATH}", self.base_url));
        match date.filter(|d| !d.is_empty()) {
            Some(date) => {
                validate_date(date)?;
                Ok(request.with_query("date", date))
            }
            None => Ok(request),
        }
    }

    pub fn parse_get_apod(&self, response: HttpResponse) -> Result<ApodRecord, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Validation(e.to_string()))
    }

    pub fn get_apod<T: Transport + ?Sized>(
        &self,
        transport: &T,
        date: Option<&str>,
    ) -> Result<ApodRecord, ApiError> {
        let request = self.build_get_apod(date)?;
        debug!(path = %request.path, date = ?request.query_value("date"), "requesting APOD from proxy");
        let response = transport.execute(&request)?;
        self.parse_get_apod(response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
