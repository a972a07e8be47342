//! Fetcher for the public APOD endpoint.
//!
//! # Design
//! Same build/parse split as the proxy client, but the parse side never
//! fails: every transport error, non-2xx status and undecodable body is
//! folded into an `ErrorRecord` so the natural-language path always has a
//! string to show.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::APOD_ENDPOINT;
use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::types::{ApodData, ErrorRecord};

/// Prefix of every inline fetch error message.
pub const FETCH_ERROR_PREFIX: &str = "Error fetching NASA data";

#[derive(Debug, Clone)]
pub struct ApodFetcher {
    endpoint: String,
}

impl Default for ApodFetcher {
    fn default() -> Self {
        Self::new(APOD_ENDPOINT)
    }
}

impl ApodFetcher {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, api_key: &str) -> HttpRequest {
        HttpRequest::get(self.endpoint.clone()).with_query("api_key", api_key)
    }

    /// Decode the body into a JSON object, or describe why that failed.
    pub fn parse_response(&self, outcome: Result<HttpResponse, TransportError>) -> ApodData {
        let response = match outcome {
            Ok(response) => response,
            Err(e) => return fetch_error(&e.to_string()),
        };

        if !response.is_success() {
            return fetch_error(&format!(
                "HTTP {} for url {}: {}",
                response.status,
                self.endpoint,
                response.body.trim()
            ));
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(Value::Object(data)) => data,
            Ok(other) => fetch_error(&format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )),
            Err(e) => fetch_error(&format!("invalid JSON body: {e}")),
        }
    }

    /// One GET against the endpoint. No retry, no cache.
    pub fn fetch<T: Transport + ?Sized>(&self, transport: &T, api_key: &str) -> ApodData {
        let request = self.build_request(api_key);
        debug!(endpoint = %self.endpoint, "fetching APOD");
        self.parse_response(transport.execute(&request))
    }
}

fn fetch_error(cause: &str) -> ApodData {
    warn!(%cause, "APOD fetch failed");
    ErrorRecord::new(format!("{FETCH_ERROR_PREFIX}: {cause}")).into_data()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
