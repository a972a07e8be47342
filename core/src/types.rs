//! Domain DTOs for the APOD service.
//!
//! # Design
//! `ApodRecord` is the validated shape returned by the proxy client. The
//! fetcher deliberately does not use it: it hands back the decoded JSON
//! object untouched as `ApodData`, and the formatter reads fields from that
//! map directly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The decoded JSON object returned by the public APOD endpoint, or an
/// `ErrorRecord` rendered as `{"error": "..."}`.
pub type ApodData = Map<String, Value>;

/// Key under which an `ErrorRecord` stores its message.
pub const ERROR_KEY: &str = "error";

/// A single Astronomy Picture of the Day entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApodRecord {
    pub date: String,
    pub explanation: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    pub media_type: String,
    pub service_version: String,
    pub title: String,
    pub url: String,
    /// Present only for images that are not in the public domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl ApodRecord {
    /// The high-definition link when one is present, otherwise the standard
    /// link.
    pub fn image_url(&self) -> &str {
        match self.hdurl.as_deref() {
            Some(hd) if !hd.is_empty() => hd,
            _ => &self.url,
        }
    }
}

/// A failed fetch, carried inline in place of the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorRecord {
    pub error: String,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn into_data(self) -> ApodData {
        let mut data = ApodData::new();
        data.insert(ERROR_KEY.to_string(), Value::String(self.error));
        data
    }
}
