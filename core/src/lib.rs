//! Synchronous client core for NASA's Astronomy Picture of the Day.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller supplies a
//! `Transport` that executes the actual HTTP round trip, keeping the core
//! deterministic and testable.
//!
//! # Design
//! - `ApodFetcher` talks to the public APOD endpoint and never fails: errors
//!   become an inline `{"error": ...}` map.
//! - `format_apod_response` turns that map into fixed-layout text.
//! - `today_apod` composes the two; it is the natural-language entry point.
//! - `ProxyClient` talks to a local proxy and returns a validated
//!   `ApodRecord` or an `ApiError`.
//! - Configuration is an explicit `ApodConfig` value; nothing in here reads
//!   the environment on its own.

pub mod config;
pub mod date;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod http;
pub mod proxy;
pub mod tool;
pub mod types;

pub use config::{resolve_api_key, ApodConfig, DEMO_KEY};
pub use date::validate_date;
pub use error::ApiError;
pub use fetcher::ApodFetcher;
pub use format::{format_apod_record, format_apod_response};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use proxy::ProxyClient;
pub use tool::today_apod;
pub use types::{ApodData, ApodRecord, ErrorRecord};
