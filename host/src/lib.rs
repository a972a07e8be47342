//! Blocking NASA APOD access over real HTTP.
//!
//! # Overview
//! Wires the I/O-free `apod-core` pipeline to a ureq-backed `Transport`.
//! Two entry points:
//!
//! - `mcp_nasa_today_apod`: the natural-language tool. Always yields text;
//!   fetch failures are rendered as the message itself.
//! - `NasaMcpClient`: typed access to a local APOD proxy, returning a
//!   validated `ApodRecord` or an `ApiError`.
//!
//! Configuration is passed in explicitly; load it once with
//! `ApodConfig::from_env()` at process start.

pub mod transport;

pub use apod_core::{
    format_apod_record, format_apod_response, ApiError, ApodConfig, ApodData, ApodRecord,
    Transport,
};
pub use transport::UreqTransport;

use apod_core::{today_apod, ProxyClient};

/// Fetch today's APOD from NASA and render it as text.
///
/// `query` is free text from the caller and is not interpreted. `api_key`
/// overrides `config.api_key` for this call.
pub fn mcp_nasa_today_apod(
    config: &ApodConfig,
    query: &str,
    api_key: Option<&str>,
) -> Result<String, ApiError> {
    today_apod(&UreqTransport::new(), config, query, api_key)
}

/// Client for a local service exposing `GET /api/nasa/apod`.
#[derive(Debug, Clone)]
pub struct NasaMcpClient<T = UreqTransport> {
    proxy: ProxyClient,
    transport: T,
}

impl NasaMcpClient<UreqTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }

    pub fn from_config(config: &ApodConfig) -> Self {
        Self::new(&config.proxy_base_url)
    }
}

impl<T: Transport> NasaMcpClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            proxy: ProxyClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.proxy.base_url()
    }

    /// Fetch the APOD for `date` (`YYYY-MM-DD`), or today's when `None`.
    ///
    /// A malformed date fails with `ApiError::InvalidDate` before any
    /// request is sent.
    pub fn get_apod(&self, date: Option<&str>) -> Result<ApodRecord, ApiError> {
        self.proxy.get_apod(&self.transport, date)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use apod_core::{HttpRequest, HttpResponse, TransportError};

    use super::*;

    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl Transport for Counting {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.calls.set(self.calls.get() + 1);
            Err(TransportError("unreachable in this test".into()))
        }
    }

    #[test]
    fn client_uses_configured_base_url() {
        let config = ApodConfig {
            proxy_base_url: "http://proxy.local:9000/".to_string(),
            ..ApodConfig::default()
        };
        assert_eq!(
            NasaMcpClient::from_config(&config).base_url(),
            "http://proxy.local:9000"
        );
    }

    #[test]
    fn bad_date_does_not_touch_transport() {
        let client = NasaMcpClient::with_transport("http://localhost:8000", Counting::default());
        let err = client.get_apod(Some("2024-13-40")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDate(_)));
        assert_eq!(client.transport.calls.get(), 0);
    }

    #[test]
    fn valid_date_reaches_transport_once() {
        let client = NasaMcpClient::with_transport("http://localhost:8000", Counting::default());
        let err = client.get_apod(Some("2024-01-01")).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(client.transport.calls.get(), 1);
    }
}
