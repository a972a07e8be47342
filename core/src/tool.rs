//! The natural-language "today's APOD" tool: fetch, then format.

use tracing::debug;

use crate::config::ApodConfig;
use crate::error::ApiError;
use crate::fetcher::ApodFetcher;
use crate::format::format_apod_response;
use crate::http::Transport;

/// Fetch the current APOD and render it as text.
///
/// `query` is accepted for tool-calling compatibility and not interpreted;
/// the tool always returns today's picture. `api_key` overrides the
/// configured key for this call only.
///
/// Fetch failures come back as `Ok` with the inline error message. The only
/// `Err` is a formatter fault on a response missing a required field.
pub fn today_apod<T: Transport + ?Sized>(
    transport: &T,
    config: &ApodConfig,
    query: &str,
    api_key: Option<&str>,
) -> Result<String, ApiError> {
    debug!(query, "today_apod invoked; query text is not interpreted");
    let key = config.effective_api_key(api_key);
    let data = ApodFetcher::new(&config.apod_endpoint).fetch(transport, &key);
    format_apod_response(&data)
}
