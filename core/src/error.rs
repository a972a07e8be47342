//! Error types for the APOD client core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "no picture for that date" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.
//!
//! The fetcher never returns these; it folds every failure into an inline
//! error message. They surface from the proxy client and the formatter.

use thiserror::Error;

use crate::http::TransportError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The supplied date is not a real `YYYY-MM-DD` calendar date. Raised
    /// before any request is sent.
    #[error("Invalid date format. Please use YYYY-MM-DD (got {0:?})")]
    InvalidDate(String),

    /// The server returned 404: no APOD for the requested date.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the APOD record shape.
    #[error("response validation failed: {0}")]
    Validation(String),

    /// A field the formatter requires is absent from the record.
    #[error("APOD data is missing required field `{0}`")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_details() {
        assert_eq!(
            ApiError::HttpError {
                status: 503,
                body: "down".into()
            }
            .to_string(),
            "HTTP 503: down"
        );
        assert_eq!(
            ApiError::MissingField("title".into()).to_string(),
            "APOD data is missing required field `title`"
        );
        assert!(ApiError::InvalidDate("2024-13-40".into())
            .to_string()
            .contains("YYYY-MM-DD"));
    }

    #[test]
    fn transport_error_converts() {
        let err: ApiError = TransportError("connection refused".into()).into();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}
