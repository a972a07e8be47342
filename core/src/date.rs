//! `YYYY-MM-DD` date validation for the proxy client's date filter.

use chrono::NaiveDate;

use crate::error::ApiError;

/// Accept only the exact `YYYY-MM-DD` shape naming a real calendar day.
///
/// The lexical check runs first because chrono's `%m`/`%d` also accept
/// single-digit fields such as `2024-1-5`.
pub fn validate_date(date: &str) -> Result<NaiveDate, ApiError> {
    let invalid = || ApiError::InvalidDate(date.to_string());

    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())
}
