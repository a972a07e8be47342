//! Fixed text layout for an APOD entry.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::ApiError;
use crate::types::{ApodData, ApodRecord, ERROR_KEY};

/// Render fetched APOD data, or pass an inline error message through.
///
/// A map carrying an `error` key yields that message verbatim and every
/// other key is ignored. Otherwise `title`, `date`, `url` and `explanation`
/// must be present; the data is assumed to come from a successful fetch, so
/// a missing one is a fault rather than something to paper over.
pub fn format_apod_response(data: &ApodData) -> Result<String, ApiError> {
    if let Some(message) = data.get(ERROR_KEY) {
        return Ok(scalar_text(message).into_owned());
    }

    let title = required(data, "title")?;
    let date = required(data, "date")?;
    let link = match data.get("hdurl").map(scalar_text) {
        Some(hd) if !hd.is_empty() => hd,
        _ => required(data, "url")?,
    };
    let explanation = required(data, "explanation")?;

    Ok(render(&title, &date, &link, &explanation))
}

/// Same layout for an already validated record.
pub fn format_apod_record(record: &ApodRecord) -> String {
    render(
        &record.title,
        &record.date,
        record.image_url(),
        &record.explanation,
    )
}

fn render(title: &str, date: &str, link: &str, explanation: &str) -> String {
    format!(
        "Today's astronomy picture:\n\
         \n\
         Title: {title}\n\
         Date: {date}\n\
         Image: {link}\n\
         \n\
         Description: {explanation}"
    )
}

fn required<'a>(data: &'a ApodData, field: &str) -> Result<Cow<'a, str>, ApiError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(ApiError::MissingField(field.to_string())),
        Some(value) => Ok(scalar_text(value)),
    }
}

fn scalar_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}
