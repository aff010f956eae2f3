//! Input validation helpers
//!
//! Request bodies arrive as loosely-typed drafts (`Option<serde_json::Value>`
//! per field) so that every rule can report its own message. These helpers turn
//! one draft field into a typed value or an [`AppError`].

use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;

use crate::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Person and table names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Wire format of dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted wire formats of times, tried in order
pub const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// A property counts as present when it is neither absent, `null` nor `""`.
pub fn present(value: Option<Value>) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        other => other,
    }
}

/// Validate that a required string is present, textual and within the length limit.
pub fn required_text(value: Option<Value>, field: &str, max_len: usize) -> AppResult<String> {
    match present(value) {
        None => Err(AppError::required(field)),
        Some(Value::String(s)) => {
            if s.trim().is_empty() {
                return Err(AppError::validation(format!("{field} must not be empty")));
            }
            if s.chars().count() > max_len {
                return Err(AppError::validation(format!(
                    "{field} is too long ({} chars, max {max_len})",
                    s.chars().count()
                )));
            }
            Ok(s)
        }
        Some(_) => Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("{field} must be text"),
        )),
    }
}

/// Interpret a JSON value as a whole number. Integral floats (`4.0`) are accepted.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parse an `HH:MM` or `HH:MM:SS` time
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}
