use std::io::Read;
use std::path::Path;

use atelier_schedule::RecurrenceRule;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads a rule from `path`, or from stdin when `path` is `-`.
///
/// ## Errors
/// Returns an error if the source cannot be read or is not a valid rule.
pub fn load_rule(path: &Path) -> AppResult<RecurrenceRule> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    tracing::debug!(path = %path.display(), bytes = raw.len(), "Read rule");
    parse_rule(&raw)
}

/// ## Summary
/// Parses a rule from its JSON record form.
///
/// ## Errors
/// Returns `AppError::JsonError` if the JSON does not describe a rule.
pub fn parse_rule(raw: &str) -> AppResult<RecurrenceRule> {
    Ok(serde_json::from_str(raw)?)
}

/// ## Summary
/// Parses a reference time. A bare date means midnight; an RFC 3339 value
/// with an offset keeps its own wall-clock time, as rule bounds do.
///
/// ## Errors
/// Returns `AppError::InputError` if the value matches no accepted form.
pub fn parse_now(raw: &str) -> AppResult<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| AppError::InputError(format!("invalid reference time: {raw:?}")))
}

/// ## Summary
/// Parses a `YYYY-MM-DD` date.
///
/// ## Errors
/// Returns `AppError::InputError` if the value is not a valid date.
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| AppError::InputError(format!("invalid date {raw:?}: {e}")))
}
