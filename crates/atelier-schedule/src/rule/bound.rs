//! Day-granularity parsing for season and exception bounds.
//!
//! Bounds are often stored with a time-of-day attached. Only the calendar
//! date in the author's offset is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::{ScheduleError, ScheduleResult};

/// ## Summary
/// Parses a date, local date-time or RFC 3339 timestamp and returns its
/// calendar day.
///
/// ## Errors
/// Returns `ScheduleError::InvalidRule` if none of the accepted forms match.
pub(crate) fn parse_day(s: &str) -> ScheduleResult<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt.date());
        }
    }

    Err(ScheduleError::InvalidRule(format!("invalid date: {s:?}")))
}

pub(super) fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_day(&raw).map_err(serde::de::Error::custom)
}

pub(super) fn deserialize_optional_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_day(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
