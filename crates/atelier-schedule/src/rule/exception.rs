use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::bound::deserialize_day;

/// A closed range of days during which sessions do not take place.
///
/// Bounds are stored as whole days: a period authored as
/// `2025-01-07T18:00 .. 2025-01-09T08:00` covers January 7th, 8th and 9th
/// entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionPeriod {
    #[serde(deserialize_with = "deserialize_day")]
    pub start: NaiveDate,
    #[serde(deserialize_with = "deserialize_day")]
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ExceptionPeriod {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            reason: None,
        }
    }

    /// Builds a period from timestamps, dropping their time-of-day.
    #[must_use]
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::new(start.date(), end.date())
    }

    /// Sets the reason shown for cancelled sessions.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns true if `day` lies within `[start, end]`.
    #[must_use]
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns true if the period is well-formed (start not after end).
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}
