use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::rule::RecurrenceRule;

/// One concrete occurrence of a recurring workshop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Session {
    pub starts_at: NaiveDateTime,

    /// Set when the rule has an end time later than its start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<NaiveDateTime>,
}

impl Session {
    /// Places the rule's start and end times on `day`.
    #[must_use]
    pub fn on(day: NaiveDate, rule: &RecurrenceRule) -> Self {
        Self {
            starts_at: day.and_time(rule.start_time.to_naive_time()),
            ends_at: rule
                .end_time
                .filter(|end| *end > rule.start_time)
                .map(|end| day.and_time(end.to_naive_time())),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }
}

/// An occurrence suppressed by an exception period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelledSession {
    pub session: Session,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
