//! Sources of "now" for the engine.
//!
//! Engine operations never read the system clock themselves; callers pass
//! the reference time explicitly, usually obtained from one of these.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

use atelier_core::config::ScheduleConfig;

use crate::error::ScheduleResult;

/// Supplies the current local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it to a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// ## Summary
    /// Builds a clock for the configured time zone.
    ///
    /// ## Errors
    /// Returns an error if the configured time zone is unknown.
    pub fn from_config(config: &ScheduleConfig) -> ScheduleResult<Self> {
        Ok(Self::new(config.tz()?))
    }

    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.tz
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
