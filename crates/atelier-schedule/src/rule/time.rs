use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Wall-clock time of a session, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// ## Summary
    /// Builds a time of day from its components.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the hour exceeds 23 or the
    /// minute exceeds 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidRule(format!(
                "time {hour}:{minute:02} is not a valid time of day"
            )));
        }
        Ok(Self { hour, minute })
    }

    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Converts to a `chrono` time with zero seconds.
    #[must_use]
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

/// Parses `HH:MM`, also accepting a single-digit hour and a trailing `:SS`
/// which is discarded.
impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidRule(format!("invalid time of day: {s:?}"));

        let mut parts = s.trim().split(':');
        let hour = parts
            .next()
            .filter(|p| (1..=2).contains(&p.len()))
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        let minute = parts
            .next()
            .filter(|p| p.len() == 2)
            .and_then(|p| p.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        if let Some(second) = parts.next()
            && !(second.len() == 2 && matches!(second.parse::<u8>(), Ok(v) if v <= 59))
        {
            return Err(invalid());
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        use chrono::Timelike;

        // chrono guarantees hour < 24 and minute < 60
        Self {
            hour: u8::try_from(time.hour()).unwrap_or(0),
            minute: u8::try_from(time.minute()).unwrap_or(0),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
