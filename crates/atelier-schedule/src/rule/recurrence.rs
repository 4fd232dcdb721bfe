use std::collections::BTreeSet;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::bound::deserialize_optional_day;
use super::{ExceptionPeriod, TimeOfDay, Weekday};
use crate::error::{ScheduleError, ScheduleResult};

/// Weekly recurrence of a workshop.
///
/// Field names follow the camelCase shape of stored workshop records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    /// Days on which sessions take place. May be empty.
    #[serde(default)]
    pub weekdays: BTreeSet<Weekday>,

    /// 1 = every week, N = every Nth week counted from the season start.
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// First day of the season (inclusive). Defaults to the day of "now".
    #[serde(
        default,
        deserialize_with = "deserialize_optional_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub season_start: Option<NaiveDate>,

    /// Last day of the season (inclusive). Defaults to one year after the
    /// season start.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_day",
        skip_serializing_if = "Option::is_none"
    )]
    pub season_end: Option<NaiveDate>,

    pub start_time: TimeOfDay,

    /// Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<TimeOfDay>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exception_periods: Vec<ExceptionPeriod>,
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceRule {
    /// Creates a weekly rule with no season bounds and no exceptions.
    #[must_use]
    pub fn weekly(weekdays: impl IntoIterator<Item = Weekday>, start_time: TimeOfDay) -> Self {
        Self {
            weekdays: weekdays.into_iter().collect(),
            interval: 1,
            season_start: None,
            season_end: None,
            start_time,
            end_time: None,
            exception_periods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_season(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.season_start = Some(start);
        self.season_end = Some(end);
        self
    }

    #[must_use]
    pub fn with_season_start(mut self, start: NaiveDate) -> Self {
        self.season_start = Some(start);
        self
    }

    #[must_use]
    pub fn with_season_end(mut self, end: NaiveDate) -> Self {
        self.season_end = Some(end);
        self
    }

    #[must_use]
    pub fn with_end_time(mut self, end_time: TimeOfDay) -> Self {
        self.end_time = Some(end_time);
        self
    }

    #[must_use]
    pub fn with_exception(mut self, period: ExceptionPeriod) -> Self {
        self.exception_periods.push(period);
        self
    }

    /// ## Summary
    /// Checks the rule for inputs the expansion cannot give a meaning to.
    ///
    /// An empty weekday set is valid and simply produces no sessions.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the interval is zero, the season
    /// ends before it starts, or an exception period ends before it starts.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.interval < 1 {
            return Err(ScheduleError::InvalidRule(format!(
                "interval must be at least 1, got {}",
                self.interval
            )));
        }

        if let (Some(start), Some(end)) = (self.season_start, self.season_end)
            && start > end
        {
            return Err(ScheduleError::InvalidRule(format!(
                "season ends ({end}) before it starts ({start})"
            )));
        }

        if let Some(period) = self.exception_periods.iter().find(|p| !p.is_ordered()) {
            return Err(ScheduleError::InvalidRule(format!(
                "exception period ends ({}) before it starts ({})",
                period.end, period.start
            )));
        }

        Ok(())
    }

    /// ## Summary
    /// Resolves the inclusive season window, filling in defaults relative to
    /// `today`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the default season end falls
    /// outside the supported calendar range.
    pub fn season(&self, today: NaiveDate) -> ScheduleResult<(NaiveDate, NaiveDate)> {
        let start = self.season_start.unwrap_or(today);
        let end = match self.season_end {
            Some(end) => end,
            None => start.checked_add_months(Months::new(12)).ok_or_else(|| {
                ScheduleError::InvalidRule(format!("season starting {start} has no representable end"))
            })?,
        };
        Ok((start, end))
    }

    /// Returns true if sessions may fall on `day`'s weekday.
    #[must_use]
    pub fn matches_weekday(&self, day: Weekday) -> bool {
        self.weekdays.contains(&day)
    }

    /// Returns the first exception period covering `day`, if any.
    #[must_use]
    pub fn exception_for(&self, day: NaiveDate) -> Option<&ExceptionPeriod> {
        self.exception_periods.iter().find(|p| p.covers(day))
    }
}
