//! Day-by-day scan of a season.
//!
//! The scan walks every day so that week counting and exception filtering
//! interleave exactly: the week counter advances after each Sunday whether or
//! not that Sunday produced an occurrence, so weeks run Monday through Sunday
//! and the first (possibly partial) week is week 0.

use std::num::NonZeroU32;

use chrono::{Datelike, NaiveDate};

use super::session::Session;
use crate::error::{ScheduleError, ScheduleResult};
use crate::rule::{ExceptionPeriod, RecurrenceRule, Weekday};

/// A day selected by the weekday and interval logic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Occurrence<'a> {
    pub session: Session,
    /// The period suppressing this occurrence, if any.
    pub exception: Option<&'a ExceptionPeriod>,
}

impl Occurrence<'_> {
    pub fn is_cancelled(&self) -> bool {
        self.exception.is_some()
    }
}

/// Iterator over the occurrences of a validated rule, in date order.
pub(crate) struct Occurrences<'a> {
    rule: &'a RecurrenceRule,
    interval: NonZeroU32,
    next_day: Option<NaiveDate>,
    end: NaiveDate,
    week_counter: u32,
}

impl<'a> Occurrences<'a> {
    /// ## Summary
    /// Validates `rule` and prepares a scan of its season, using `today` for
    /// any missing season bound.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn new(rule: &'a RecurrenceRule, today: NaiveDate) -> ScheduleResult<Self> {
        rule.validate()?;
        let interval = NonZeroU32::new(rule.interval)
            .ok_or_else(|| ScheduleError::InvalidRule("interval must be at least 1".to_string()))?;
        let (start, end) = rule.season(today)?;

        tracing::trace!(%start, %end, interval, "Scanning season");

        Ok(Self {
            rule,
            interval,
            // Nothing can match: skip the scan entirely.
            next_day: (!rule.weekdays.is_empty()).then_some(start),
            end,
            week_counter: 0,
        })
    }

    /// Last day of the scanned season.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(day) = self.next_day.filter(|day| *day <= self.end) {
            let active_week = self.week_counter % self.interval.get() == 0;
            let weekday = Weekday::from(day.weekday());

            if weekday == Weekday::Sunday {
                self.week_counter += 1;
            }
            self.next_day = day.succ_opt();

            if active_week && self.rule.matches_weekday(weekday) {
                return Some(Occurrence {
                    session: Session::on(day, self.rule),
                    exception: self.rule.exception_for(day),
                });
            }
        }

        self.next_day = None;
        None
    }
}
