//! Renders a workshop rule as RFC 5545 `DTSTART`/`RRULE`/`EXDATE` lines.
//!
//! The engine closes a week after each Sunday, which is `WKST=MO` in
//! iCalendar terms, so the exported `INTERVAL` selects the same weeks.

use chrono::{NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use rrule::RRuleSet;

use crate::error::{ScheduleError, ScheduleResult};
use crate::expand::{Session, generate_sessions};
use crate::rule::RecurrenceRule;

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// ## Summary
/// Renders `rule` as iCalendar recurrence lines in time zone `tz`.
///
/// `UNTIL` is the end of the last season day converted to UTC. Occurrences
/// removed by exception periods become `EXDATE` lines.
///
/// An occurrence whose local start time is skipped by a DST change cannot be
/// written faithfully: recurrence expanders shift it past the gap while the
/// engine keeps the wall-clock time. Such rules are rejected.
///
/// ## Errors
/// Returns `ScheduleError::InvalidRule` if the rule fails validation, has no
/// weekdays, or has a season start or occurrence (kept or cancelled) whose
/// start time does not exist in `tz`. Returns `ScheduleError::Export` if the season end does
/// not exist in `tz`.
pub fn to_rrule_text(rule: &RecurrenceRule, now: NaiveDateTime, tz: Tz) -> ScheduleResult<String> {
    rule.validate()?;
    if rule.weekdays.is_empty() {
        return Err(ScheduleError::InvalidRule(
            "a rule without weekdays cannot be exported".to_string(),
        ));
    }

    if let Some(session) = generate_sessions(rule, now, usize::MAX)?
        .into_iter()
        .find(|session| to_utc(session.starts_at, tz).is_none())
    {
        return Err(skipped_time(session, tz));
    }

    let (start, end) = rule.season(now.date())?;
    let dtstart = start.and_time(rule.start_time.to_naive_time());
    if to_utc(dtstart, tz).is_none() {
        return Err(ScheduleError::InvalidRule(format!(
            "season start {dtstart} does not exist in {tz} (DST gap)"
        )));
    }
    let until = end
        .and_hms_opt(23, 59, 59)
        .and_then(|last_second| to_utc(last_second, tz))
        .ok_or_else(|| ScheduleError::Export(format!("season end {end} does not exist in {tz}")))?;

    let byday = rule
        .weekdays
        .iter()
        .map(|day| day.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut text = format!(
        "DTSTART;TZID={}:{}\nRRULE:FREQ=WEEKLY;INTERVAL={};WKST=MO;BYDAY={byday};UNTIL={}",
        tz.name(),
        dtstart.format(LOCAL_FORMAT),
        rule.interval,
        until.format(UTC_FORMAT),
    );

    for session in cancelled(rule, now)? {
        let utc = to_utc(session.starts_at, tz).ok_or_else(|| skipped_time(session, tz))?;
        text.push_str(&format!("\nEXDATE:{}", utc.format(UTC_FORMAT)));
    }

    tracing::trace!(rrule = %text, "Exported recurrence");
    Ok(text)
}

/// ## Summary
/// Exports `rule` and parses the result with the `rrule` crate, giving an
/// independently expandable recurrence set.
///
/// ## Errors
/// Returns the errors of [`to_rrule_text`], and `ScheduleError::Export` if
/// the `rrule` crate rejects the exported text.
pub fn to_rrule_set(rule: &RecurrenceRule, now: NaiveDateTime, tz: Tz) -> ScheduleResult<RRuleSet> {
    to_rrule_text(rule, now, tz)?
        .parse::<RRuleSet>()
        .map_err(|e| ScheduleError::Export(e.to_string()))
}

fn cancelled(rule: &RecurrenceRule, now: NaiveDateTime) -> ScheduleResult<Vec<Session>> {
    Ok(crate::expand::RecurrenceEngine::default()
        .cancelled_sessions(rule, now, usize::MAX)?
        .into_iter()
        .map(|cancelled| cancelled.session)
        .collect())
}

fn skipped_time(session: Session, tz: Tz) -> ScheduleError {
    tracing::debug!(starts_at = %session.starts_at, %tz, "Occurrence falls in a DST gap");
    ScheduleError::InvalidRule(format!(
        "session at {} does not exist in {tz} (DST gap)",
        session.starts_at
    ))
}

fn to_utc(local: NaiveDateTime, tz: Tz) -> Option<NaiveDateTime> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.naive_utc())
}
