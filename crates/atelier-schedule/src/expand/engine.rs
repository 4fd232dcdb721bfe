use chrono::{NaiveDate, NaiveDateTime};

use atelier_core::config::ScheduleConfig;

use super::occurrences::Occurrences;
use super::options::ExpansionOptions;
use super::session::{CancelledSession, Session};
use crate::error::ScheduleResult;
use crate::format::{Locale, format_schedule};
use crate::rule::RecurrenceRule;

/// ## Summary
/// Expands `rule` into at most `max_sessions` sessions, in date order.
///
/// `now` only matters when the rule has no season start (the season then
/// starts on `now`'s day) or no season end (one year after the start).
/// Occurrences covered by an exception period are skipped and do not count
/// towards `max_sessions`.
///
/// ## Errors
/// Returns `ScheduleError::InvalidRule` if the rule fails validation.
pub fn generate_sessions(
    rule: &RecurrenceRule,
    now: NaiveDateTime,
    max_sessions: usize,
) -> ScheduleResult<Vec<Session>> {
    let sessions: Vec<Session> = Occurrences::new(rule, now.date())?
        .filter(|occurrence| !occurrence.is_cancelled())
        .map(|occurrence| occurrence.session)
        .take(max_sessions)
        .collect();

    tracing::debug!(
        sessions = sessions.len(),
        max_sessions,
        interval = rule.interval,
        "Generated sessions"
    );

    Ok(sessions)
}

/// Stateless entry point to the scheduling queries.
///
/// Holds only the session caps and the display locale, so a single engine
/// can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceEngine {
    options: ExpansionOptions,
    locale: Locale,
}

impl RecurrenceEngine {
    #[must_use]
    pub const fn new(options: ExpansionOptions, locale: Locale) -> Self {
        Self { options, locale }
    }

    /// ## Summary
    /// Builds an engine from the `[schedule]` configuration section.
    ///
    /// ## Errors
    /// Returns an error if a cap is zero or the locale is not supported.
    pub fn from_config(config: &ScheduleConfig) -> ScheduleResult<Self> {
        config.validate()?;
        let locale = config.locale.parse::<Locale>()?;
        Ok(Self::new(ExpansionOptions::from(config), locale))
    }

    #[must_use]
    pub const fn options(&self) -> &ExpansionOptions {
        &self.options
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// ## Summary
    /// Returns the first session starting strictly after `reference_time`.
    ///
    /// Only the first `next_session_cap` sessions of the season are
    /// considered; a later session is reported as `None`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn next_session(
        &self,
        rule: &RecurrenceRule,
        reference_time: NaiveDateTime,
    ) -> ScheduleResult<Option<Session>> {
        let sessions = generate_sessions(rule, reference_time, self.options.next_session_cap)?;
        let next = sessions
            .into_iter()
            .find(|session| session.starts_at > reference_time);

        if next.is_none() {
            tracing::debug!(
                %reference_time,
                cap = self.options.next_session_cap,
                "No upcoming session within cap"
            );
        }

        Ok(next)
    }

    /// ## Summary
    /// Counts the sessions of the season, up to `count_cap`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn count_sessions(&self, rule: &RecurrenceRule, now: NaiveDateTime) -> ScheduleResult<usize> {
        let count = generate_sessions(rule, now, self.options.count_cap)?.len();
        if count == self.options.count_cap {
            tracing::debug!(cap = count, "Session count reached cap");
        }
        Ok(count)
    }

    /// Describes the rule's schedule in the engine's locale.
    #[must_use]
    pub fn describe(&self, rule: &RecurrenceRule) -> String {
        let weekdays: Vec<_> = rule.weekdays.iter().copied().collect();
        format_schedule(
            &weekdays,
            rule.start_time,
            rule.end_time,
            rule.interval,
            self.locale,
        )
    }
}

#[expect(
    clippy::unused_self,
    reason = "Uncapped queries take the engine for a uniform call shape"
)]
impl RecurrenceEngine {
    /// ## Summary
    /// See [`generate_sessions`].
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn generate_sessions(
        &self,
        rule: &RecurrenceRule,
        now: NaiveDateTime,
        max_sessions: usize,
    ) -> ScheduleResult<Vec<Session>> {
        generate_sessions(rule, now, max_sessions)
    }

    /// ## Summary
    /// Returns up to `limit` sessions starting strictly after
    /// `reference_time`, scanning the whole season if needed.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn upcoming_sessions(
        &self,
        rule: &RecurrenceRule,
        reference_time: NaiveDateTime,
        limit: usize,
    ) -> ScheduleResult<Vec<Session>> {
        Ok(Occurrences::new(rule, reference_time.date())?
            .filter(|occurrence| !occurrence.is_cancelled())
            .map(|occurrence| occurrence.session)
            .skip_while(|session| session.starts_at <= reference_time)
            .take(limit)
            .collect())
    }

    /// ## Summary
    /// Returns every session whose date lies in `[from, to]`.
    ///
    /// The scan still starts at the season start so that interval weeks line
    /// up; it is bounded by days, not by a session cap. An inverted window
    /// yields no sessions.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn sessions_between(
        &self,
        rule: &RecurrenceRule,
        now: NaiveDateTime,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ScheduleResult<Vec<Session>> {
        let scan = Occurrences::new(rule, now.date())?;
        if from > to || from > scan.end() {
            return Ok(Vec::new());
        }

        Ok(scan
            .take_while(|occurrence| occurrence.session.date() <= to)
            .filter(|occurrence| !occurrence.is_cancelled() && occurrence.session.date() >= from)
            .map(|occurrence| occurrence.session)
            .collect())
    }

    /// ## Summary
    /// Returns up to `max` occurrences that exception periods removed, with
    /// the reason of the first period covering each.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRule` if the rule fails validation.
    pub fn cancelled_sessions(
        &self,
        rule: &RecurrenceRule,
        now: NaiveDateTime,
        max: usize,
    ) -> ScheduleResult<Vec<CancelledSession>> {
        Ok(Occurrences::new(rule, now.date())?
            .filter_map(|occurrence| {
                occurrence.exception.map(|period| CancelledSession {
                    session: occurrence.session,
                    reason: period.reason.clone(),
                })
            })
            .take(max)
            .collect())
    }
}
