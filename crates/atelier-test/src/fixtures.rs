//! Dates, times and rules used across integration tests.

#![expect(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Fixtures are built from constant, known-valid values"
)]

use atelier_schedule::{ExceptionPeriod, RecurrenceRule, TimeOfDay, Weekday};
use chrono::{NaiveDate, NaiveDateTime};

#[must_use]
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[must_use]
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    day(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

#[must_use]
pub fn time(h: u8, m: u8) -> TimeOfDay {
    TimeOfDay::new(h, m).unwrap()
}

/// Reference "now" well before every fixture season.
#[must_use]
pub fn new_year() -> NaiveDateTime {
    at(2025, 1, 1, 0, 0)
}

/// Tuesdays and Thursdays at 14:00, January 1st to 15th 2025.
#[must_use]
pub fn tue_thu_january() -> RecurrenceRule {
    RecurrenceRule::weekly([Weekday::Tuesday, Weekday::Thursday], time(14, 0))
        .with_season(day(2025, 1, 1), day(2025, 1, 15))
}

/// [`tue_thu_january`] with a holiday from the 7th to the 9th.
#[must_use]
pub fn tue_thu_with_holiday() -> RecurrenceRule {
    tue_thu_january().with_exception(
        ExceptionPeriod::new(day(2025, 1, 7), day(2025, 1, 9)).with_reason("holiday"),
    )
}

/// Every other Monday from January 6th 2025 to March 1st.
#[must_use]
pub fn biweekly_monday() -> RecurrenceRule {
    RecurrenceRule::weekly([Weekday::Monday], time(9, 0))
        .with_interval(2)
        .with_season(day(2025, 1, 6), day(2025, 3, 1))
}

/// A spread of rules exercising intervals, season starts on every weekday and
/// overlapping exception periods.
#[must_use]
pub fn rule_corpus() -> Vec<RecurrenceRule> {
    let weekday_sets: [&[Weekday]; 4] = [
        &[Weekday::Monday],
        &[Weekday::Sunday, Weekday::Wednesday],
        &[Weekday::Tuesday, Weekday::Thursday, Weekday::Saturday],
        &Weekday::ALL,
    ];

    let mut rules = Vec::new();
    for (i, weekdays) in weekday_sets.iter().enumerate() {
        for interval in 1..=4 {
            for start_offset in 0..7 {
                let start = day(2025, 3, 1) + chrono::Days::new(start_offset);
                let end = start + chrono::Days::new(120);
                let mut rule = RecurrenceRule::weekly(weekdays.iter().copied(), time(18, 30))
                    .with_interval(interval)
                    .with_season(start, end);
                if i % 2 == 0 {
                    rule = rule
                        .with_exception(ExceptionPeriod::new(day(2025, 4, 14), day(2025, 4, 27)))
                        .with_exception(ExceptionPeriod::new(day(2025, 4, 25), day(2025, 5, 2)));
                }
                rules.push(rule);
            }
        }
    }
    rules
}
