use atelier_test::fixtures::{day, new_year, rule_corpus, time};
use atelier_test::schedule::export::to_rrule_set;
use atelier_test::schedule::{RecurrenceRule, ScheduleError, Weekday, generate_sessions};
use chrono::NaiveDateTime;

/// ## Summary
/// An exported rule, expanded by the `rrule` crate, yields exactly the
/// engine's sessions, including across the spring DST change.
#[test_log::test]
fn exported_rules_expand_like_the_engine() {
    let tz = chrono_tz::Europe::Paris;

    for rule in rule_corpus() {
        let exported: Vec<NaiveDateTime> = to_rrule_set(&rule, new_year(), tz)
            .unwrap()
            .all(1000)
            .dates
            .iter()
            .map(|dt| dt.with_timezone(&tz).naive_local())
            .collect();
        let generated: Vec<NaiveDateTime> = generate_sessions(&rule, new_year(), 1000)
            .unwrap()
            .iter()
            .map(|s| s.starts_at)
            .collect();

        tracing::debug!(
            interval = rule.interval,
            sessions = generated.len(),
            "Comparing exported expansion"
        );
        assert_eq!(
            exported, generated,
            "interval {} from {:?}",
            rule.interval, rule.season_start
        );
    }
}

#[test_log::test]
fn sessions_in_a_dst_gap_are_not_exported() {
    let rule = RecurrenceRule::weekly([Weekday::Sunday], time(2, 30))
        .with_season(day(2025, 3, 23), day(2025, 4, 7));

    let result = to_rrule_set(&rule, new_year(), chrono_tz::Europe::Paris);
    tracing::debug!(?result, "Export across the spring DST change");
    assert!(matches!(result, Err(ScheduleError::InvalidRule(_))));
}
