//! Invariants checked over a corpus of rules rather than single scenarios.

use std::collections::BTreeSet;

use atelier_test::fixtures::{new_year, rule_corpus};
use atelier_test::schedule::{
    RecurrenceEngine, RecurrenceRule, Session, Weekday, generate_sessions,
};
use chrono::Datelike;

const UNCAPPED: usize = usize::MAX;

fn sessions(rule: &RecurrenceRule) -> Vec<Session> {
    generate_sessions(rule, new_year(), UNCAPPED).unwrap()
}

#[test]
fn sessions_fall_on_configured_weekdays() {
    for rule in rule_corpus() {
        for session in sessions(&rule) {
            assert!(rule.weekdays.contains(&Weekday::from(session.date().weekday())));
        }
    }
}

#[test]
fn sessions_stay_within_season() {
    for rule in rule_corpus() {
        let (start, end) = (rule.season_start.unwrap(), rule.season_end.unwrap());
        for session in sessions(&rule) {
            assert!(start <= session.date() && session.date() <= end);
        }
    }
}

#[test]
fn sessions_avoid_exception_periods() {
    for rule in rule_corpus() {
        for session in sessions(&rule) {
            assert!(
                rule.exception_periods.iter().all(|p| !p.covers(session.date())),
                "{} falls in an exception period",
                session.starts_at
            );
        }
    }
}

#[test]
fn sessions_strictly_increase() {
    for rule in rule_corpus() {
        let generated = sessions(&rule);
        assert!(generated.windows(2).all(|w| w[0].starts_at < w[1].starts_at));
    }
}

#[test]
fn single_weekday_spacing_is_interval_weeks() {
    for mut rule in rule_corpus().into_iter().filter(|r| r.weekdays.len() == 1) {
        rule.exception_periods.clear();
        let expected = 7 * i64::from(rule.interval);
        for pair in sessions(&rule).windows(2) {
            assert_eq!((pair[1].starts_at - pair[0].starts_at).num_days(), expected);
        }
    }
}

#[test]
fn generation_is_repeatable() {
    for rule in rule_corpus() {
        assert_eq!(sessions(&rule), sessions(&rule));
    }
}

#[test]
fn cancelled_and_generated_partition_the_occurrences() {
    let engine = RecurrenceEngine::default();
    for rule in rule_corpus() {
        let mut without_exceptions = rule.clone();
        without_exceptions.exception_periods.clear();

        let kept: BTreeSet<Session> = sessions(&rule).into_iter().collect();
        let cancelled: BTreeSet<Session> = engine
            .cancelled_sessions(&rule, new_year(), UNCAPPED)
            .unwrap()
            .into_iter()
            .map(|c| c.session)
            .collect();

        assert!(kept.is_disjoint(&cancelled));
        let all: BTreeSet<Session> = kept.union(&cancelled).copied().collect();
        let expected: BTreeSet<Session> = sessions(&without_exceptions).into_iter().collect();
        assert_eq!(all, expected);
    }
}

#[test]
fn window_over_whole_season_matches_generation() {
    let engine = RecurrenceEngine::default();
    for rule in rule_corpus() {
        let (start, end) = (rule.season_start.unwrap(), rule.season_end.unwrap());
        assert_eq!(
            engine.sessions_between(&rule, new_year(), start, end).unwrap(),
            sessions(&rule)
        );
    }
}

#[test]
fn count_never_exceeds_cap() {
    let engine = RecurrenceEngine::default();
    for rule in rule_corpus() {
        let count = engine.count_sessions(&rule, new_year()).unwrap();
        assert_eq!(count, sessions(&rule).len().min(engine.options().count_cap));
    }
}
