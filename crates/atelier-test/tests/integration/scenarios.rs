use atelier_test::fixtures::{
    at, biweekly_monday, day, new_year, time, tue_thu_january, tue_thu_with_holiday,
};
use atelier_test::schedule::{
    Locale, RecurrenceEngine, RecurrenceRule, ScheduleError, Session, Weekday, format_schedule,
    generate_sessions,
};

fn starts(sessions: &[Session]) -> Vec<chrono::NaiveDateTime> {
    sessions.iter().map(|s| s.starts_at).collect()
}

/// ## Summary
/// Tuesday/Thursday workshop over the first half of January.
#[test_log::test]
fn tuesday_thursday_first_half_of_january() {
    let sessions = generate_sessions(&tue_thu_january(), new_year(), 100).unwrap();
    tracing::debug!(count = sessions.len(), "Generated January sessions");

    assert_eq!(
        starts(&sessions),
        vec![
            at(2025, 1, 2, 14, 0),
            at(2025, 1, 7, 14, 0),
            at(2025, 1, 9, 14, 0),
            at(2025, 1, 14, 14, 0),
        ]
    );
}

#[test_log::test]
fn holiday_removes_covered_sessions() {
    let sessions = generate_sessions(&tue_thu_with_holiday(), new_year(), 100).unwrap();
    tracing::debug!(?sessions, "Sessions around the holiday");

    assert_eq!(
        starts(&sessions),
        vec![at(2025, 1, 2, 14, 0), at(2025, 1, 14, 14, 0)]
    );
}

#[test]
fn biweekly_monday_spacing() {
    let sessions = generate_sessions(&biweekly_monday(), new_year(), 100).unwrap();

    assert_eq!(sessions[0].date(), day(2025, 1, 6));
    assert_eq!(
        sessions.iter().map(Session::date).collect::<Vec<_>>(),
        vec![day(2025, 1, 6), day(2025, 1, 20), day(2025, 2, 3), day(2025, 2, 17)]
    );
    for pair in sessions.windows(2) {
        assert_eq!((pair[1].starts_at - pair[0].starts_at).num_days(), 14);
    }
}

#[test]
fn empty_weekdays_yield_nothing() {
    let rule = RecurrenceRule::weekly([], time(10, 0)).with_season(day(2025, 1, 1), day(2025, 12, 31));
    let engine = RecurrenceEngine::default();

    assert!(generate_sessions(&rule, new_year(), 100).unwrap().is_empty());
    assert_eq!(engine.next_session(&rule, new_year()).unwrap(), None);
    assert_eq!(engine.count_sessions(&rule, new_year()).unwrap(), 0);
}

#[test]
fn two_day_description() {
    assert_eq!(
        format_schedule(
            &[Weekday::Monday, Weekday::Wednesday],
            time(16, 0),
            Some(time(18, 0)),
            1,
            Locale::French,
        ),
        "Lundi et Mercredi 16h-18h"
    );
    assert_eq!(
        format_schedule(
            &[Weekday::Monday, Weekday::Wednesday],
            time(16, 0),
            Some(time(18, 0)),
            1,
            Locale::English,
        ),
        "Monday and Wednesday 4pm-6pm"
    );
}

#[test]
fn single_day_biweekly_description() {
    let french = format_schedule(&[Weekday::Monday], time(9, 0), Some(time(9, 30)), 2, Locale::French);
    assert!(french.starts_with("Tous les lundis"));
    assert!(french.contains("09h-09h30"));
    assert!(french.ends_with("(toutes les deux semaines)"));

    let english = format_schedule(&[Weekday::Monday], time(9, 0), Some(time(9, 30)), 2, Locale::English);
    assert!(english.contains("Every Monday"));
    assert!(english.contains("(every 2 weeks)"));
}

#[test]
fn zero_interval_is_invalid_rule() {
    let rule = tue_thu_january().with_interval(0);
    assert!(matches!(
        generate_sessions(&rule, new_year(), 10),
        Err(ScheduleError::InvalidRule(_))
    ));
}

#[test]
fn single_day_season() {
    let thursday = RecurrenceRule::weekly([Weekday::Thursday], time(14, 0))
        .with_season(day(2025, 1, 2), day(2025, 1, 2));
    assert_eq!(
        starts(&generate_sessions(&thursday, new_year(), 10).unwrap()),
        vec![at(2025, 1, 2, 14, 0)]
    );

    let friday = RecurrenceRule::weekly([Weekday::Friday], time(14, 0))
        .with_season(day(2025, 1, 2), day(2025, 1, 2));
    assert!(generate_sessions(&friday, new_year(), 10).unwrap().is_empty());
}

#[test]
fn next_session_during_holiday_skips_to_after() {
    let engine = RecurrenceEngine::default();
    let next = engine
        .next_session(&tue_thu_with_holiday(), at(2025, 1, 6, 12, 0))
        .unwrap();
    assert_eq!(next.map(|s| s.starts_at), Some(at(2025, 1, 14, 14, 0)));
}

#[test]
fn rule_from_record_json() {
    let rule: RecurrenceRule = serde_json::from_str(
        r#"{
            "weekdays": [2, 4],
            "interval": 1,
            "seasonStart": "2025-01-01T00:00:00.000Z",
            "seasonEnd": "2025-01-15T23:00:00.000Z",
            "startTime": "14:00",
            "endTime": "16:00",
            "exceptionPeriods": [
                {"start": "2025-01-07T08:00:00", "end": "2025-01-09T07:00:00", "reason": "holiday"}
            ]
        }"#,
    )
    .unwrap();

    let sessions = generate_sessions(&rule, new_year(), 100).unwrap();
    assert_eq!(
        starts(&sessions),
        vec![at(2025, 1, 2, 14, 0), at(2025, 1, 14, 14, 0)]
    );
    assert_eq!(sessions[0].ends_at, Some(at(2025, 1, 2, 16, 0)));
}
