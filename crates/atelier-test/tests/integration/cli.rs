use std::path::PathBuf;

use atelier_test::app::cli::{CliArgs, Command, OutputFormat};
use atelier_test::app::command::{RunContext, run};
use atelier_test::app::input::{load_rule, parse_now};
use atelier_test::core::config::ScheduleConfig;
use atelier_test::schedule::RecurrenceEngine;
use clap::Parser;

fn rule_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/tue_thu_holiday.json")
}

fn run_args(args: &[&str]) -> String {
    let args = CliArgs::try_parse_from(args).unwrap();
    let config = ScheduleConfig::default();
    let engine = RecurrenceEngine::from_config(&config).unwrap();
    let ctx = RunContext {
        engine: &engine,
        now: parse_now(args.now.as_deref().unwrap()).unwrap(),
        tz: config.tz().unwrap(),
        format: args.format,
    };
    let rule = load_rule(&args.rule).unwrap();
    run(&args.command, &rule, &ctx).unwrap()
}

#[test_log::test]
fn sessions_from_rule_file() {
    let path = rule_path();
    let out = run_args(&[
        "atelier",
        "sessions",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
    ]);
    assert_eq!(out, "2025-01-02 14:00-16:00\n2025-01-14 14:00-16:00");
}

#[test]
fn next_after_holiday() {
    let path = rule_path();
    let out = run_args(&[
        "atelier",
        "next",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-03T09:00",
    ]);
    assert_eq!(out, "2025-01-14 14:00-16:00");
}

#[test]
fn cancelled_lists_reason() {
    let path = rule_path();
    let out = run_args(&[
        "atelier",
        "cancelled",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
    ]);
    assert_eq!(
        out,
        "2025-01-07 14:00-16:00 (Vacances)\n2025-01-09 14:00-16:00 (Vacances)"
    );
}

#[test]
fn describe_uses_configured_locale() {
    let path = rule_path();
    let out = run_args(&[
        "atelier",
        "describe",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
    ]);
    assert_eq!(out, "Mardi et Jeudi 14h-16h");
}

#[test]
fn count_as_json() {
    let path = rule_path();
    let out = run_args(&[
        "atelier",
        "count",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
        "--format",
        "json",
    ]);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["count"], 2);
}

#[test]
fn between_is_inclusive() {
    let path = rule_path();
    let args = CliArgs::try_parse_from([
        "atelier",
        "between",
        "--from",
        "2025-01-02",
        "--to",
        "2025-01-02",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
    ])
    .unwrap();
    assert_eq!(
        args.command,
        Command::Between {
            from: "2025-01-02".to_string(),
            to: "2025-01-02".to_string(),
        }
    );
    assert_eq!(args.format, OutputFormat::Text);

    let out = run_args(&[
        "atelier",
        "between",
        "--from",
        "2025-01-02",
        "--to",
        "2025-01-02",
        "--rule",
        path.to_str().unwrap(),
        "--now",
        "2025-01-01",
    ]);
    assert_eq!(out, "2025-01-02 14:00-16:00");
}
