use atelier_schedule::export::to_rrule_text;
use atelier_schedule::{CancelledSession, RecurrenceEngine, RecurrenceRule, Session};
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde_json::json;

use crate::cli::{Command, OutputFormat};
use crate::error::AppResult;
use crate::input::parse_date;

const TIME_FORMAT: &str = "%H:%M";

/// Everything a command needs besides the rule itself.
pub struct RunContext<'a> {
    pub engine: &'a RecurrenceEngine,
    pub now: NaiveDateTime,
    pub tz: Tz,
    pub format: OutputFormat,
}

enum Output {
    Sessions(Vec<Session>),
    Next(Option<Session>),
    Count(usize),
    Cancelled(Vec<CancelledSession>),
    Description(String),
    Rrule(String),
}

/// ## Summary
/// Runs `command` against `rule` and renders the result.
///
/// ## Errors
/// Returns an error if the rule is invalid or a command argument cannot be
/// parsed.
pub fn run(command: &Command, rule: &RecurrenceRule, ctx: &RunContext<'_>) -> AppResult<String> {
    tracing::debug!(?command, now = %ctx.now, "Running command");

    let output = match command {
        Command::Sessions { limit } => {
            Output::Sessions(ctx.engine.generate_sessions(rule, ctx.now, *limit)?)
        }
        Command::Next => Output::Next(ctx.engine.next_session(rule, ctx.now)?),
        Command::Count => Output::Count(ctx.engine.count_sessions(rule, ctx.now)?),
        Command::Describe => Output::Description(ctx.engine.describe(rule)),
        Command::Cancelled { limit } => {
            Output::Cancelled(ctx.engine.cancelled_sessions(rule, ctx.now, *limit)?)
        }
        Command::Upcoming { limit } => {
            Output::Sessions(ctx.engine.upcoming_sessions(rule, ctx.now, *limit)?)
        }
        Command::Between { from, to } => Output::Sessions(ctx.engine.sessions_between(
            rule,
            ctx.now,
            parse_date(from)?,
            parse_date(to)?,
        )?),
        Command::Export => Output::Rrule(to_rrule_text(rule, ctx.now, ctx.tz)?),
    };

    match ctx.format {
        OutputFormat::Text => Ok(render_text(&output)),
        OutputFormat::Json => render_json(&output),
    }
}

fn session_line(session: &Session) -> String {
    let start = session.starts_at.format("%Y-%m-%d %H:%M");
    match session.ends_at {
        Some(end) => format!("{start}-{}", end.format(TIME_FORMAT)),
        None => start.to_string(),
    }
}

fn render_text(output: &Output) -> String {
    match output {
        Output::Sessions(sessions) => sessions
            .iter()
            .map(session_line)
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Next(Some(session)) => session_line(session),
        Output::Next(None) => "no upcoming session".to_string(),
        Output::Count(count) => count.to_string(),
        Output::Cancelled(cancelled) => cancelled
            .iter()
            .map(|c| match &c.reason {
                Some(reason) => format!("{} ({reason})", session_line(&c.session)),
                None => session_line(&c.session),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Description(text) | Output::Rrule(text) => text.clone(),
    }
}

fn render_json(output: &Output) -> AppResult<String> {
    let value = match output {
        Output::Sessions(sessions) => serde_json::to_value(sessions)?,
        Output::Next(session) => serde_json::to_value(session)?,
        Output::Count(count) => json!({ "count": count }),
        Output::Cancelled(cancelled) => serde_json::to_value(cancelled)?,
        Output::Description(text) => json!({ "description": text }),
        Output::Rrule(text) => json!({ "rrule": text }),
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
