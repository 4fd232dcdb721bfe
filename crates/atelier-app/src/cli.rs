use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Expands recurring-workshop schedules.
///
/// Reads a workshop recurrence rule as JSON (camelCase fields, as stored on
/// workshop records) and prints its sessions or a description.
#[derive(Parser, Debug)]
#[command(name = "atelier", about = "Recurring-workshop schedule tool")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Rule file, or `-` to read from stdin
    #[arg(long, global = true, default_value = "-")]
    pub rule: PathBuf,

    /// Reference time (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS]` or RFC 3339), defaults to
    /// the wall clock in the configured time zone
    #[arg(long, global = true, env = "ATELIER_NOW")]
    pub now: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to config file
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List generated sessions
    Sessions {
        /// Maximum number of sessions
        #[arg(long, default_value = "100")]
        limit: usize,
    },
    /// Show the next session after the reference time
    Next,
    /// Count the sessions of the season
    Count,
    /// Describe the schedule
    Describe,
    /// List sessions cancelled by exception periods
    Cancelled {
        #[arg(long, default_value = "100")]
        limit: usize,
    },
    /// List the sessions following the reference time
    Upcoming {
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// List sessions between two dates (inclusive)
    Between {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print the schedule as iCalendar recurrence lines
    Export,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
