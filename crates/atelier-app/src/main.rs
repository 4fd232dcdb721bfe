use anyhow::Context;
use atelier_app::cli::CliArgs;
use atelier_app::command::{RunContext, run};
use atelier_app::input::{load_rule, parse_now};
use atelier_core::config::load_config;
use atelier_schedule::{Clock, RecurrenceEngine, SystemClock};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let args = CliArgs::parse();

    let config = load_config(&args.config).context("failed to load configuration")?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    let engine = RecurrenceEngine::from_config(&config.schedule)?;
    let clock = SystemClock::from_config(&config.schedule)?;
    let now = match args.now.as_deref() {
        Some(raw) => parse_now(raw)?,
        None => clock.now(),
    };

    let rule = load_rule(&args.rule)
        .with_context(|| format!("failed to load rule from {}", args.rule.display()))?;

    let ctx = RunContext {
        engine: &engine,
        now,
        tz: clock.tz(),
        format: args.format,
    };
    let output = run(&args.command, &rule, &ctx)?;

    println!("{output}");

    Ok(())
}
