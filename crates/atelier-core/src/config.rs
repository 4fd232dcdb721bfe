use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_COUNT_CAP, DEFAULT_LOCALE, DEFAULT_NEXT_SESSION_CAP, DEFAULT_TIMEZONE, ENV_PREFIX,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA time zone used to read the wall clock.
    pub timezone: String,
    /// Display language for schedule descriptions (`fr` or `en`).
    pub locale: String,
    pub next_session_cap: usize,
    pub count_cap: usize,
}

impl ScheduleConfig {
    /// ## Summary
    /// Resolves the configured time zone name.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the name is not a known IANA time zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| CoreError::ConfigError(format!("schedule.timezone: {e}")))
    }

    /// ## Summary
    /// Checks that the session caps are usable.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if a cap is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.next_session_cap == 0 {
            return Err(CoreError::ValidationError(
                "schedule.next_session_cap must be at least 1".to_string(),
            ));
        }
        if self.count_cap == 0 {
            return Err(CoreError::ValidationError(
                "schedule.count_cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            next_session_cap: DEFAULT_NEXT_SESSION_CAP,
            count_cap: DEFAULT_COUNT_CAP,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from the optional TOML file at `path` and
    /// `ATELIER_*` environment variables into a `Settings`.
    /// Environment variables take precedence over file values. Nested keys use
    /// `__`, e.g. `ATELIER_SCHEDULE__COUNT_CAP`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(path: &str) -> Result<Self> {
        let settings = Config::builder()
            .set_default("schedule.timezone", DEFAULT_TIMEZONE)?
            .set_default("schedule.locale", DEFAULT_LOCALE)?
            .set_default(
                "schedule.next_session_cap",
                i64::try_from(DEFAULT_NEXT_SESSION_CAP)?,
            )?
            .set_default("schedule.count_cap", i64::try_from(DEFAULT_COUNT_CAP)?)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name(path).required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.schedule.validate()?;
        tracing::debug!(
            timezone = %settings.schedule.timezone,
            locale = %settings.schedule.locale,
            "Schedule configuration loaded"
        );

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from `path`, environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: &str) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load_from(path)
}
