/// Session cap used when looking up the next session of a workshop.
pub const DEFAULT_NEXT_SESSION_CAP: usize = 50;

/// Session cap used when counting the sessions of a workshop.
pub const DEFAULT_COUNT_CAP: usize = 100;

/// Time zone used for "now" when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Display language used when none is configured.
pub const DEFAULT_LOCALE: &str = "fr";

/// Prefix of the environment variables read by [`crate::config::Settings::load_from`].
pub const ENV_PREFIX: &str = "ATELIER";
