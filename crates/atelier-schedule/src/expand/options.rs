use atelier_core::config::ScheduleConfig;
use atelier_core::constants::{DEFAULT_COUNT_CAP, DEFAULT_NEXT_SESSION_CAP};

/// Session caps for the derived queries.
///
/// `next_session` and `count_sessions` expand a bounded number of sessions
/// rather than the whole season. A season holding more sessions than the cap
/// is reported as holding exactly the cap, and a next session lying beyond
/// the cap is not found. Window-based queries (`sessions_between`,
/// `upcoming_sessions`) are bounded by days instead and ignore these caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Sessions generated when looking up the next session.
    pub next_session_cap: usize,

    /// Sessions generated when counting.
    pub count_cap: usize,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            next_session_cap: DEFAULT_NEXT_SESSION_CAP,
            count_cap: DEFAULT_COUNT_CAP,
        }
    }
}

impl ExpansionOptions {
    #[must_use]
    pub fn with_next_session_cap(mut self, cap: usize) -> Self {
        self.next_session_cap = cap;
        self
    }

    #[must_use]
    pub fn with_count_cap(mut self, cap: usize) -> Self {
        self.count_cap = cap;
        self
    }
}

impl From<&ScheduleConfig> for ExpansionOptions {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            next_session_cap: config.next_session_cap,
            count_cap: config.count_cap,
        }
    }
}
