//! Expansion of recurrence rules into concrete sessions.

mod engine;
mod occurrences;
mod options;
mod session;

pub use engine::{RecurrenceEngine, generate_sessions};
pub use options::ExpansionOptions;
pub use session::{CancelledSession, Session};
