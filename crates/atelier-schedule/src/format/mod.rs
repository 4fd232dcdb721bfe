//! Human-readable schedule descriptions.

mod locale;
mod schedule;

pub use locale::Locale;
pub use schedule::format_schedule;
