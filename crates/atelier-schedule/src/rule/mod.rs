//! Recurrence rule model.
//!
//! These types mirror the fields a workshop record carries: weekdays as
//! Sunday-based indices, times as `HH:MM` strings and date bounds that may
//! have been authored with a time-of-day.

mod bound;
mod exception;
mod recurrence;
mod time;
mod weekday;

pub use exception::ExceptionPeriod;
pub use recurrence::RecurrenceRule;
pub use time::TimeOfDay;
pub use weekday::Weekday;
