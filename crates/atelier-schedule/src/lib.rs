//! Recurring-workshop scheduling engine.
//!
//! Expands a weekly [`RecurrenceRule`] (weekday set, interval, season window,
//! exception periods) into concrete [`Session`]s and renders schedule
//! descriptions. Every operation is a pure function of its inputs: the
//! current time is always passed in, usually obtained from a [`Clock`].

pub mod clock;
pub mod error;
pub mod expand;
pub mod export;
pub mod format;
pub mod rule;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ScheduleError, ScheduleResult};
pub use expand::{CancelledSession, ExpansionOptions, RecurrenceEngine, Session, generate_sessions};
pub use format::{Locale, format_schedule};
pub use rule::{ExceptionPeriod, RecurrenceRule, TimeOfDay, Weekday};
