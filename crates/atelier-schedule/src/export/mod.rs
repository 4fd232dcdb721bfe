//! iCalendar export of recurrence rules.

mod ical;

pub use ical::{to_rrule_set, to_rrule_text};
