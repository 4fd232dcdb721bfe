use super::Locale;
use crate::rule::{TimeOfDay, Weekday};

/// ## Summary
/// Renders a weekly schedule, e.g. `Lundi et Mercredi 16h-18h` or
/// `Tous les lundis 09h-09h30 (toutes les deux semaines)`.
///
/// Weekdays are sorted from Sunday and deduplicated. An empty weekday list
/// renders the time range alone; `end_time` may be omitted.
#[must_use]
pub fn format_schedule(
    weekdays: &[Weekday],
    start_time: TimeOfDay,
    end_time: Option<TimeOfDay>,
    interval: u32,
    locale: Locale,
) -> String {
    let mut days = weekdays.to_vec();
    days.sort_unstable();
    days.dedup();

    let times = match end_time {
        Some(end) => format!(
            "{}-{}",
            locale.format_time(start_time),
            locale.format_time(end)
        ),
        None => locale.format_time(start_time),
    };

    let mut out = match days_phrase(&days, locale) {
        Some(phrase) => format!("{phrase} {times}"),
        None => times,
    };
    if interval > 1 {
        out.push_str(&format!(" ({})", locale.interval_phrase(interval)));
    }
    out
}

fn days_phrase(days: &[Weekday], locale: Locale) -> Option<String> {
    match days {
        [] => None,
        [day] => Some(locale.every_weekday(*day)),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|day| locale.weekday_name(*day))
                .collect::<Vec<_>>()
                .join(", ");
            Some(format!(
                "{head} {} {}",
                locale.conjunction(),
                locale.weekday_name(*last)
            ))
        }
    }
}
