use std::str::FromStr;

use atelier_core::error::CoreError;

use crate::error::ScheduleError;
use crate::rule::{TimeOfDay, Weekday};

/// Display language for schedule descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    /// Capitalized weekday name, as used in day lists.
    #[must_use]
    pub const fn weekday_name(self, day: Weekday) -> &'static str {
        match self {
            Self::French => match day {
                Weekday::Sunday => "Dimanche",
                Weekday::Monday => "Lundi",
                Weekday::Tuesday => "Mardi",
                Weekday::Wednesday => "Mercredi",
                Weekday::Thursday => "Jeudi",
                Weekday::Friday => "Vendredi",
                Weekday::Saturday => "Samedi",
            },
            Self::English => match day {
                Weekday::Sunday => "Sunday",
                Weekday::Monday => "Monday",
                Weekday::Tuesday => "Tuesday",
                Weekday::Wednesday => "Wednesday",
                Weekday::Thursday => "Thursday",
                Weekday::Friday => "Friday",
                Weekday::Saturday => "Saturday",
            },
        }
    }

    /// Phrase for a single recurring weekday ("Tous les lundis").
    #[must_use]
    pub fn every_weekday(self, day: Weekday) -> String {
        match self {
            Self::French => format!("Tous les {}s", self.weekday_name(day).to_lowercase()),
            Self::English => format!("Every {}", self.weekday_name(day)),
        }
    }

    /// Word joining the last two days of a list.
    #[must_use]
    pub const fn conjunction(self) -> &'static str {
        match self {
            Self::French => "et",
            Self::English => "and",
        }
    }

    /// Renders a time of day.
    ///
    /// French uses `14h` / `14h30`; English uses a 12-hour clock, `2pm` /
    /// `2:30pm`.
    #[must_use]
    pub fn format_time(self, time: TimeOfDay) -> String {
        match self {
            Self::French if time.minute() == 0 => format!("{:02}h", time.hour()),
            Self::French => format!("{:02}h{:02}", time.hour(), time.minute()),
            Self::English => {
                let suffix = if time.hour() < 12 { "am" } else { "pm" };
                let hour = match time.hour() % 12 {
                    0 => 12,
                    h => h,
                };
                if time.minute() == 0 {
                    format!("{hour}{suffix}")
                } else {
                    format!("{hour}:{:02}{suffix}", time.minute())
                }
            }
        }
    }

    /// Describes an interval of more than one week.
    #[must_use]
    pub fn interval_phrase(self, interval: u32) -> String {
        match self {
            Self::French => match interval {
                2 => "toutes les deux semaines".to_string(),
                3 => "toutes les trois semaines".to_string(),
                4 => "toutes les quatre semaines".to_string(),
                n => format!("toutes les {n} semaines"),
            },
            Self::English => format!("every {interval} weeks"),
        }
    }
}

impl FromStr for Locale {
    type Err = ScheduleError;

    /// Accepts a bare language code or a tag such as `fr-FR` / `en_GB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "fr" => Ok(Self::French),
            "en" => Ok(Self::English),
            _ => Err(CoreError::InvalidInput(format!("unsupported locale: {s:?}")).into()),
        }
    }
}
