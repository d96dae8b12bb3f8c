//! Birthday value object and celebration scheduling.

use super::errors::ValidationError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// A calendar date on which a contact was born.
///
/// Birthdays are naive dates with no time-of-day or timezone. They are
/// parsed from `DD.MM.YYYY`; impossible dates such as `31.04.2020` are
/// rejected at construction.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::parse("15.03.1990").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
/// // 2025-03-15 is a Saturday, so the celebration moves to Monday.
/// assert_eq!(
///     birthday.next_celebration(today),
///     NaiveDate::from_ymd_opt(2025, 3, 17).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// match the format or names a date that does not exist.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Get the underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Whether the birthday is on February 29.
    pub fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }

    /// The date the birthday is observed in `year`, before any weekend shift.
    ///
    /// A February 29 birthday is observed on February 28 in common years.
    /// `None` only when `year` is outside chrono's supported range.
    fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        let day = if self.is_leap_day() && !is_leap_year(year) {
            28
        } else {
            self.0.day()
        };
        NaiveDate::from_ymd_opt(year, self.0.month(), day)
    }

    /// Compute the next date on which this birthday is celebrated.
    ///
    /// The date is this year's observed birthday, or next year's when this
    /// year's has already passed. A Saturday or Sunday celebration then moves
    /// forward to the following Monday. A Feb 28 substitute that falls on a
    /// weekend therefore lands in March.
    ///
    /// The result saturates at `NaiveDate::MAX` when the next observance
    /// would fall past the end of chrono's calendar.
    pub fn next_celebration(&self, today: NaiveDate) -> NaiveDate {
        let Some(mut candidate) = self.observed_in(today.year()) else {
            return NaiveDate::MAX;
        };
        if candidate < today {
            match today.year().checked_add(1).and_then(|y| self.observed_in(y)) {
                Some(next) => candidate = next,
                None => return NaiveDate::MAX,
            }
        }

        let shift = match candidate.weekday() {
            Weekday::Sat => 2,
            Weekday::Sun => 1,
            _ => 0,
        };
        candidate
            .checked_add_days(Days::new(shift))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_parse_valid() {
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.date(), date(1990, 3, 15));
        assert!(!birthday.is_leap_day());
        assert!(Birthday::parse("29.02.2024").unwrap().is_leap_day());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        for raw in [
            "",
            "1990-03-15",
            "15/03/1990",
            "31.04.2020",
            "29.02.2023",
            "32.01.2020",
            "15.13.2020",
            "15.03.1990 extra",
            "birthday",
        ] {
            assert_eq!(
                Birthday::parse(raw),
                Err(ValidationError::InvalidBirthday(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1999", "05.07.0999"] {
            let birthday = Birthday::parse(raw).unwrap();
            assert_eq!(birthday.to_string(), raw);
            assert_eq!(Birthday::parse(&birthday.to_string()).unwrap(), birthday);
        }
    }

    #[test]
    fn test_upcoming_this_year() {
        // 2026-06-16 is a Tuesday.
        let birthday = Birthday::parse("16.06.1985").unwrap();
        assert_eq!(birthday.next_celebration(date(2026, 6, 10)), date(2026, 6, 16));
    }

    #[test]
    fn test_today_is_the_birthday() {
        // 2026-06-10 is a Wednesday.
        let birthday = Birthday::parse("10.06.1985").unwrap();
        assert_eq!(birthday.next_celebration(date(2026, 6, 10)), date(2026, 6, 10));
    }

    #[test]
    fn test_passed_birthday_rolls_to_next_year() {
        // 2025-03-15 is a Saturday.
        let birthday = Birthday::parse("15.03.1990").unwrap();
        assert_eq!(birthday.next_celebration(date(2024, 3, 20)), date(2025, 3, 17));
    }

    #[test]
    fn test_weekend_shift() {
        // 2026-06-13 is a Saturday, 2026-06-14 a Sunday.
        let saturday = Birthday::parse("13.06.1990").unwrap();
        let sunday = Birthday::parse("14.06.1990").unwrap();
        let today = date(2026, 6, 8);
        assert_eq!(saturday.next_celebration(today), date(2026, 6, 15));
        assert_eq!(sunday.next_celebration(today), date(2026, 6, 15));
    }

    #[test]
    fn test_leap_day_in_common_year_observed_feb_28() {
        // 2025-02-28 is a Friday.
        let birthday = Birthday::parse("29.02.2024").unwrap();
        assert_eq!(birthday.next_celebration(date(2025, 1, 1)), date(2025, 2, 28));
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        // 2028-02-29 is a Tuesday.
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.next_celebration(date(2028, 1, 5)), date(2028, 2, 29));
    }

    #[test]
    fn test_leap_day_rolls_into_leap_year() {
        let birthday = Birthday::parse("29.02.1996").unwrap();
        assert_eq!(birthday.next_celebration(date(2027, 3, 10)), date(2028, 2, 29));
    }

    #[test]
    fn test_leap_day_substitute_on_weekend_moves_to_march() {
        // 2026-02-28 is a Saturday.
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.next_celebration(date(2026, 1, 10)), date(2026, 3, 2));
        // Rolled over from 2025 into the same weekend substitute.
        assert_eq!(birthday.next_celebration(date(2025, 3, 1)), date(2026, 3, 2));
    }

    #[test]
    fn test_leap_day_on_feb_28_of_common_year_is_today() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.next_celebration(date(2025, 2, 28)), date(2025, 2, 28));
    }

    #[test]
    fn test_celebration_is_never_before_today_and_never_weekend() {
        let today = date(2026, 10, 19);
        let mut day = date(2000, 1, 1);
        while day.year() == 2000 {
            let celebration = Birthday::from(day).next_celebration(today);
            assert!(celebration >= today);
            assert!(!matches!(celebration.weekday(), Weekday::Sat | Weekday::Sun));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_celebration_at_end_of_calendar_does_not_panic() {
        let last = NaiveDate::MAX;
        let mid_final_year = date(last.year(), 6, 1);
        // Already passed in the final year: no next year to roll into.
        let january = Birthday::from(date(1990, 1, 1));
        assert_eq!(january.next_celebration(mid_final_year), last);
        assert_eq!(january.next_celebration(last), last);

        // The final day itself is the birthday.
        let same_day = Birthday::from(date(2000, last.month(), last.day()));
        assert_eq!(same_day.next_celebration(last), last);
    }

    #[test]
    fn test_serialization() {
        let birthday = Birthday::parse("29.02.2024").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"29.02.2024\"");
        let back: Birthday = serde_json::from_str("\"29.02.2024\"").unwrap();
        assert_eq!(back, birthday);
        assert!(serde_json::from_str::<Birthday>("\"31.04.2020\"").is_err());
    }
}
