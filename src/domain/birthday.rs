//! BirthdayField value object and next-birthday arithmetic.

use super::errors::{ValidationError, ValidationResult};
use super::field::{FieldRule, ValidatedField};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire and input format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthday pattern is a valid regex")
});

/// Validation rule for birthdays.
///
/// Any concrete calendar date is accepted; the format rules apply when
/// parsing from text (see [`BirthdayField::parse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = NaiveDate;

    fn check(_value: &NaiveDate) -> ValidationResult<()> {
        Ok(())
    }
}

/// A contact's date of birth.
///
/// A contact without a birthday has no `BirthdayField` at all; the field
/// itself always holds a real date.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::BirthdayField;
///
/// let birthday = BirthdayField::parse("1991-05-11").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// assert_eq!(birthday.days_until_next_occurrence(today), 10);
/// ```
pub type BirthdayField = ValidatedField<BirthdayRule>;

impl BirthdayField {
    /// Parse a birthday from strict `YYYY-MM-DD` text.
    ///
    /// Partial dates, single-digit months or days, extra whitespace and
    /// out-of-range components are all rejected.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` if the text is not a
    /// valid date in that format.
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthdayFormat(raw.to_string()));
        }

        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthdayFormat(raw.to_string()))?;

        Self::new(date)
    }

    /// Get the birthday as a date.
    pub fn date(&self) -> NaiveDate {
        *self.get()
    }

    /// The nearest date on or after `today` on which this birthday falls.
    ///
    /// A birthday that falls on `today` is not advanced. A February 29
    /// birthday is observed on February 28 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        match self.occurrence_in(today.year()) {
            Some(candidate) if candidate >= today => candidate,
            _ => self
                .occurrence_in(today.year() + 1)
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Whole days from `today` until the next occurrence, 0 when it is today.
    pub fn days_until_next_occurrence(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// The occurrence of this birthday within `year`.
    ///
    /// `None` only when `year` is outside the range chrono can represent.
    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let birth = self.date();
        NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).or_else(|| {
            if birth.month() == 2 && birth.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl FromStr for BirthdayField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for BirthdayField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from YYYY-MM-DD with validation
impl<'de> Deserialize<'de> for BirthdayField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayField::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        let birthday = BirthdayField::parse("1991-05-11").unwrap();
        assert_eq!(birthday.date(), date(1991, 5, 11));
    }

    #[test]
    fn test_parse_rejects_invalid_dates() {
        for raw in [
            "1991-13-40",
            "1991-02-30",
            "1991-5-11",
            "91-05-11",
            "1991-05",
            "1991/05/11",
            " 1991-05-11",
            "1991-05-11T00:00",
            "+1991-05-11",
            "",
        ] {
            assert_eq!(
                BirthdayField::parse(raw),
                Err(ValidationError::InvalidBirthdayFormat(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(BirthdayField::parse("2000-02-29").is_ok());
        assert!(BirthdayField::parse("1900-02-29").is_err());
    }

    #[test]
    fn test_days_until_scenario() {
        let birthday = BirthdayField::new(date(1991, 5, 11)).unwrap();
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 5, 1)), 10);
    }

    #[test]
    fn test_birthday_today_is_zero() {
        let birthday = BirthdayField::new(date(1991, 5, 11)).unwrap();
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 5, 11)), 0);
    }

    #[test]
    fn test_birthday_yesterday_rolls_over() {
        let birthday = BirthdayField::new(date(1991, 5, 11)).unwrap();
        // 2024-05-12 -> 2025-05-11 crosses no leap day
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 5, 12)), 364);
        // 2023-05-12 -> 2024-05-11 crosses 2024-02-29
        assert_eq!(birthday.days_until_next_occurrence(date(2023, 5, 12)), 365);
    }

    #[test]
    fn test_year_end_rollover() {
        let birthday = BirthdayField::new(date(1985, 1, 1)).unwrap();
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 12, 31)), 1);
        assert_eq!(birthday.next_occurrence(date(2024, 12, 31)), date(2025, 1, 1));
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        let birthday = BirthdayField::new(date(2000, 2, 29)).unwrap();
        assert_eq!(birthday.next_occurrence(date(2023, 2, 1)), date(2023, 2, 28));
        assert_eq!(birthday.days_until_next_occurrence(date(2023, 2, 28)), 0);
        // Observed date already passed in 2023, so the next one is the real leap day
        assert_eq!(birthday.next_occurrence(date(2023, 3, 1)), date(2024, 2, 29));
    }

    #[test]
    fn test_leap_day_birthday_in_leap_year() {
        let birthday = BirthdayField::new(date(2000, 2, 29)).unwrap();
        assert_eq!(birthday.next_occurrence(date(2024, 2, 28)), date(2024, 2, 29));
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 2, 29)), 0);
        assert_eq!(birthday.next_occurrence(date(2024, 3, 1)), date(2025, 2, 28));
    }

    #[test]
    fn test_future_birth_date_is_accepted() {
        let birthday = BirthdayField::new(date(2030, 6, 1)).unwrap();
        assert_eq!(birthday.days_until_next_occurrence(date(2024, 5, 31)), 1);
    }

    #[test]
    fn test_display_and_serde() {
        let birthday = BirthdayField::parse("1982-04-20").unwrap();
        assert_eq!(birthday.to_string(), "1982-04-20");
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"1982-04-20\"");

        let parsed: BirthdayField = serde_json::from_str("\"1982-04-20\"").unwrap();
        assert_eq!(parsed, birthday);
        assert!(serde_json::from_str::<BirthdayField>("\"1982-4-20\"").is_err());
    }
}
