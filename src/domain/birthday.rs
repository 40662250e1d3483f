//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Literal date format accepted and rendered for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the literal format `DD.MM.YYYY` and validated at
/// construction time: the year must not be later than the current year.
/// Only the year is compared, so a date later in the current year is
/// still accepted.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("24.03.1985").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1985");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a raw `DD.MM.YYYY` string, validating against the system
    /// clock's current year.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::BadFormat` when the input is not a real
    /// calendar date in that pattern, or `ValidationError::FutureYear`
    /// when the year is later than the current year.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_relative_to(raw, Local::now().date_naive())
    }

    /// Parse against an explicit reference date instead of the system
    /// clock. Only the year of `today` participates in validation.
    pub fn parse_relative_to(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::BadFormat(raw.to_string()))?;

        if date.year() > today.year() {
            return Err(ValidationError::FutureYear(date.year()));
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
