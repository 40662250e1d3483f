//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone input contains a character that is not a decimal digit.
    NotDigits(String),

    /// The phone input is numeric but not exactly ten digits long.
    WrongLength(String),

    /// The birthday input does not parse as a `DD.MM.YYYY` calendar date.
    BadFormat(String),

    /// The birthday year is later than the current year.
    FutureYear(i32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDigits(raw) => {
                write!(f, "Phone number must contain only digits: {}", raw)
            }
            Self::WrongLength(raw) => {
                write!(f, "Phone number must be exactly 10 digits: {}", raw)
            }
            Self::BadFormat(raw) => {
                write!(f, "Invalid date format, use DD.MM.YYYY: {}", raw)
            }
            Self::FutureYear(year) => {
                write!(f, "Birthday cannot be set in a future year: {}", year)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
