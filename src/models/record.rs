//! Record model representing one person in the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact's stored data: a name, an ordered list of phone numbers,
/// and an optional birthday.
///
/// The name is set at creation and never changes. Phones keep their
/// insertion order and may not contain duplicates. Every mutating
/// operation is all-or-nothing: on failure the record is left exactly as
/// it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, unique within the containing address book
    name: String,

    /// Phone numbers in insertion order, no exact-value duplicates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with a name and an empty phone list.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Get the contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the stored phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Parse and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` when `raw` is not a valid phone
    /// number, or `BookError::DuplicatePhone` when the exact value is
    /// already on the record. The phone list is unchanged on either.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::parse(raw)?;

        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone(phone.into_inner()));
        }

        self.phones.push(phone);
        Ok(())
    }

    /// Replace an existing phone number in place, preserving its position.
    ///
    /// The old number is located by exact string match before the new one
    /// is parsed, so an invalid replacement leaves the old number intact.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` when `old_raw` is not on the
    /// record, or `BookError::Validation` when `new_raw` does not parse.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_raw)
            .ok_or_else(|| BookError::PhoneNotFound(old_raw.to_string()))?;

        let new_phone = PhoneNumber::parse(new_raw)?;
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Look up a phone number by exact value. No partial matching.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Remove the first exact match of a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` when the value is absent; the
    /// phone list is unchanged.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))?;

        self.phones.remove(index);
        Ok(())
    }

    /// Parse and set the birthday, overwriting any prior value.
    ///
    /// Returns the date that was set.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` when `raw` is malformed or names a
    /// future year; the previous birthday (if any) is kept.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<Birthday> {
        let birthday = Birthday::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    /// Like [`Record::set_birthday`] but validated against an explicit
    /// reference date instead of the system clock.
    pub fn set_birthday_relative_to(&mut self, raw: &str, today: NaiveDate) -> BookResult<Birthday> {
        let birthday = Birthday::parse_relative_to(raw, today)?;
        self.birthday = Some(birthday);
        Ok(birthday)
    }

    /// Get the birthday, if one has been set. No mutation.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }
}

// Display support - renders the name and the semicolon-joined phone list
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
