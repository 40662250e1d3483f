//! AddressBook model: the uniquely-keyed collection of contact records.

use crate::domain::Birthday;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// Default size of the upcoming-birthday window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// The address book: at most one record per contact name, iterated in
/// insertion order.
///
/// The collection is held privately; callers go through the operations
/// below, which keep the unique-name invariant. Records are owned
/// exclusively by the book. Insertion order is user-visible (the `all`
/// listing), so the book stores records in a Vec and resolves names by
/// exact linear lookup.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

/// One entry of the upcoming-birthday report.
///
/// `observed_on` is the congratulation date with the weekend shift
/// applied (Saturday/Sunday roll forward to the following Monday). The
/// rendered report prints the original stored `birthday`, not the
/// shifted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The stored birthday, as entered
    pub birthday: Birthday,

    /// The weekday the congratulation lands on
    pub observed_on: NaiveDate,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` when a record with the same
    /// name (case-sensitive, exact) is already stored; the book is
    /// unchanged.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        if self.find(record.name()).is_some() {
            return Err(BookError::DuplicateContact(record.name().to_string()));
        }

        self.records.push(record);
        Ok(())
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Look up a record by exact name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove the record stored under a name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` when no record has that name;
    /// the book is unchanged.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self
            .records
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        self.records.remove(index);
        Ok(())
    }

    /// Iterate over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect the records whose birthdays fall within `window_days` of
    /// `today`.
    ///
    /// For each record with a birthday, the occurrence in `today`'s year
    /// is computed; if it has already passed this year it rolls once to
    /// next year, never further. A record is included when the occurrence
    /// is between zero and `window_days` days away, inclusive. A weekend
    /// occurrence is observed on the following Monday (`observed_on`).
    ///
    /// Entries follow book iteration order, not chronological order. An
    /// empty result means no birthdays in the window. A February 29
    /// birthday whose occurrence does not exist in the target year is
    /// skipped for that year.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in &self.records {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let Some(mut occurrence) = birthday.date().with_year(today.year()) else {
                continue;
            };
            if occurrence < today {
                match birthday.date().with_year(today.year() + 1) {
                    Some(next) => occurrence = next,
                    None => continue,
                }
            }

            let delta = (occurrence - today).num_days();
            if (0..=window_days).contains(&delta) {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday,
                    observed_on: observed_date(occurrence),
                });
            }
        }

        upcoming
    }
}

/// Shift a weekend occurrence to the following Monday; weekdays pass
/// through untouched.
fn observed_date(occurrence: NaiveDate) -> NaiveDate {
    let weekday = i64::from(occurrence.weekday().num_days_from_monday());
    if weekday >= 5 {
        occurrence + Duration::days(7 - weekday)
    } else {
        occurrence
    }
}

// Serialized as a bare array of records; deserialization re-checks the
// unique-name invariant so a tampered file cannot smuggle duplicates in.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;

        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record).map_err(serde::de::Error::custom)?;
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone).unwrap();
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1112223333")).unwrap();

        assert!(book.find("John").is_some());
        assert!(book.find("john").is_none()); // case-sensitive
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_rejects_duplicate_name() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1112223333")).unwrap();

        let result = book.add_record(record("John", "4445556666"));
        assert!(matches!(result, Err(BookError::DuplicateContact(_))));
        assert_eq!(book.len(), 1);
        // The original record is the one still stored
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "1112223333");
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1112223333")).unwrap();

        book.delete("John").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_book_unchanged() {
        let mut book = AddressBook::new();
        book.add_record(record("John", "1112223333")).unwrap();

        let result = book.delete("Jane");
        assert!(matches!(result, Err(BookError::ContactNotFound(_))));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let mut book = AddressBook::new();
        book.add_record(record("Zoe", "1112223333")).unwrap();
        book.add_record(record("Adam", "2223334444")).unwrap();
        book.add_record(record("Mary", "3334445555")).unwrap();

        let names: Vec<&str> = book.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Zoe", "Adam", "Mary"]);
    }

    #[test]
    fn test_deserialization_rejects_duplicate_names() {
        let json = r#"[{"name":"John"},{"name":"John"}]"#;
        let result: Result<AddressBook, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_observed_date_weekend_shift() {
        // 2024-06-15 is a Saturday, 2024-06-16 a Sunday
        let saturday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();

        assert_eq!(observed_date(saturday), monday);
        assert_eq!(observed_date(sunday), monday);
        assert_eq!(observed_date(monday), monday);
    }
}
