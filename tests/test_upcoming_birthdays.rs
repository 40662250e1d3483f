//! Integration tests for the upcoming-birthday window query.

use contact_assistant::models::{AddressBook, Record};
use chrono::NaiveDate;

const WINDOW: i64 = 7;

fn today() -> NaiveDate {
    // A Monday
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record.add_phone("1112223333").unwrap();
    record.set_birthday_relative_to(birthday, today()).unwrap();
    record
}

#[test]
fn test_birthday_passed_this_year_rolls_to_next_and_is_excluded() {
    let mut book = AddressBook::new();
    // 2024-06-05 is before 2024-06-10, so the occurrence rolls to
    // 2025-06-05: 360 days away, far outside the window
    book.add_record(record_with_birthday("John", "05.06.1990")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    assert!(upcoming.is_empty());
}

#[test]
fn test_birthday_within_window_is_included() {
    let mut book = AddressBook::new();
    // 2024-06-12, two days ahead
    book.add_record(record_with_birthday("John", "12.06.1990")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "John");
    assert_eq!(upcoming[0].birthday.to_string(), "12.06.1990");
}

#[test]
fn test_window_boundaries_are_inclusive() {
    let mut book = AddressBook::new();
    // Today itself (delta 0) and the last day of the window (delta 7)
    book.add_record(record_with_birthday("Today", "10.06.1985")).unwrap();
    book.add_record(record_with_birthday("Edge", "17.06.1985")).unwrap();
    // One past the window (delta 8)
    book.add_record(record_with_birthday("Past", "18.06.1985")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    let names: Vec<&str> = upcoming
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["Today", "Edge"]);
}

#[test]
fn test_weekend_occurrence_observed_on_monday_but_reported_as_stored() {
    let mut book = AddressBook::new();
    // 2024-06-15 is a Saturday, five days into the window
    book.add_record(record_with_birthday("Sat", "15.06.1990")).unwrap();
    // 2024-06-16 is a Sunday
    book.add_record(record_with_birthday("Sun", "16.06.1990")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    assert_eq!(upcoming.len(), 2);

    let monday = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
    assert_eq!(upcoming[0].observed_on, monday);
    assert_eq!(upcoming[1].observed_on, monday);

    // The stored birthday stays the reported date, shift notwithstanding
    assert_eq!(upcoming[0].birthday.to_string(), "15.06.1990");
    assert_eq!(upcoming[1].birthday.to_string(), "16.06.1990");
}

#[test]
fn test_weekday_occurrence_is_not_shifted() {
    let mut book = AddressBook::new();
    // 2024-06-12 is a Wednesday
    book.add_record(record_with_birthday("John", "12.06.1990")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    assert_eq!(
        upcoming[0].observed_on,
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    );
}

#[test]
fn test_year_end_rollover_window() {
    // Window reaching into the next year still catches early-January birthdays
    let december = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let mut book = AddressBook::new();
    let mut record = Record::new("NewYear");
    record.add_phone("1112223333").unwrap();
    record.set_birthday_relative_to("02.01.1990", december).unwrap();
    book.add_record(record).unwrap();

    let upcoming = book.upcoming_birthdays(december, WINDOW);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "NewYear");
}

#[test]
fn test_records_without_birthday_are_skipped() {
    let mut book = AddressBook::new();
    let mut record = Record::new("NoBirthday");
    record.add_phone("1112223333").unwrap();
    book.add_record(record).unwrap();

    assert!(book.upcoming_birthdays(today(), WINDOW).is_empty());
}

#[test]
fn test_result_follows_book_order_not_chronological() {
    let mut book = AddressBook::new();
    // Later date inserted first
    book.add_record(record_with_birthday("Later", "16.06.1990")).unwrap();
    book.add_record(record_with_birthday("Sooner", "11.06.1990")).unwrap();

    let upcoming = book.upcoming_birthdays(today(), WINDOW);
    let names: Vec<&str> = upcoming
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    assert_eq!(names, vec!["Later", "Sooner"]);
}

#[test]
fn test_leap_day_birthday_skipped_in_non_leap_year() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Leap", "29.02.1992")).unwrap();

    // 2025 is not a leap year; the occurrence does not exist
    let non_leap_day = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
    assert!(book.upcoming_birthdays(non_leap_day, WINDOW).is_empty());

    // In a leap year the occurrence is back
    let leap_day = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
    assert_eq!(book.upcoming_birthdays(leap_day, WINDOW).len(), 1);
}
