//! Command handlers.
//!
//! Each handler mutates the address book as needed and returns the reply
//! string to print. Expected failures come back as [`CommandError`] and
//! are rendered at the session boundary; a failed handler never leaves
//! the book half-changed.

use crate::commands::Command;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;

/// Dispatch a parsed command against the book.
///
/// `today` is the reference date for birthday validation and the
/// upcoming-birthday window; the session loop passes the current local
/// date, tests pass a fixed one. The session loop intercepts
/// `Command::Exit` to save the book; dispatching it only yields the
/// farewell reply.
pub fn dispatch(
    command: Command,
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: i64,
) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(book, &name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_contact(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => show_phone(book, &name),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date, today),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(birthdays(book, today, window_days)),
        Command::Exit => Ok("Good bye!".to_string()),
    }
}

/// `add`: create-or-extend. An unknown name gets a fresh record holding
/// the phone; a known name gets the phone appended. The record is only
/// inserted once its first phone validates, so a bad phone creates
/// nothing.
fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> CommandResult<String> {
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(format!("Phone {} was added to contact {}.", phone, name));
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record)?;
    Ok(format!(
        "Record {} was added to address book. Phone {} was added to contact {}.",
        name, phone, name
    ))
}

/// `change`: replace a phone on an existing record.
fn change_contact(
    book: &mut AddressBook,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    record.edit_phone(old_phone, new_phone)?;
    Ok(format!("Phone {} was changed to {}", old_phone, new_phone))
}

/// `phone`: render one record.
fn show_phone(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(record.to_string())
}

/// `all`: every stored record, insertion order.
fn show_all(book: &AddressBook) -> String {
    let mut reply = String::from("List of stored contacts:");
    for record in book.iter() {
        reply.push('\n');
        reply.push_str(&record.to_string());
    }
    reply
}

/// `add-birthday`: set the birthday on an existing record.
fn add_birthday(
    book: &mut AddressBook,
    name: &str,
    date: &str,
    today: NaiveDate,
) -> CommandResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let birthday = record.set_birthday_relative_to(date, today)?;
    Ok(format!("Birthday {} was set for {}", birthday, name))
}

/// `show-birthday`: the stored birthday, or a "not set" reply.
fn show_birthday(book: &AddressBook, name: &str) -> CommandResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{} birthday is {}", name, birthday),
        None => format!("Birthday for {} is not set", name),
    })
}

/// `birthdays`: the upcoming-birthday report. Each line prints the
/// original stored birthday, not the weekend-shifted observation date.
fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return format!("No upcoming birthdays in the next {} days", window_days);
    }

    let mut reply = String::from("Upcoming birthdays:");
    for entry in upcoming {
        reply.push('\n');
        reply.push_str(&format!(" {} : {}", entry.name, entry.birthday));
    }
    reply
}
