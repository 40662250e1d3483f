//! Data models for the address book.
//!
//! This module contains the data structures representing contact records
//! and the address book that owns them.

pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
