//! Contact Assistant - an interactive command-line assistant bot for a personal address book.
//!
//! This library stores names, phone numbers, and birthdays in an in-memory
//! address book, persists it to disk between runs, and exposes a small set
//! of commands (add, change, show, list, birthday tracking) through an
//! interactive text loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for phone numbers and birthdays
//! - **models**: Contact records and the address book that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Whole-book persistence behind a repository trait
//! - **commands**: Session command parsing and handlers
//! - **repl**: The interactive session loop

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod repositories;

pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{BookRepository, JsonFileRepository};
