//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A record with this name is already stored
    #[error("Record with name {0} already exists in the address book")]
    DuplicateContact(String),

    /// This exact phone number is already on the record
    #[error("Phone {0} already exists in the record")]
    DuplicatePhone(String),

    /// No record stored under this name
    #[error("Record {0} was not found in the address book")]
    ContactNotFound(String),

    /// The record holds no such phone number
    #[error("Phone {0} was not found in the list of phones")]
    PhoneNotFound(String),

    /// Malformed phone or birthday input
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while parsing and handling a command line.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command is missing required arguments
    #[error("Missing arguments: {0}. Please specify them in the command")]
    MissingArguments(&'static str),

    /// The command word is not part of the session protocol
    #[error("Invalid command.")]
    Unknown,

    /// A book or record operation was rejected
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur while loading or saving the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The persisted file exists but could not be read
    #[error("Failed to read address book from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The book could not be written out
    #[error("Failed to write address book to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The persisted file has content that does not parse as a book
    #[error("Address book file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
