//! JSON-file implementation of the book repository.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persists the whole address book as a pretty-printed JSON array at a
/// fixed path.
///
/// The exact byte layout is an implementation detail, not a
/// compatibility contract; it only has to round-trip names, phone lists,
/// and birthdays losslessly within this implementation.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file the book is persisted to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            // First run: no saved state yet
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let book: AddressBook =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "loaded {} record(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, json).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;

        info!("saved {} record(s) to {}", book.len(), self.path.display());
        Ok(())
    }
}
