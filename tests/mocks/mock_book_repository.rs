use contact_assistant::error::{StorageError, StorageResult};
use contact_assistant::models::AddressBook;
use contact_assistant::repositories::BookRepository;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

/// Mock book repository for testing.
///
/// Provides an in-memory implementation of BookRepository that can be
/// seeded with a book, inspected after saves, and tracks method calls
/// for verification. It can also be switched to report corrupt state on
/// load.
#[allow(dead_code)]
pub struct MockBookRepository {
    book: Mutex<AddressBook>,
    corrupt: bool,
    call_counts: Mutex<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a repository holding an empty book.
    pub fn new() -> Self {
        Self::with_book(AddressBook::new())
    }

    /// Create a repository seeded with the given book.
    pub fn with_book(book: AddressBook) -> Self {
        Self {
            book: Mutex::new(book),
            corrupt: false,
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// Create a repository whose load always reports corrupt state.
    pub fn corrupt() -> Self {
        Self {
            book: Mutex::new(AddressBook::new()),
            corrupt: true,
            call_counts: Mutex::new(HashMap::new()),
        }
    }

    /// The book as of the last save (or the seeded book).
    pub fn stored_book(&self) -> AddressBook {
        self.book.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if self.corrupt {
            let source = serde_json::from_str::<AddressBook>("not json").unwrap_err();
            return Err(StorageError::Corrupt {
                path: PathBuf::from("<mock>"),
                source,
            });
        }

        Ok(self.book.lock().unwrap().clone())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        *self.book.lock().unwrap() = book.clone();
        Ok(())
    }
}
