use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the persisted address book.
///
/// Provides abstraction over whole-book storage, enabling different
/// implementations (JSON file, in-memory mock). The book is loaded once
/// at session start and saved once at session end; there is no partial
/// or incremental persistence.
pub trait BookRepository {
    /// Load the persisted book. A repository with no saved state yet
    /// yields an empty book, not an error.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing any prior saved state.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
