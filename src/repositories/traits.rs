use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for the address book snapshot.
///
/// The whole book is read and written in one piece; there is no partial or
/// incremental access. Implementations exist for a JSON file and, in tests,
/// for an in-memory store.
pub trait AddressBookRepository {
    /// Load the stored address book, or an empty one if nothing is stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
