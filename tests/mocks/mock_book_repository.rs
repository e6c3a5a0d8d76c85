use contact_book::error::StorageResult;
use contact_book::models::AddressBook;
use contact_book::repositories::AddressBookRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock address book repository for testing.
///
/// Keeps the snapshot in memory as serialized JSON, so saving and loading go
/// through the same encoding as the file repository, and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockBookRepository {
    snapshot: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockBookRepository {
    /// Create a new empty MockBookRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a raw snapshot.
    pub fn with_snapshot(json: &str) -> Self {
        let repo = Self::new();
        *repo.snapshot.lock().unwrap() = Some(json.to_string());
        repo
    }

    /// The raw stored snapshot, if anything was saved.
    pub fn snapshot(&self) -> Option<String> {
        self.snapshot.lock().unwrap().clone()
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

impl AddressBookRepository for MockBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        let snapshot = self.snapshot.lock().unwrap().clone();
        match snapshot {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        let json = serde_json::to_string(book)?;
        *self.snapshot.lock().unwrap() = Some(json);
        Ok(())
    }
}
