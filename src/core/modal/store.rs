//! Session-scoped batch handoff between the host and the modal
//!
//! The host stashes a selection under a fresh [`BatchId`]; the modal takes it
//! exactly once. Taking removes the entry, so re-opening the same link cannot
//! replay a stale export.

use crate::domain::{Batch, BatchId, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Keyed single-read storage of encoded batches
pub trait BatchStore: Send + Sync {
    /// Store raw batch data under an id, replacing any previous entry
    fn put(&self, id: &BatchId, data: String);

    /// Remove and return the data stored under an id
    fn take(&self, id: &BatchId) -> Option<String>;

    /// Whether the id still resolves to data
    fn contains(&self, id: &BatchId) -> bool;
}

/// In-memory [`BatchStore`] scoped to one console session
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Mutex<HashMap<BatchId, String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a batch under a freshly generated id and return the id
    pub fn stash(&self, batch: &Batch) -> Result<BatchId> {
        let id = BatchId::generate();
        self.put(&id, batch.to_json()?);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock only means another holder panicked mid-insert; the map
// itself is still usable.
impl BatchStore for SessionStore {
    fn put(&self, id: &BatchId, data: String) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(id.clone(), data);
    }

    fn take(&self, id: &BatchId) -> Option<String> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.remove(id)
    }

    fn contains(&self, id: &BatchId) -> bool {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_entry() {
        let store = SessionStore::new();
        let id = BatchId::new("b1").unwrap();
        store.put(&id, "[]".to_string());

        assert!(store.contains(&id));
        assert_eq!(store.take(&id).as_deref(), Some("[]"));
        assert!(!store.contains(&id));
        assert_eq!(store.take(&id), None);
    }

    #[test]
    fn test_stash_generates_distinct_ids() {
        let store = SessionStore::new();
        let a = store.stash(&Batch::default()).unwrap();
        let b = store.stash(&Batch::default()).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }
}
