//! In-memory blob store.

use slate_error::{SlateResult, StorageError};
use slate_interface::BlobStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory [`BlobStore`] used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> SlateResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|_| StorageError::new("memory store lock poisoned"))?;
        Ok(blobs.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> SlateResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| StorageError::new("memory store lock poisoned"))?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SlateResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|_| StorageError::new("memory store lock poisoned"))?;
        blobs.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_remove_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("shot_list").unwrap(), None);

        store.put("shot_list", "[]").unwrap();
        assert_eq!(store.get("shot_list").unwrap().as_deref(), Some("[]"));

        store.remove("shot_list").unwrap();
        assert_eq!(store.get("shot_list").unwrap(), None);
    }

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.put("k", "first").unwrap();
        store.put("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn removing_an_absent_key_is_fine() {
        let store = MemoryStore::new();
        store.remove("never-written").unwrap();
    }
}
