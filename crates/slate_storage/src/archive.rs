//! Typed session archive over a blob store.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use slate_core::{BreakdownElementSet, ShotRecord};
use slate_error::{JsonError, SlateResult};
use slate_interface::BlobStore;
use tracing::debug;

/// Store key for the shot list.
pub const SHOTS_KEY: &str = "shot_list";
/// Store key for the raw script text.
pub const SCRIPT_KEY: &str = "shot_list_script";
/// Store key for the breakdown element set.
pub const BREAKDOWN_KEY: &str = "script_breakdown";

/// A stored blob with its write timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stored<T> {
    /// When the blob was written.
    pub saved_at: DateTime<Utc>,
    /// The stored value.
    pub data: T,
}

impl<T> Stored<T> {
    /// Wrap a value with the current timestamp.
    pub fn now(data: T) -> Self {
        Self {
            saved_at: Utc::now(),
            data,
        }
    }
}

/// Typed read/write access to session state.
///
/// Sessions read their state at start and write it back on every mutation;
/// the underlying store only guarantees last-write-wins.
#[derive(Debug, Clone)]
pub struct SessionArchive<S> {
    store: S,
}

impl<S: BlobStore> SessionArchive<S> {
    /// Create an archive over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn save<T: Serialize>(&self, key: &str, data: &T) -> SlateResult<()> {
        let stored = Stored::now(data);
        let blob = serde_json::to_string(&stored)
            .map_err(|e| JsonError::new(format!("Failed to serialize {}: {}", key, e)))?;
        self.store.put(key, &blob)?;
        debug!(key, bytes = blob.len(), "Session state saved");
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> SlateResult<Option<T>> {
        let Some(blob) = self.store.get(key)? else {
            return Ok(None);
        };
        let stored: Stored<T> = serde_json::from_str(&blob)
            .map_err(|e| JsonError::new(format!("Failed to parse stored {}: {}", key, e)))?;
        Ok(Some(stored.data))
    }

    /// Persist the shot list.
    pub fn save_shots(&self, shots: &[ShotRecord]) -> SlateResult<()> {
        self.save(SHOTS_KEY, &shots)
    }

    /// Load the shot list saved in a previous session, if any.
    pub fn load_shots(&self) -> SlateResult<Option<Vec<ShotRecord>>> {
        self.load(SHOTS_KEY)
    }

    /// Persist the raw script text.
    pub fn save_script(&self, script: &str) -> SlateResult<()> {
        self.save(SCRIPT_KEY, &script)
    }

    /// Load the script text saved in a previous session, if any.
    pub fn load_script(&self) -> SlateResult<Option<String>> {
        self.load(SCRIPT_KEY)
    }

    /// Persist the breakdown element set.
    pub fn save_breakdown(&self, elements: &BreakdownElementSet) -> SlateResult<()> {
        self.save(BREAKDOWN_KEY, elements)
    }

    /// Load the breakdown element set saved in a previous session, if any.
    pub fn load_breakdown(&self) -> SlateResult<Option<BreakdownElementSet>> {
        self.load(BREAKDOWN_KEY)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use slate_core::ElementCategory;

    #[test]
    fn shots_round_trip_with_a_timestamp() {
        let archive = SessionArchive::new(MemoryStore::new());
        let shot = ShotRecord::builder()
            .description("Opening wide")
            .build()
            .unwrap();
        archive.save_shots(std::slice::from_ref(&shot)).unwrap();

        let blob = archive.store().get(SHOTS_KEY).unwrap().unwrap();
        assert!(blob.contains("savedAt"));

        let loaded = archive.load_shots().unwrap().unwrap();
        assert_eq!(loaded, vec![shot]);
    }

    #[test]
    fn script_text_round_trips() {
        let archive = SessionArchive::new(MemoryStore::new());
        assert_eq!(archive.load_script().unwrap(), None);

        archive.save_script("INT. OFFICE - NIGHT").unwrap();
        assert_eq!(
            archive.load_script().unwrap().as_deref(),
            Some("INT. OFFICE - NIGHT")
        );
    }

    #[test]
    fn breakdown_round_trips() {
        let archive = SessionArchive::new(MemoryStore::new());
        let mut elements = BreakdownElementSet::new();
        elements.push(ElementCategory::Props, "lamp");
        archive.save_breakdown(&elements).unwrap();

        let loaded = archive.load_breakdown().unwrap().unwrap();
        assert_eq!(loaded, elements);
    }
}
