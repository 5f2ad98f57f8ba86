//! File-backed blob store.

use slate_error::{SlateResult, StorageError};
use slate_interface::BlobStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed [`BlobStore`]: one `<key>.json` file per key under a root
/// directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> SlateResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            StorageError::new(format!("Failed to create {}: {}", root.display(), e))
        })?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Open a store in the platform data directory, under `slate/`.
    pub fn open_default() -> SlateResult<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| StorageError::new("No platform data directory available"))?;
        Self::open(base.join("slate"))
    }

    /// The directory blobs are stored in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> SlateResult<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::new(format!("Invalid store key: {:?}", key)).into());
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> SlateResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(StorageError::new(format!("Failed to read {}: {}", path.display(), e)).into())
            }
        }
    }

    fn put(&self, key: &str, value: &str) -> SlateResult<()> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value).map_err(|e| {
            StorageError::new(format!("Failed to write {}: {}", path.display(), e)).into()
        })
    }

    fn remove(&self, key: &str) -> SlateResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(StorageError::new(format!("Failed to remove {}: {}", path.display(), e)).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("session")).unwrap();

        assert_eq!(store.get("shot_list").unwrap(), None);
        store.put("shot_list", r#"[{"scene":"1"}]"#).unwrap();
        assert_eq!(
            store.get("shot_list").unwrap().as_deref(),
            Some(r#"[{"scene":"1"}]"#)
        );

        store.remove("shot_list").unwrap();
        assert_eq!(store.get("shot_list").unwrap(), None);
    }

    #[test]
    fn last_write_wins_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.put("script", "first draft").unwrap();
        store.put("script", "second draft").unwrap();
        assert_eq!(store.get("script").unwrap().as_deref(), Some("second draft"));
    }

    #[test]
    fn path_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get("../escape").is_err());
        assert!(store.put("a/b", "x").is_err());
        assert!(store.put("", "x").is_err());
    }
}
