//! The persistent store collaborator.

use slate_error::SlateResult;

/// A key-to-JSON-blob store with last-write-wins semantics.
///
/// The core treats persistence as opaque: keys are short stable names, values
/// are JSON strings, and the only guarantee is that the most recent write for
/// a key is what a later read observes. There are no transactions.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn get(&self, key: &str) -> SlateResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> SlateResult<()>;

    /// Remove the blob stored under `key`. Removing an absent key is not an
    /// error.
    fn remove(&self, key: &str) -> SlateResult<()>;
}

impl<S: BlobStore + ?Sized> BlobStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> SlateResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> SlateResult<()> {
        (**self).put(key, value)
    }

    fn remove(&self, key: &str) -> SlateResult<()> {
        (**self).remove(key)
    }
}
