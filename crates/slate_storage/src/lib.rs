//! Session persistence for the Slate screenwriting toolkit.
//!
//! Two [`BlobStore`](slate_interface::BlobStore) implementations — a
//! file-backed store and an in-memory double for tests — plus
//! [`SessionArchive`], the typed wrapper that reads session state at start
//! and writes it back on every mutation. Last write wins; there are no
//! transactions.

mod archive;
mod file_store;
mod memory_store;

pub use archive::{BREAKDOWN_KEY, SCRIPT_KEY, SHOTS_KEY, SessionArchive, Stored};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
