//! Error types for the Slate screenwriting toolkit.
//!
//! This crate provides the foundation error types used throughout the Slate
//! workspace. Each domain gets its own error struct with source location
//! tracking; the [`SlateError`] umbrella collects them behind one `Result`
//! alias.

mod config;
mod export;
mod gemini;
mod json;
mod storage;

pub use config::ConfigError;
pub use export::ExportError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::StorageError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum SlateErrorKind {
    /// Configuration error (missing credential, invalid option)
    Config(ConfigError),
    /// Upstream Gemini call error
    Gemini(GeminiError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Persistent store error
    Storage(StorageError),
    /// CSV/file export error
    Export(ExportError),
}

impl std::fmt::Display for SlateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlateErrorKind::Config(e) => write!(f, "{}", e),
            SlateErrorKind::Gemini(e) => write!(f, "{}", e),
            SlateErrorKind::Json(e) => write!(f, "{}", e),
            SlateErrorKind::Storage(e) => write!(f, "{}", e),
            SlateErrorKind::Export(e) => write!(f, "{}", e),
        }
    }
}

/// Slate error with kind discrimination.
#[derive(Debug)]
pub struct SlateError(Box<SlateErrorKind>);

impl SlateError {
    /// Create a new error from a kind.
    pub fn new(kind: SlateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SlateErrorKind {
        &self.0
    }
}

impl std::fmt::Display for SlateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slate Error: {}", self.0)
    }
}

impl std::error::Error for SlateError {}

// Generic From implementation for any type that converts to SlateErrorKind
impl<T> From<T> for SlateError
where
    T: Into<SlateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Slate operations.
pub type SlateResult<T> = std::result::Result<T, SlateError>;
