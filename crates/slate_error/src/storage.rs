//! Persistent store error types.

/// Storage error with source location.
#[derive(Debug, Clone)]
pub struct StorageError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl StorageError {
    /// Create a new StorageError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use slate_error::StorageError;
    ///
    /// let err = StorageError::new("session directory not writable");
    /// assert!(err.message.contains("not writable"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Storage Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for StorageError {}
