//! Results of the plain-text tasks.

use serde::{Deserialize, Serialize};

/// A paraphrased passage with length bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Paraphrased {
    /// The rewritten text.
    text: String,
    /// Length of the original passage in characters.
    original_len: usize,
    /// Length of the rewritten passage in characters.
    new_len: usize,
}

impl Paraphrased {
    /// Build a result from the original passage and the rewritten text.
    pub fn from_texts(original: &str, text: String) -> Self {
        Self {
            original_len: original.chars().count(),
            new_len: text.chars().count(),
            text,
        }
    }
}

/// A summary with length bookkeeping and compression ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Summary {
    /// The summary text.
    text: String,
    /// Length of the original passage in characters.
    original_len: usize,
    /// Length of the summary in characters.
    summary_len: usize,
    /// Percentage of the original removed, one decimal place, e.g. "42.3".
    compression_ratio: String,
}

impl Summary {
    /// Build a summary result from the original passage and the summary text.
    pub fn from_texts(original: &str, text: String) -> Self {
        let original_len = original.chars().count();
        let summary_len = text.chars().count();
        let compression_ratio = if original_len == 0 {
            "0.0".to_string()
        } else {
            let saved = original_len as f64 - summary_len as f64;
            format!("{:.1}", saved / original_len as f64 * 100.0)
        };
        Self {
            text,
            original_len,
            summary_len,
            compression_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_computes_compression_ratio() {
        let summary = Summary::from_texts("a".repeat(200).as_str(), "a".repeat(50));
        assert_eq!(*summary.original_len(), 200);
        assert_eq!(*summary.summary_len(), 50);
        assert_eq!(summary.compression_ratio(), "75.0");
    }

    #[test]
    fn empty_original_does_not_divide_by_zero() {
        let summary = Summary::from_texts("", String::new());
        assert_eq!(summary.compression_ratio(), "0.0");
    }
}
