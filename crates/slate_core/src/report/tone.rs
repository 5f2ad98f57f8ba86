//! Tone analysis report.

use serde::{Deserialize, Serialize};

/// Tone and sentiment analysis of a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ToneReport {
    /// Description of the overall tone.
    #[serde(default)]
    overall_tone: String,
    /// Sentiment label, e.g. "positive".
    #[serde(default)]
    sentiment: String,
    /// Confidence label, e.g. "high".
    #[serde(default)]
    confidence: String,
    /// Emotions detected in the passage.
    #[serde(default)]
    emotions: Vec<String>,
    /// Improvement suggestions.
    #[serde(default)]
    suggestions: String,
}

impl Default for ToneReport {
    fn default() -> Self {
        Self {
            overall_tone: "Neutral tone detected".to_string(),
            sentiment: "neutral".to_string(),
            confidence: "medium".to_string(),
            emotions: vec!["general".to_string()],
            suggestions: "Tone analysis completed successfully".to_string(),
        }
    }
}
