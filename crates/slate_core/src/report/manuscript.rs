//! Manuscript-wide analysis report.

use serde::{Deserialize, Serialize};

/// One chapter of a manuscript, as submitted for analysis.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Chapter number, 1-based.
    number: u32,
    /// Chapter title.
    title: String,
    /// Chapter text.
    content: String,
}

/// Per-chapter insight within a manuscript report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct ChapterInsight {
    /// Chapter number the insight refers to.
    chapter_number: u32,
    /// Chapter strengths.
    strengths: Vec<String>,
    /// Suggested improvements.
    improvements: Vec<String>,
    /// Pace rating label, e.g. "good".
    pace_rating: String,
}

/// Structural analysis across all chapters of a manuscript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptReport {
    /// Overall progress estimate, 0-100.
    #[serde(default)]
    overall_progress: u8,
    /// Total word count across chapters.
    #[serde(default)]
    total_word_count: u32,
    /// Average chapter length in words.
    #[serde(default)]
    average_chapter_length: u32,
    /// Analysis of pacing across chapters.
    #[serde(default)]
    pace_analysis: String,
    /// Consistency issues across chapters.
    #[serde(default)]
    consistency_issues: Vec<String>,
    /// Manuscript-level suggestions.
    #[serde(default)]
    suggestions: Vec<String>,
    /// Readability score, 0-100.
    #[serde(default)]
    readability_score: u8,
    /// Per-chapter insights.
    #[serde(default)]
    chapter_insights: Vec<ChapterInsight>,
}

impl Default for ManuscriptReport {
    fn default() -> Self {
        Self {
            overall_progress: 0,
            total_word_count: 0,
            average_chapter_length: 0,
            pace_analysis: "Analysis in progress".to_string(),
            consistency_issues: Vec::new(),
            suggestions: vec!["Continue writing your manuscript".to_string()],
            readability_score: 75,
            chapter_insights: Vec::new(),
        }
    }
}
