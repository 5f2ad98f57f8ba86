//! Scene conflict/tension report.

use serde::{Deserialize, Serialize};

/// Rating reported for every axis when the upstream payload cannot be parsed.
pub const DEFAULT_SCENE_RATING: u8 = 50;

/// One scene improvement suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneSuggestion {
    /// Suggestion category, e.g. "Conflict".
    #[serde(rename = "type")]
    suggestion_type: String,
    /// Suggestion description.
    description: String,
    /// Example implementation.
    example: String,
}

/// Conflict, tension, and effectiveness analysis of a single scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct SceneReport {
    /// Conflict intensity, 0-100.
    #[serde(default)]
    conflict_level: u8,
    /// Tension rating, 0-100.
    #[serde(default)]
    tension_rating: u8,
    /// Pace rating, 0-100.
    #[serde(default)]
    pace_rating: u8,
    /// Dialogue quality, 0-100.
    #[serde(default)]
    dialogue_quality: u8,
    /// Character development, 0-100.
    #[serde(default)]
    character_development: u8,
    /// Conflict types present, e.g. "internal".
    #[serde(default)]
    conflict_types: Vec<String>,
    /// Tension techniques observed.
    #[serde(default)]
    tension_techniques: Vec<String>,
    /// Scene strengths.
    #[serde(default)]
    strengths: Vec<String>,
    /// Suggested improvements.
    #[serde(default)]
    improvements: Vec<String>,
    /// Detailed suggestions.
    #[serde(default)]
    suggestions: Vec<SceneSuggestion>,
}

impl Default for SceneReport {
    fn default() -> Self {
        Self {
            conflict_level: DEFAULT_SCENE_RATING,
            tension_rating: DEFAULT_SCENE_RATING,
            pace_rating: DEFAULT_SCENE_RATING,
            dialogue_quality: DEFAULT_SCENE_RATING,
            character_development: DEFAULT_SCENE_RATING,
            conflict_types: vec!["general".to_string()],
            tension_techniques: vec!["basic tension".to_string()],
            strengths: vec!["Scene analyzed".to_string()],
            improvements: vec!["Continue developing".to_string()],
            suggestions: vec![SceneSuggestion {
                suggestion_type: "General".to_string(),
                description: "Scene analysis completed".to_string(),
                example: "Continue refining your scene".to_string(),
            }],
        }
    }
}
