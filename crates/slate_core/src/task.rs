//! Analysis task kinds and their options.
//!
//! Every analysis the service can run is a variant of [`TaskKind`], with the
//! task's options carried on the variant itself. Dispatch over tasks is an
//! exhaustive match, so adding a task kind is a compile-checked change.

use serde::{Deserialize, Serialize};

/// Expected top-level shape of an upstream payload.
///
/// The response normalizer uses this to decide whether to scan the cleaned
/// response for an object literal, an array literal, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// Plain generated text; no JSON recovery is attempted.
    Text,
    /// A single JSON object with named fields.
    Object,
    /// A JSON array of records.
    Array,
}

/// Depth of a grammar and style analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnalysisDepth {
    /// Grammar errors and basic punctuation only.
    Basic,
    /// Grammar, punctuation, style, and clarity.
    #[default]
    Standard,
    /// Adds flow, consistency, and literary quality.
    Comprehensive,
    /// Creative-writing focus: narrative voice, character consistency.
    Literary,
}

/// Focus of a character analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CharacterFocus {
    /// Speech patterns, vocabulary, and dialogue style.
    Voice,
    /// Growth, motivations, and character arc.
    Development,
    /// Consistency of behavior, voice, and personality.
    Consistency,
    /// Dialogue quality and authenticity.
    Dialogue,
    /// Implied backstory and areas for depth.
    Backstory,
}

/// Narrative structure template for plot analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PlotTemplate {
    ThreeAct,
    HerosJourney,
    SevenPoint,
    Freytag,
    Fichtean,
    /// Free-form structural analysis with no named template.
    Custom,
}

/// Rewrite mode for single-option paraphrasing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum ParaphraseMode {
    Formal,
    Academic,
    Simple,
    Creative,
    Shorten,
    Expand,
    /// Caller-supplied rewrite instruction. Must be non-empty.
    Custom(String),
}

/// Options for the literary-style advanced paraphrase task.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_new::new,
)]
pub struct ParaphraseOptions {
    /// Literary mode, e.g. "noir" or "lyrical".
    mode: String,
    /// Target writing style.
    writing_style: String,
    /// Intended audience.
    target_audience: String,
    /// Whether dialogue lines must survive the rewrite unchanged.
    preserve_dialogue: bool,
}

/// Requested summary length.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

/// One analysis task, with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "task", content = "options", rename_all = "snake_case")]
pub enum TaskKind {
    /// Tone and sentiment analysis.
    Tone,
    /// Grammar and style check at the given depth.
    Grammar {
        depth: AnalysisDepth,
    },
    /// Analysis of a named character.
    Character {
        name: String,
        focus: CharacterFocus,
    },
    /// Enhancement suggestions for a named character.
    CharacterSuggestions {
        name: String,
        traits: Vec<String>,
        focus_area: String,
    },
    /// Plot structure analysis against a template.
    Plot {
        template: PlotTemplate,
    },
    /// Cross-chapter manuscript analysis.
    Manuscript,
    /// Scene conflict/tension analysis.
    Scene {
        scene_kind: String,
    },
    /// Readability scoring for a target audience.
    Readability {
        target_audience: String,
    },
    /// Script breakdown into production element categories.
    Breakdown,
    /// Shot list generation from a screenplay.
    ShotList,
    /// Single-mode paraphrase.
    Paraphrase {
        mode: ParaphraseMode,
    },
    /// Literary paraphrase with style/audience options.
    AdvancedParaphrase {
        options: ParaphraseOptions,
    },
    /// Summarization at the requested length.
    Summarize {
        length: SummaryLength,
    },
    /// Synonyms for a word, in the context of the subject text.
    Synonyms {
        word: String,
    },
    /// Rewrite machine-sounding text to read naturally.
    Humanize,
}

impl TaskKind {
    /// The top-level shape this task's payload is contracted to have.
    pub fn payload_shape(&self) -> PayloadShape {
        match self {
            TaskKind::Paraphrase { .. }
            | TaskKind::AdvancedParaphrase { .. }
            | TaskKind::Summarize { .. }
            | TaskKind::Humanize => PayloadShape::Text,
            TaskKind::Tone
            | TaskKind::Grammar { .. }
            | TaskKind::Character { .. }
            | TaskKind::Plot { .. }
            | TaskKind::Manuscript
            | TaskKind::Scene { .. }
            | TaskKind::Readability { .. }
            | TaskKind::Breakdown => PayloadShape::Object,
            TaskKind::CharacterSuggestions { .. } | TaskKind::ShotList | TaskKind::Synonyms { .. } => {
                PayloadShape::Array
            }
        }
    }

    /// Short task label used in tracing fields.
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Tone => "tone",
            TaskKind::Grammar { .. } => "grammar",
            TaskKind::Character { .. } => "character",
            TaskKind::CharacterSuggestions { .. } => "character_suggestions",
            TaskKind::Plot { .. } => "plot",
            TaskKind::Manuscript => "manuscript",
            TaskKind::Scene { .. } => "scene",
            TaskKind::Readability { .. } => "readability",
            TaskKind::Breakdown => "breakdown",
            TaskKind::ShotList => "shot_list",
            TaskKind::Paraphrase { .. } => "paraphrase",
            TaskKind::AdvancedParaphrase { .. } => "advanced_paraphrase",
            TaskKind::Summarize { .. } => "summarize",
            TaskKind::Synonyms { .. } => "synonyms",
            TaskKind::Humanize => "humanize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shot_list_expects_an_array() {
        assert_eq!(TaskKind::ShotList.payload_shape(), PayloadShape::Array);
    }

    #[test]
    fn text_tasks_skip_json_recovery() {
        let task = TaskKind::Paraphrase {
            mode: ParaphraseMode::Formal,
        };
        assert_eq!(task.payload_shape(), PayloadShape::Text);
        assert_eq!(TaskKind::Humanize.payload_shape(), PayloadShape::Text);
    }

    #[test]
    fn task_kind_round_trips_through_serde() {
        let task = TaskKind::Grammar {
            depth: AnalysisDepth::Literary,
        };
        let json = serde_json::to_string(&task).unwrap();
        let back: TaskKind = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
