//! Report payloads returned by the upstream model.
//!
//! One struct per JSON-shaped analysis task, mirroring the field names of the
//! upstream contract. Every report implements `Default` with the documented
//! placeholder values; the response normalizer falls back to that default
//! whenever the upstream text does not contain a parseable payload.

mod character;
mod grammar;
mod manuscript;
mod readability;
mod scene;
mod text;
mod tone;
mod plot;

pub use character::{CharacterReport, CharacterSuggestion, fallback_suggestions};
pub use grammar::{DEFAULT_GRAMMAR_SCORE, GrammarIssue, GrammarReport};
pub use manuscript::{Chapter, ChapterInsight, ManuscriptReport};
pub use readability::{DEFAULT_READABILITY_SCORE, ReadabilityFix, ReadabilityReport};
pub use scene::{DEFAULT_SCENE_RATING, SceneReport, SceneSuggestion};
pub use text::{Paraphrased, Summary};
pub use tone::ToneReport;
pub use plot::{DEFAULT_PLOT_SCORE, PlotRecommendation, PlotReport, PlotStage};
