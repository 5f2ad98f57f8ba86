//! LLM-assisted script breakdown and shot-list authoring.
//!
//! This facade crate re-exports the Slate workspace API:
//!
//! - [`ScriptAnalyst`] — one method per analysis task, over any
//!   [`TextGenerator`]
//! - [`GeminiClient`] — the bundled Gemini implementation
//! - session state ([`BreakdownSession`], [`ShotListSession`]) and
//!   persistence ([`SessionArchive`], [`FileStore`], [`MemoryStore`])
//! - CSV export/import helpers
//!
//! The `slate` binary wires these together behind a small CLI.

pub mod cli;

pub use slate_analysis::{ScriptAnalyst, ShotListOutcome, extraction, ingest};
pub use slate_core::report;
pub use slate_core::{
    AnalysisDepth, AnalysisRequest, BreakdownElementSet, CameraAngle, CameraMovement,
    CharacterFocus, ElementCategory, FrameRate, Lens, ParaphraseMode, ParaphraseOptions,
    PartialShot, PayloadShape, PlotTemplate, ShotRecord, ShotType, SummaryLength, TaskKind,
    defaults,
};
pub use slate_error::{
    ConfigError, ExportError, GeminiError, GeminiErrorKind, JsonError, SlateError, SlateErrorKind,
    SlateResult, StorageError,
};
pub use slate_export::{
    BREAKDOWN_HEADER, SHOT_LIST_HEADER, breakdown_from_csv, breakdown_to_csv,
    count_scene_headings, read_script, shots_to_csv,
};
pub use slate_interface::{
    BlobStore, CharRange, Highlight, PlainScript, ScriptSurface, TextGenerator,
};
pub use slate_models::{API_KEY_VAR, DEFAULT_MODEL, GeminiClient};
pub use slate_prompt::{SHOT_LIST_SUBJECT_LIMIT, render};
pub use slate_session::{BreakdownSession, DESCRIPTION_PREFILL_LIMIT, ShotListSession};
pub use slate_storage::{
    BREAKDOWN_KEY, FileStore, MemoryStore, SCRIPT_KEY, SHOTS_KEY, SessionArchive, Stored,
};
