//! Prompt construction for the Slate analysis tasks.
//!
//! [`render`] turns an [`AnalysisRequest`](slate_core::AnalysisRequest) into
//! the single instruction string sent upstream. Rendering is a pure function:
//! no network, no state. Each instruction embeds the subject text verbatim
//! and states the exact output shape the task expects, so the response
//! normalizer has a fixed contract to recover against.

mod builder;
mod templates;

pub use builder::{SHOT_LIST_SUBJECT_LIMIT, render};
