//! Core data types for the Slate screenwriting toolkit.
//!
//! This crate provides the foundation data types used across all Slate
//! interfaces: analysis task kinds, shot records, breakdown element sets,
//! and the report payloads returned by the upstream model.

mod breakdown;
mod request;
mod shot;
mod task;

pub mod report;

pub use breakdown::{BreakdownElementSet, ElementCategory};
pub use request::AnalysisRequest;
pub use shot::{
    CameraAngle, CameraMovement, FrameRate, Lens, PartialShot, ShotRecord, ShotRecordBuilder,
    ShotType, defaults,
};
pub use task::{
    AnalysisDepth, CharacterFocus, ParaphraseMode, ParaphraseOptions, PayloadShape, PlotTemplate,
    SummaryLength, TaskKind,
};
