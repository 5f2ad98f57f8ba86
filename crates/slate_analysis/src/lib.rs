//! Response normalization, shot ingestion, and the analysis facade.
//!
//! The upstream model is an uncontrolled text producer: it wraps JSON in
//! Markdown fences, prepends prose, or returns no JSON at all. This crate
//! recovers a contractually-shaped payload from whatever comes back
//! ([`extraction`]), turns shot-like payloads into complete records
//! ([`ingest`]), and exposes one method per analysis task on
//! [`ScriptAnalyst`].

pub mod extraction;
pub mod ingest;

mod service;

pub use service::{ScriptAnalyst, ShotListOutcome};
