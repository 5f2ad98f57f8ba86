//! Breakdown and shot-list session state.
//!
//! Sessions hold the mutable editing state of the two tools — the tagged
//! breakdown element set and the shot list — and write it back to the
//! persistent store on every mutation. The rich-text surface is only touched
//! through its two documented capabilities: reading plain text and applying
//! highlights.

mod breakdown_session;
mod shot_session;

pub use breakdown_session::BreakdownSession;
pub use shot_session::{DESCRIPTION_PREFILL_LIMIT, ShotListSession};
