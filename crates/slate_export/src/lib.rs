//! CSV export/import and script file import for Slate.
//!
//! Breakdown sheets and shot lists export to comma-separated documents with
//! fixed column headers; breakdown sheets can be read back. Field quoting is
//! standard CSV: any value containing a double-quote, comma, or line break
//! is quoted, with internal double-quotes doubled.

mod csv;
mod import;

pub use csv::{
    BREAKDOWN_HEADER, SHOT_LIST_HEADER, breakdown_from_csv, breakdown_to_csv, shots_to_csv,
};
pub use import::{count_scene_headings, read_script};
