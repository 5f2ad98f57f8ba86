//! The rich-text script surface collaborator.
//!
//! The core never manipulates editor formatting state directly; it only
//! reads plain text and applies highlights to character ranges, which is
//! exactly the surface this trait exposes.

use serde::{Deserialize, Serialize};
use slate_core::ElementCategory;

/// A half-open character range `[start, end)` within the script text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct CharRange {
    /// First character index in the range.
    pub start: usize,
    /// One past the last character index.
    pub end: usize,
}

impl CharRange {
    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Background and foreground colors applied to a tagged range.
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
pub struct Highlight {
    /// Background color, e.g. "#FFD700".
    background: String,
    /// Foreground color.
    foreground: String,
}

impl Highlight {
    /// The highlight used when tagging a range under a category: the
    /// category's legend color on black text.
    pub fn for_category(category: ElementCategory) -> Self {
        Self {
            background: category.color().to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

/// Read/highlight access to the script editing surface.
pub trait ScriptSurface {
    /// Plain text of the whole document.
    fn document_text(&self) -> String;

    /// Plain text of a character range.
    fn selection_text(&self, range: CharRange) -> String;

    /// Apply a highlight to a character range.
    fn apply_highlight(&mut self, range: CharRange, highlight: Highlight);
}

/// In-memory plain-text implementation of [`ScriptSurface`].
///
/// Backs the session crate and tests; a GUI front end would provide its own
/// implementation over the real editor.
#[derive(Debug, Clone, Default)]
pub struct PlainScript {
    text: String,
    highlights: Vec<(CharRange, Highlight)>,
}

impl PlainScript {
    /// Create a surface over the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlights: Vec::new(),
        }
    }

    /// Replace the document text. Existing highlights are kept; ranges that
    /// no longer fit simply read as empty.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Highlights applied so far, in application order.
    pub fn highlights(&self) -> &[(CharRange, Highlight)] {
        &self.highlights
    }
}

impl ScriptSurface for PlainScript {
    fn document_text(&self) -> String {
        self.text.clone()
    }

    fn selection_text(&self, range: CharRange) -> String {
        self.text
            .chars()
            .skip(range.start)
            .take(range.len())
            .collect()
    }

    fn apply_highlight(&mut self, range: CharRange, highlight: Highlight) {
        self.highlights.push((range, highlight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_text_is_char_based() {
        let surface = PlainScript::new("café – EXT. STREET");
        let range = CharRange::new(0, 4);
        assert_eq!(surface.selection_text(range), "café");
    }

    #[test]
    fn out_of_range_selection_reads_empty() {
        let surface = PlainScript::new("abc");
        assert_eq!(surface.selection_text(CharRange::new(10, 20)), "");
    }

    #[test]
    fn category_highlight_uses_legend_color() {
        let highlight = Highlight::for_category(ElementCategory::Props);
        assert_eq!(highlight.background(), "#FFD700");
        assert_eq!(highlight.foreground(), "#000000");
    }
}
