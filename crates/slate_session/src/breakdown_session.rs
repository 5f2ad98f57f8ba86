//! Script breakdown tagging session.

use slate_core::{BreakdownElementSet, ElementCategory};
use slate_error::SlateResult;
use slate_interface::{BlobStore, CharRange, Highlight, ScriptSurface};
use slate_storage::SessionArchive;
use tracing::debug;

/// One script-breakdown editing session.
///
/// Tagging a selection appends the snippet to the element set and applies
/// the category's highlight to the selected range. Every mutation is written
/// back to the archive before it returns.
pub struct BreakdownSession<S, E> {
    elements: BreakdownElementSet,
    surface: E,
    archive: SessionArchive<S>,
}

impl<S: BlobStore, E: ScriptSurface> BreakdownSession<S, E> {
    /// Open a session over the given surface, restoring any element set
    /// saved by a previous session.
    pub fn open(archive: SessionArchive<S>, surface: E) -> SlateResult<Self> {
        let elements = archive.load_breakdown()?.unwrap_or_default();
        debug!(existing = elements.total(), "Opened breakdown session");
        Ok(Self {
            elements,
            surface,
            archive,
        })
    }

    /// Tag the selected range under a category.
    ///
    /// The trimmed selection text is appended to the category and the range
    /// is highlighted in the category's legend color. An empty selection
    /// tags nothing and returns `None`.
    pub fn tag_selection(
        &mut self,
        range: CharRange,
        category: ElementCategory,
    ) -> SlateResult<Option<String>> {
        let selected = self.surface.selection_text(range);
        let snippet = selected.trim();
        if snippet.is_empty() {
            return Ok(None);
        }

        self.elements.push(category, snippet);
        self.surface
            .apply_highlight(range, Highlight::for_category(category));
        self.archive.save_breakdown(&self.elements)?;
        debug!(category = %category, snippet, "Tagged selection");
        Ok(Some(snippet.to_string()))
    }

    /// Accept one AI-suggested element into the breakdown.
    pub fn accept_suggestion(
        &mut self,
        category: ElementCategory,
        item: impl Into<String>,
    ) -> SlateResult<()> {
        self.elements.push(category, item);
        self.archive.save_breakdown(&self.elements)
    }

    /// Remove the element at `index` within a category.
    pub fn remove_element(
        &mut self,
        category: ElementCategory,
        index: usize,
    ) -> SlateResult<Option<String>> {
        let removed = self.elements.remove(category, index);
        if removed.is_some() {
            self.archive.save_breakdown(&self.elements)?;
        }
        Ok(removed)
    }

    /// The current element set.
    pub fn elements(&self) -> &BreakdownElementSet {
        &self.elements
    }

    /// The script surface.
    pub fn surface(&self) -> &E {
        &self.surface
    }

    /// Full document text, for handing to the analysis facade.
    pub fn script_text(&self) -> String {
        self.surface.document_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slate_interface::PlainScript;
    use slate_storage::MemoryStore;
    use std::sync::Arc;

    fn archive() -> (Arc<MemoryStore>, SessionArchive<Arc<MemoryStore>>) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), SessionArchive::new(store))
    }

    #[test]
    fn tagging_appends_and_highlights() {
        let (_, archive) = archive();
        let surface = PlainScript::new("The brass lamp flickers.");
        let mut session = BreakdownSession::open(archive, surface).unwrap();

        let snippet = session
            .tag_selection(CharRange::new(4, 14), ElementCategory::Props)
            .unwrap();
        assert_eq!(snippet.as_deref(), Some("brass lamp"));
        assert_eq!(session.elements().items(ElementCategory::Props), ["brass lamp"]);

        let highlights = session.surface().highlights();
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].1.background(), ElementCategory::Props.color());
    }

    #[test]
    fn empty_selection_tags_nothing() {
        let (_, archive) = archive();
        let mut session =
            BreakdownSession::open(archive, PlainScript::new("   spaces   ")).unwrap();
        let snippet = session
            .tag_selection(CharRange::new(0, 3), ElementCategory::Cast)
            .unwrap();
        assert_eq!(snippet, None);
        assert!(session.elements().is_empty());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let (store, archive) = archive();
        let mut session =
            BreakdownSession::open(archive, PlainScript::new("A red car idles.")).unwrap();

        session
            .accept_suggestion(ElementCategory::Vehicles, "red car")
            .unwrap();
        let reopened = BreakdownSession::open(
            SessionArchive::new(store.clone()),
            PlainScript::new(""),
        )
        .unwrap();
        assert_eq!(
            reopened.elements().items(ElementCategory::Vehicles),
            ["red car"]
        );
    }

    #[test]
    fn remove_element_persists_the_removal() {
        let (store, archive) = archive();
        let mut session = BreakdownSession::open(archive, PlainScript::new("")).unwrap();
        session.accept_suggestion(ElementCategory::Props, "lamp").unwrap();
        session.accept_suggestion(ElementCategory::Props, "letter").unwrap();

        let removed = session.remove_element(ElementCategory::Props, 0).unwrap();
        assert_eq!(removed.as_deref(), Some("lamp"));

        let reopened =
            BreakdownSession::open(SessionArchive::new(store), PlainScript::new("")).unwrap();
        assert_eq!(reopened.elements().items(ElementCategory::Props), ["letter"]);
    }
}
