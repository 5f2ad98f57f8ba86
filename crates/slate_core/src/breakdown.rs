//! Breakdown element categories and the tagged-element set.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Fixed production categories for script breakdown tagging.
///
/// The category set is closed and exhaustive: both the tagging UI and the
/// upstream breakdown payload use exactly these keys.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ElementCategory {
    /// Physical items handled or seen.
    Props,
    /// Clothing items and accessories.
    Wardrobe,
    /// Character names.
    Cast,
    /// Settings and locations.
    Locations,
    /// Sound effects and audio elements.
    Sfx,
    /// Cars, trucks, planes, etc.
    Vehicles,
    /// Any animals mentioned.
    Animals,
    /// Physical action sequences.
    Stunts,
    /// Special makeup requirements.
    Makeup,
    /// Special filmmaking equipment needed.
    Equipment,
    /// Background performers needed.
    Extras,
}

impl ElementCategory {
    /// Legend color applied when highlighting a tagged range.
    pub fn color(&self) -> &'static str {
        match self {
            ElementCategory::Props => "#FFD700",
            ElementCategory::Wardrobe => "#FF69B4",
            ElementCategory::Cast => "#4169E1",
            ElementCategory::Locations => "#228B22",
            ElementCategory::Sfx => "#FF4500",
            ElementCategory::Vehicles => "#4682B4",
            ElementCategory::Animals => "#8B4513",
            ElementCategory::Stunts => "#DC143C",
            ElementCategory::Makeup => "#BA55D3",
            ElementCategory::Equipment => "#2F4F4F",
            ElementCategory::Extras => "#808080",
        }
    }
}

/// Tagged script snippets, grouped by production category.
///
/// Category keys are fixed and exhaustive; each category holds an ordered
/// sequence of snippets. Sequences are append/remove only, and insertion
/// order is meaningful for display.
///
/// This struct doubles as the upstream breakdown payload: it deserializes
/// directly from the model's `{"props": [...], "wardrobe": [...], ...}`
/// object, with missing categories defaulting to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakdownElementSet {
    props: Vec<String>,
    wardrobe: Vec<String>,
    cast: Vec<String>,
    locations: Vec<String>,
    sfx: Vec<String>,
    vehicles: Vec<String>,
    animals: Vec<String>,
    stunts: Vec<String>,
    makeup: Vec<String>,
    equipment: Vec<String>,
    extras: Vec<String>,
}

impl BreakdownElementSet {
    /// Create an empty element set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The snippets tagged under a category, in insertion order.
    pub fn items(&self, category: ElementCategory) -> &[String] {
        match category {
            ElementCategory::Props => &self.props,
            ElementCategory::Wardrobe => &self.wardrobe,
            ElementCategory::Cast => &self.cast,
            ElementCategory::Locations => &self.locations,
            ElementCategory::Sfx => &self.sfx,
            ElementCategory::Vehicles => &self.vehicles,
            ElementCategory::Animals => &self.animals,
            ElementCategory::Stunts => &self.stunts,
            ElementCategory::Makeup => &self.makeup,
            ElementCategory::Equipment => &self.equipment,
            ElementCategory::Extras => &self.extras,
        }
    }

    fn items_mut(&mut self, category: ElementCategory) -> &mut Vec<String> {
        match category {
            ElementCategory::Props => &mut self.props,
            ElementCategory::Wardrobe => &mut self.wardrobe,
            ElementCategory::Cast => &mut self.cast,
            ElementCategory::Locations => &mut self.locations,
            ElementCategory::Sfx => &mut self.sfx,
            ElementCategory::Vehicles => &mut self.vehicles,
            ElementCategory::Animals => &mut self.animals,
            ElementCategory::Stunts => &mut self.stunts,
            ElementCategory::Makeup => &mut self.makeup,
            ElementCategory::Equipment => &mut self.equipment,
            ElementCategory::Extras => &mut self.extras,
        }
    }

    /// Append a snippet to a category.
    pub fn push(&mut self, category: ElementCategory, item: impl Into<String>) {
        self.items_mut(category).push(item.into());
    }

    /// Remove the snippet at `index` within a category.
    ///
    /// Returns the removed snippet, or `None` if the index is out of range.
    pub fn remove(&mut self, category: ElementCategory, index: usize) -> Option<String> {
        let items = self.items_mut(category);
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Total number of tagged snippets across all categories.
    pub fn total(&self) -> usize {
        ElementCategory::iter()
            .map(|category| self.items(category).len())
            .sum()
    }

    /// True when no category holds any snippet.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate categories in their fixed display order with their snippets.
    pub fn iter(&self) -> impl Iterator<Item = (ElementCategory, &[String])> {
        ElementCategory::iter().map(|category| (category, self.items(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_fixed_and_exhaustive() {
        assert_eq!(ElementCategory::iter().count(), 11);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut set = BreakdownElementSet::new();
        set.push(ElementCategory::Props, "lamp");
        set.push(ElementCategory::Props, "revolver");
        set.push(ElementCategory::Props, "letter");
        assert_eq!(set.items(ElementCategory::Props), ["lamp", "revolver", "letter"]);
    }

    #[test]
    fn remove_returns_the_snippet() {
        let mut set = BreakdownElementSet::new();
        set.push(ElementCategory::Cast, "MARLOWE");
        set.push(ElementCategory::Cast, "VIVIAN");
        assert_eq!(set.remove(ElementCategory::Cast, 0).as_deref(), Some("MARLOWE"));
        assert_eq!(set.items(ElementCategory::Cast), ["VIVIAN"]);
        assert_eq!(set.remove(ElementCategory::Cast, 5), None);
    }

    #[test]
    fn partial_payload_defaults_missing_categories_to_empty() {
        let set: BreakdownElementSet =
            serde_json::from_str(r#"{"props": ["lamp"], "cast": ["MARLOWE"]}"#).unwrap();
        assert_eq!(set.items(ElementCategory::Props), ["lamp"]);
        assert!(set.items(ElementCategory::Wardrobe).is_empty());
        assert_eq!(set.total(), 2);
    }

    #[test]
    fn category_wire_names_are_lowercase() {
        assert_eq!(ElementCategory::Sfx.to_string(), "sfx");
        let category: ElementCategory = "wardrobe".parse().unwrap();
        assert_eq!(category, ElementCategory::Wardrobe);
    }
}
