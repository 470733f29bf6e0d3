use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parsed color list. Entries are trimmed and never empty; they keep the
/// catalog's casing and compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorPalette(Vec<String>);

impl ColorPalette {
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|color| !color.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, color: &str) -> bool {
        let color = color.trim();
        self.0
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(color))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

/// Catalog record. Free-text attributes stay as supplied; blank cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub display_name: String,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub occasion: Option<String>,
    pub colors: ColorPalette,
}

impl Item {
    pub fn category_or_empty(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate catalog item id {0}")]
    DuplicateId(ItemId),
}

/// Read-only item collection addressed by id, iterated in load order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items, index })
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|position| &self.items[*position])
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        match self.index.get(&id) {
            Some(position) => self.items.get_mut(*position),
            None => None,
        }
    }
}

/// One resolved complementary category and the items picked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub category: String,
    pub label: String,
    pub items: Vec<Item>,
}

/// Outcome of a single recommendation request. Every resolved category is
/// present, including those with no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub base_item: Item,
    pub recommended_items: Vec<CategorySelection>,
}

impl RecommendationResult {
    pub fn items_for(&self, label: &str) -> Option<&[Item]> {
        self.recommended_items
            .iter()
            .find(|selection| selection.label == label)
            .map(|selection| selection.items.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.recommended_items
            .iter()
            .map(|selection| selection.label.as_str())
    }

    pub fn total_recommended(&self) -> usize {
        self.recommended_items
            .iter()
            .map(|selection| selection.items.len())
            .sum()
    }
}

/// Plural label used to key result sections (`dress` -> `dresses`).
pub fn pluralize_category(category: &str) -> String {
    let trimmed = category.trim();
    if ["ss", "ch", "sh", "x", "z"]
        .iter()
        .any(|suffix| trimmed.ends_with(suffix))
    {
        return format!("{trimmed}es");
    }
    if trimmed.ends_with('s') {
        return trimmed.to_string();
    }
    if let Some(stem) = trimmed.strip_suffix('y') {
        let vowel_before = stem
            .chars()
            .last()
            .map(|ch| "aeiou".contains(ch))
            .unwrap_or(true);
        if !vowel_before {
            return format!("{stem}ies");
        }
    }
    format!("{trimmed}s")
}
