use super::color::ColorVerdict;
use super::domain::{Item, ItemId, RecommendationResult};
use serde::Serialize;

/// Flattened item attributes for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub gender: String,
    pub occasion: String,
    pub colors: String,
    /// Set on recommended items: how their colors relate to the base item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_verdict: Option<ColorVerdict>,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.display_name.clone(),
            category: item.category.clone().unwrap_or_default(),
            gender: item.gender.clone().unwrap_or_default(),
            occasion: item.occasion.clone().unwrap_or_default(),
            colors: item.colors.joined(),
            color_verdict: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitSection {
    pub label: String,
    pub heading: String,
    pub items: Vec<ItemView>,
}

/// Presentation-ready summary of a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitReport {
    pub base_item: ItemView,
    pub sections: Vec<OutfitSection>,
    pub empty_sections: Vec<String>,
    pub total_recommended: usize,
}

impl OutfitReport {
    pub fn from_result(result: &RecommendationResult) -> Self {
        let mut sections = Vec::with_capacity(result.recommended_items.len());
        let mut empty_sections = Vec::new();

        for selection in &result.recommended_items {
            if selection.items.is_empty() {
                empty_sections.push(selection.label.clone());
            }
            sections.push(OutfitSection {
                label: selection.label.clone(),
                heading: capitalize(&selection.label),
                items: selection
                    .items
                    .iter()
                    .map(|item| ItemView {
                        color_verdict: Some(ColorVerdict::assess(
                            &item.colors,
                            &result.base_item.colors,
                        )),
                        ..ItemView::from(item)
                    })
                    .collect(),
            });
        }

        Self {
            base_item: ItemView::from(&result.base_item),
            sections,
            empty_sections,
            total_recommended: result.total_recommended(),
        }
    }

    pub fn populated_sections(&self) -> impl Iterator<Item = &OutfitSection> {
        self.sections.iter().filter(|section| !section.items.is_empty())
    }

    /// Drops sections without items; `empty_sections` still lists them.
    pub fn without_empty_sections(mut self) -> Self {
        self.sections.retain(|section| !section.items.is_empty());
        self
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
