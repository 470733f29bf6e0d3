use super::pairing::{PairingRuleTable, ACCESSORY, GENERIC_GARMENTS, SHOES, WATCH};
use serde::Serialize;

/// Complementary categories in resolution order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComplementaryCategories(Vec<String>);

impl ComplementaryCategories {
    fn push(&mut self, category: &str) {
        if !self.contains(category) {
            self.0.push(category.to_string());
        }
    }

    fn remove(&mut self, category: &str) {
        self.0.retain(|existing| existing != category);
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|existing| existing == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Turns a base item's category into the categories worth searching for.
#[derive(Debug, Clone, Default)]
pub struct CategoryResolver {
    table: PairingRuleTable,
}

impl CategoryResolver {
    pub fn new(table: PairingRuleTable) -> Self {
        Self { table }
    }

    pub fn resolve(&self, base_category: &str) -> ComplementaryCategories {
        let base = base_category.trim().to_lowercase();
        let mut categories = ComplementaryCategories::default();

        match self.table.first_match(&base) {
            Some(rule) => {
                for complement in &rule.complements {
                    categories.push(complement);
                }
            }
            None => {
                let standalone =
                    base.contains(SHOES) || base.contains(ACCESSORY) || base.contains(WATCH);
                if !standalone {
                    for garment in GENERIC_GARMENTS {
                        categories.push(garment);
                    }
                }
            }
        }

        if !base.contains(SHOES) {
            categories.push(SHOES);
        }
        if !base.contains(WATCH) && !base.contains(ACCESSORY) {
            categories.push(ACCESSORY);
        }

        categories.remove(&base);
        categories
    }
}
