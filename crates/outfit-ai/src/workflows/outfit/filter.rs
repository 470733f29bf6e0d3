use super::domain::{Catalog, Item, ItemId};

const UNISEX: &str = "unisex";
const GENERAL_OCCASION: &str = "general";

/// Attribute constraints a candidate must satisfy for one complementary category.
#[derive(Debug, Clone, Copy)]
pub struct CandidateQuery<'a> {
    pub category: &'a str,
    pub gender: &'a str,
    pub occasion: &'a str,
    pub exclude: ItemId,
}

impl<'a> CandidateQuery<'a> {
    pub fn for_base(base: &'a Item, category: &'a str) -> Self {
        Self {
            category,
            gender: base.gender.as_deref().unwrap_or(""),
            occasion: base.occasion.as_deref().unwrap_or(""),
            exclude: base.id,
        }
    }

    pub fn matches(&self, candidate: &Item) -> bool {
        candidate.id != self.exclude
            && matches_with_wildcard(candidate.gender.as_deref(), self.gender, UNISEX)
            && matches_with_wildcard(candidate.occasion.as_deref(), self.occasion, GENERAL_OCCASION)
            && contains_ignore_case(candidate.category.as_deref(), self.category)
    }
}

/// Catalog-order scan for candidates that satisfy `query`.
pub fn filter_candidates<'c>(catalog: &'c Catalog, query: &CandidateQuery<'_>) -> Vec<&'c Item> {
    catalog
        .items()
        .iter()
        .filter(|candidate| query.matches(candidate))
        .collect()
}

fn matches_with_wildcard(value: Option<&str>, needle: &str, wildcard: &str) -> bool {
    contains_ignore_case(value, needle) || contains_ignore_case(value, wildcard)
}

/// Case-insensitive substring test. Blank values and blank needles never match.
pub(crate) fn contains_ignore_case(value: Option<&str>, needle: &str) -> bool {
    let needle = needle.trim();
    match value.map(str::trim) {
        Some(value) if !value.is_empty() && !needle.is_empty() => value
            .to_lowercase()
            .contains(needle.to_lowercase().as_str()),
        _ => false,
    }
}
