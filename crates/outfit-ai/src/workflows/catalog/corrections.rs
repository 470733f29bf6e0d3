use crate::workflows::outfit::{Catalog, ItemId};
use serde::Serialize;

/// Replaces a mislabelled category, but only while the stored value is still
/// the known-bad one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCorrection {
    pub item_id: ItemId,
    pub expected_category: String,
    pub replacement: String,
}

impl CatalogCorrection {
    pub fn new(item_id: ItemId, expected_category: &str, replacement: &str) -> Self {
        Self {
            item_id,
            expected_category: expected_category.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedCorrection {
    pub item_id: ItemId,
    pub previous_category: String,
    pub category: String,
}

/// Corrections for records known to be mislabelled in the fashion export.
pub fn standard_corrections() -> Vec<CatalogCorrection> {
    vec![
        // Manchester United Men Solid Black Track Pants ships as "shirt".
        CatalogCorrection::new(ItemId(21379), "shirt", "track pants"),
    ]
}

pub(crate) fn apply_corrections(
    catalog: &mut Catalog,
    corrections: &[CatalogCorrection],
) -> Vec<AppliedCorrection> {
    let mut applied = Vec::new();

    for correction in corrections {
        let Some(item) = catalog.get_mut(correction.item_id) else {
            continue;
        };
        let matches_expected = item
            .category
            .as_deref()
            .map(|current| current.eq_ignore_ascii_case(&correction.expected_category))
            .unwrap_or(false);
        if !matches_expected {
            continue;
        }

        let previous_category = item
            .category
            .replace(correction.replacement.clone())
            .unwrap_or_default();
        applied.push(AppliedCorrection {
            item_id: correction.item_id,
            previous_category,
            category: correction.replacement.clone(),
        });
    }

    applied
}
