//! Rule-based outfit matching: category pairing, attribute filtering, color
//! policy, and bounded random selection around a base catalog item.

pub mod color;
pub mod domain;
mod engine;
mod filter;
pub mod pairing;
pub mod report;
mod resolver;
mod selector;

#[cfg(test)]
mod tests;

pub use color::{
    ColorPolicy, ColorPolicyKind, ColorVerdict, PermissiveColorPolicy, StrictColorPolicy,
};
pub use domain::{
    pluralize_category, Catalog, CatalogError, CategorySelection, ColorPalette, Item, ItemId,
    RecommendationResult,
};
pub use engine::{OutfitRecommender, RecommendationError, DEFAULT_PER_CATEGORY};
pub use filter::{filter_candidates, CandidateQuery};
pub use pairing::{PairingRule, PairingRuleTable};
pub use report::{ItemView, OutfitReport, OutfitSection};
pub use resolver::{CategoryResolver, ComplementaryCategories};
pub use selector::select;
