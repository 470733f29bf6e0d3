use super::color::{ColorPolicy, PermissiveColorPolicy};
use super::domain::{
    pluralize_category, Catalog, CategorySelection, Item, ItemId, RecommendationResult,
};
use super::filter::{filter_candidates, CandidateQuery};
use super::resolver::CategoryResolver;
use super::selector::select;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

pub const DEFAULT_PER_CATEGORY: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecommendationError {
    #[error("item {0} not found in catalog")]
    NotFound(ItemId),
}

/// Stateless matcher that assembles an outfit around a base catalog item.
#[derive(Debug, Clone, Default)]
pub struct OutfitRecommender<P = PermissiveColorPolicy> {
    resolver: CategoryResolver,
    policy: P,
}

impl OutfitRecommender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: ColorPolicy> OutfitRecommender<P> {
    pub fn with_policy(resolver: CategoryResolver, policy: P) -> Self {
        Self { resolver, policy }
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Filtered, color-checked candidates for one category, in catalog order.
    pub fn candidates<'c>(&self, catalog: &'c Catalog, base: &Item, category: &str) -> Vec<&'c Item> {
        let query = CandidateQuery::for_base(base, category);
        filter_candidates(catalog, &query)
            .into_iter()
            .filter(|candidate| self.policy.is_compatible(&candidate.colors, &base.colors))
            .collect()
    }

    pub fn recommend<R>(
        &self,
        catalog: &Catalog,
        item_id: ItemId,
        per_category: usize,
        rng: &mut R,
    ) -> Result<RecommendationResult, RecommendationError>
    where
        R: Rng + ?Sized,
    {
        let Some(base) = catalog.get(item_id) else {
            warn!(%item_id, "base item missing from catalog");
            return Err(RecommendationError::NotFound(item_id));
        };

        let categories = self.resolver.resolve(base.category_or_empty());
        debug!(
            %item_id,
            base_category = base.category_or_empty(),
            categories = ?categories,
            "resolved complementary categories"
        );

        let mut recommended_items = Vec::with_capacity(categories.len());
        for category in categories.iter() {
            let candidates = self.candidates(catalog, base, category);
            let items = select(&candidates, per_category, rng);
            debug!(
                category,
                candidates = candidates.len(),
                selected = items.len(),
                "selected complementary items"
            );

            recommended_items.push(CategorySelection {
                category: category.to_string(),
                label: pluralize_category(category),
                items,
            });
        }

        Ok(RecommendationResult {
            base_item: base.clone(),
            recommended_items,
        })
    }

    /// Runs [`recommend`](Self::recommend) with a fresh generator, seeded when
    /// `seed` is provided so the selection is reproducible.
    pub fn recommend_seeded(
        &self,
        catalog: &Catalog,
        item_id: ItemId,
        per_category: usize,
        seed: Option<u64>,
    ) -> Result<RecommendationResult, RecommendationError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.recommend(catalog, item_id, per_category, &mut rng)
    }
}
