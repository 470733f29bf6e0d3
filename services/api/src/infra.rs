use metrics_exporter_prometheus::PrometheusHandle;
use outfit_ai::config::RecommendationConfig;
use outfit_ai::error::AppError;
use outfit_ai::workflows::catalog::{CatalogImporter, LoadedCatalog};
use outfit_ai::workflows::outfit::{
    Catalog, CategoryResolver, ColorPolicyKind, OutfitRecommender,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared, read-only matcher inputs handed to every request.
#[derive(Clone)]
pub(crate) struct MatcherState {
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) recommender: Arc<OutfitRecommender<ColorPolicyKind>>,
    pub(crate) per_category: usize,
    pub(crate) sampling_seed: Option<u64>,
}

impl MatcherState {
    pub(crate) fn new(catalog: Catalog, settings: &RecommendationConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommender: Arc::new(build_recommender(settings)),
            per_category: settings.per_category,
            sampling_seed: settings.sampling_seed,
        }
    }
}

pub(crate) fn build_recommender(
    settings: &RecommendationConfig,
) -> OutfitRecommender<ColorPolicyKind> {
    OutfitRecommender::with_policy(CategoryResolver::default(), settings.color_policy)
}

/// Resolves the catalog path (flag first, then configuration) and imports it.
pub(crate) fn load_catalog(
    override_path: Option<PathBuf>,
    settings: &RecommendationConfig,
) -> Result<LoadedCatalog, AppError> {
    let path = override_path
        .or_else(|| settings.catalog_path.clone())
        .ok_or(AppError::MissingCatalog)?;

    let importer = if settings.apply_corrections {
        CatalogImporter::standard()
    } else {
        CatalogImporter::without_corrections()
    };

    Ok(importer.load_path(path)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_catalog_requires_a_path() {
        let settings = RecommendationConfig::default();
        match load_catalog(None, &settings) {
            Err(AppError::MissingCatalog) => {}
            other => panic!("expected missing catalog error, got {other:?}"),
        }
    }

    #[test]
    fn matcher_state_uses_configured_defaults() {
        let matcher = fixtures::matcher();
        assert_eq!(matcher.catalog.len(), 5);
        assert_eq!(matcher.per_category, 2);
        assert_eq!(*matcher.recommender.policy(), ColorPolicyKind::Permissive);
    }
}
