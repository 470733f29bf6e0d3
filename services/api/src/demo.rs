use crate::infra::{build_recommender, load_catalog};
use clap::Args;
use outfit_ai::config::AppConfig;
use outfit_ai::error::AppError;
use outfit_ai::workflows::catalog::{AppliedCorrection, LoadedCatalog};
use outfit_ai::workflows::outfit::{ItemId, OutfitReport, RecommendationError};
use std::path::PathBuf;

/// Showcase items: a men's shirt, a women's watch, and the corrected track pants.
const SHOWCASE_ITEMS: [u64; 3] = [15970, 59263, 21379];

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Catalog id of the base item
    #[arg(long)]
    pub(crate) item_id: u64,
    /// Catalog CSV export (defaults to OUTFIT_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Maximum items per complementary category
    #[arg(long)]
    pub(crate) per_category: Option<usize>,
    /// Seed for reproducible sampling
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Print the report as JSON instead of the console layout
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog CSV export (defaults to OUTFIT_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Seed for reproducible sampling
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        item_id,
        catalog,
        per_category,
        seed,
        json,
    } = args;

    let config = AppConfig::load()?;
    let settings = &config.recommendation;
    let loaded = load_catalog(catalog, settings)?;
    let recommender = build_recommender(settings);

    let per_category = per_category.unwrap_or(settings.per_category);
    let seed = seed.or(settings.sampling_seed);
    let result =
        recommender.recommend_seeded(&loaded.catalog, ItemId(item_id), per_category, seed)?;
    let report = OutfitReport::from_result(&result);

    if json {
        let payload = serde_json::to_string_pretty(&report).map_err(|err| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
        })?;
        println!("{payload}");
    } else {
        render_corrections(&loaded.corrections);
        println!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog, seed } = args;

    let config = AppConfig::load()?;
    let settings = &config.recommendation;
    let LoadedCatalog {
        catalog,
        corrections,
    } = load_catalog(catalog, settings)?;
    let recommender = build_recommender(settings);
    let seed = seed.or(settings.sampling_seed);

    println!("Outfit matcher demo");
    println!(
        "Catalog: {} items | {} per category | color policy {}",
        catalog.len(),
        settings.per_category,
        settings.color_policy.label()
    );
    render_corrections(&corrections);

    for id in SHOWCASE_ITEMS {
        println!();
        match recommender.recommend_seeded(&catalog, ItemId(id), settings.per_category, seed) {
            Ok(result) => println!("{}", render_report(&OutfitReport::from_result(&result))),
            Err(RecommendationError::NotFound(missing)) => {
                println!("Item {missing} is not in this catalog, skipping");
            }
        }
    }

    Ok(())
}

fn render_corrections(corrections: &[AppliedCorrection]) {
    if corrections.is_empty() {
        return;
    }

    println!("Catalog corrections applied:");
    for correction in corrections {
        println!(
            "- {}: {} -> {}",
            correction.item_id, correction.previous_category, correction.category
        );
    }
}

pub(crate) fn render_report(report: &OutfitReport) -> String {
    let base = &report.base_item;
    let mut lines = vec![
        format!("Base Item: {} (ID: {})", base.name, base.id),
        format!(
            "Type: {}, Gender: {}, Occasion: {}, Colors: {}",
            base.category, base.gender, base.occasion, base.colors
        ),
        "Recommended Items:".to_string(),
    ];

    for section in &report.sections {
        if section.items.is_empty() {
            lines.push(format!("  No {} recommendations found.", section.heading));
            continue;
        }

        lines.push(format!("  {}:", section.heading));
        for item in &section.items {
            lines.push(format!(
                "    - {} (ID: {}) - Type: {}, Colors: {}",
                item.name, item.id, item.category, item.colors
            ));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::fixtures::matcher;

    #[test]
    fn render_lists_sections_and_missing_categories() {
        let matcher = matcher();
        let result = matcher
            .recommender
            .recommend_seeded(&matcher.catalog, ItemId(15970), 2, Some(1))
            .expect("base item exists");
        let rendered = render_report(&OutfitReport::from_result(&result));

        assert!(rendered.starts_with("Base Item: Turtle Check Men Navy Blue Shirt (ID: 15970)"));
        assert!(rendered.contains("  Jeans:\n    - Peter England Men Party Blue Jeans (ID: 39386) - Type: Jeans, Colors: Blue"));
        assert!(rendered.contains("  Shoes:\n    - Puma Men Black Casual Shoes (ID: 9204)"));
        assert!(rendered.contains("  No Skirts recommendations found."));
        assert!(!rendered.contains("Shirts"));
    }
}
