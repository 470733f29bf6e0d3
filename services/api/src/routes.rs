use crate::infra::{AppState, MatcherState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use outfit_ai::error::AppError;
use outfit_ai::workflows::outfit::{ItemId, ItemView, OutfitReport, RecommendationError};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendRequest {
    pub(crate) item_id: u64,
    #[serde(default)]
    pub(crate) per_category: Option<usize>,
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    #[serde(default)]
    pub(crate) include_empty: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct OutfitReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) per_category: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seed: Option<u64>,
    pub(crate) color_policy: &'static str,
    #[serde(flatten)]
    pub(crate) report: OutfitReport,
}

pub(crate) fn with_outfit_routes(matcher: MatcherState) -> Router {
    Router::new()
        .route("/api/v1/outfits/recommend", post(recommend_endpoint))
        .route("/api/v1/catalog/items/:item_id", get(item_endpoint))
        .with_state(matcher)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn recommend_endpoint(
    State(matcher): State<MatcherState>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<OutfitReportResponse>, AppError> {
    let RecommendRequest {
        item_id,
        per_category,
        seed,
        include_empty,
    } = payload;

    let per_category = per_category.unwrap_or(matcher.per_category);
    let seed = seed.or(matcher.sampling_seed);
    let result = matcher.recommender.recommend_seeded(
        &matcher.catalog,
        ItemId(item_id),
        per_category,
        seed,
    )?;

    let report = OutfitReport::from_result(&result);
    let report = if include_empty {
        report
    } else {
        report.without_empty_sections()
    };

    Ok(Json(OutfitReportResponse {
        generated_at: Utc::now(),
        per_category,
        seed,
        color_policy: matcher.recommender.policy().label(),
        report,
    }))
}

pub(crate) async fn item_endpoint(
    State(matcher): State<MatcherState>,
    Path(item_id): Path<u64>,
) -> Result<Json<ItemView>, AppError> {
    let id = ItemId(item_id);
    let item = matcher
        .catalog
        .get(id)
        .ok_or(RecommendationError::NotFound(id))?;
    Ok(Json(ItemView::from(item)))
}
