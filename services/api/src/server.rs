use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, MatcherState};
use crate::routes::with_outfit_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use outfit_ai::config::AppConfig;
use outfit_ai::error::AppError;
use outfit_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let settings = &config.recommendation;
    let loaded = load_catalog(args.catalog.take(), settings)?;
    info!(
        items = loaded.catalog.len(),
        corrections = loaded.corrections.len(),
        color_policy = settings.color_policy.label(),
        per_category = settings.per_category,
        "catalog ready"
    );
    let matcher = MatcherState::new(loaded.catalog, settings);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_outfit_routes(matcher)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "outfit matcher ready");

    axum::serve(listener, app).await?;
    Ok(())
}
