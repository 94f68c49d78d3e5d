use crate::handlers::{health::health_check, proxy::forward};
use crate::schemas::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use common::Endpoint;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router: health check, the prediction routes forwarded
/// to the backend, and the frontend bundle
pub fn create_router(state: AppState) -> Router {
    // Unknown paths get index.html so the page owns its own navigation
    let assets = ServeDir::new(&state.static_dir).fallback(ServeFile::new(state.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .route(Endpoint::PredictDate.path(), post(forward))
        .route(Endpoint::PredictDay.path(), post(forward))
        .route(Endpoint::Statistics.path(), get(forward))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
