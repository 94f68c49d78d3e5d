use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint
#[instrument]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // The page cannot load without its entry point
    let frontend = match tokio::fs::metadata(state.index_file()).await {
        Ok(meta) if meta.is_file() => "available".to_string(),
        _ => "missing".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        frontend,
    })
}
