use crate::config::ServerConfig;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::fs;
use tokio::net::TcpListener;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>energy forecast</body></html>";
pub const APP_JS: &str = "console.log('energy forecast');";

pub const STATISTICS_REPLY: &str = r#"{"success":true,"statistics":{"mean":9000.0,"median":8900.5,"std":1200.25,"min":5000.4,"max":15000.6,"total_records":1234567}}"#;

/// Static directory holding a minimal frontend bundle
pub fn setup_static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create static dir");
    fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
    fs::write(dir.path().join("app.js"), APP_JS).expect("Failed to write app.js");
    dir
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from `RUST_LOG`, defaulting to WARN.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// In-process stand-in for the prediction backend
fn fake_backend() -> Router {
    Router::new()
        .route(
            "/predict_date",
            post(|Json(request): Json<Value>| async move {
                Json(json!({
                    "success": true,
                    "date": request["date"],
                    "hour": request["hour"],
                    "day_name": "Thursday",
                    "prediction": 8421.5,
                    "unit": "MWh",
                }))
            }),
        )
        .route(
            "/predict_day",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"success": false, "error": "Invalid date format"})),
                )
            }),
        )
        .route(
            "/statistics",
            get(|| async { ([("content-type", "application/json")], STATISTICS_REPLY) }),
        )
}

/// Serve the fake backend on a free local port and return its base URL
pub async fn spawn_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().expect("Fake backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, fake_backend())
            .await
            .expect("Fake backend failed");
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on
pub async fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve port");
    let addr = listener.local_addr().expect("Reserved port has no address");
    drop(listener);
    format!("http://{}", addr)
}

/// Create axum app serving `static_dir` and forwarding to `backend_url`.
///
/// The returned directory must outlive the app.
pub fn setup_test_app_with(static_dir: TempDir, backend_url: &str) -> (Router, TempDir) {
    let _guard = init_test_tracing();
    let router = create_router(AppState::new(static_dir.path(), backend_url));
    (router, static_dir)
}

/// Create axum app with a populated frontend bundle and the default backend
pub fn setup_test_app() -> (Router, TempDir) {
    setup_test_app_with(setup_static_dir(), &ServerConfig::default().backend_url)
}
