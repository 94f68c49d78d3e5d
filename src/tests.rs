use crate::config::ServerConfig;
use crate::schemas::{BackendUnavailable, HealthResponse};
use crate::test_utils::{
    setup_static_dir, setup_test_app, setup_test_app_with, spawn_backend, unreachable_backend,
    APP_JS, INDEX_HTML, STATISTICS_REPLY,
};
use axum::http::StatusCode;
use axum_test::TestServer;
use common::api::decode_reply;
use common::{HourPrediction, StatisticsReply};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = setup_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(body.frontend, "available");
}

#[tokio::test]
async fn test_root_serves_index() {
    let (app, _dir) = setup_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_serves_bundle_asset() {
    let (app, _dir) = setup_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/app.js").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), APP_JS);
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let (app, _dir) = setup_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server.get("/daily/forecast").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), INDEX_HTML);
}

#[tokio::test]
async fn test_missing_bundle() {
    let empty = tempfile::tempdir().unwrap();
    let (app, _dir) = setup_test_app_with(empty, &ServerConfig::default().backend_url);
    let server = TestServer::new(app).unwrap();

    let health: HealthResponse = server.get("/health").await.json();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.frontend, "missing");

    let response = server.get("/").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (app, _dir) = setup_test_app();
    let server = TestServer::new(app).unwrap();

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("origin"),
            axum::http::HeaderValue::from_static("http://localhost:8080"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_statistics_forwarded_to_backend() {
    let backend = spawn_backend().await;
    let (app, _dir) = setup_test_app_with(setup_static_dir(), &backend);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/statistics").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.text(), STATISTICS_REPLY);
    let reply: StatisticsReply = decode_reply(&response.text()).unwrap();
    assert_eq!(reply.statistics.total_records, 1234567);
}

#[tokio::test]
async fn test_prediction_body_forwarded_to_backend() {
    let backend = spawn_backend().await;
    let (app, _dir) = setup_test_app_with(setup_static_dir(), &backend);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/predict_date")
        .json(&json!({"date": "2024-03-07", "hour": 7}))
        .await;

    response.assert_status(StatusCode::OK);
    let reply: HourPrediction = decode_reply(&response.text()).unwrap();
    assert_eq!(reply.date, "2024-03-07");
    assert_eq!(reply.hour, 7);
    assert_eq!(reply.prediction, 8421.5);
}

#[tokio::test]
async fn test_backend_failure_status_passes_through() {
    let backend = spawn_backend().await;
    let (app, _dir) = setup_test_app_with(setup_static_dir(), &backend);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/predict_day")
        .json(&json!({"date": "not-a-date"}))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let err = decode_reply::<serde_json::Value>(&response.text()).unwrap_err();
    assert_eq!(err.to_string(), "Error: Invalid date format");
}

#[tokio::test]
async fn test_unreachable_backend_reports_failure_body() {
    let backend = unreachable_backend().await;
    let (app, _dir) = setup_test_app_with(setup_static_dir(), &backend);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/statistics").expect_failure().await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: BackendUnavailable = response.json();
    assert!(!body.success);
    assert!(body.error.starts_with("Prediction backend unavailable"));
}
