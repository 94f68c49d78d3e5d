use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Directory holding the compiled frontend bundle
    pub static_dir: PathBuf,
    /// Prediction backend base URL, without trailing slash
    pub backend_url: String,
    /// Shared client for forwarded requests
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(static_dir: impl Into<PathBuf>, backend_url: &str) -> Self {
        Self {
            static_dir: static_dir.into(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle is present
    pub frontend: String,
}

/// Body returned when the prediction backend cannot be reached, in the
/// backend's own failure shape
#[derive(Debug, Serialize, Deserialize)]
pub struct BackendUnavailable {
    pub success: bool,
    pub error: String,
}
