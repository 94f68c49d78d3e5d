use async_trait::async_trait;
use serde_json::Value;

use crate::error::FlowError;

/// HTTP seam between the flows and the platform.
///
/// Implementations return the reply body whatever the status code is; only
/// failures that leave no body to inspect become [`FlowError::Transport`].
/// Futures are not `Send` since the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<String, FlowError>;

    /// Sends `body` with `Content-Type: application/json`.
    async fn post_json(&self, path: &str, body: &Value) -> Result<String, FlowError>;
}
