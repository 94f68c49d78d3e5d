use async_trait::async_trait;
use common::{FlowError, Transport};
use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::settings::{self, AppSettings};

/// `fetch`-backed transport for the prediction backend.
///
/// Non-OK statuses are not errors here: the backend reports failures in
/// the JSON body, which the flows decode.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url(),
        }
    }

    /// Transport built from the global settings
    pub fn from_settings() -> Self {
        Self::new(&settings::get_settings())
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, endpoint: &str) -> Result<String, FlowError> {
        let url = self.url(endpoint);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                log::error!("GET {} - Request failed: {}", endpoint, e);
                FlowError::transport(e.to_string())
            })?;

        read_body("GET", endpoint, response).await
    }

    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<String, FlowError> {
        let url = self.url(endpoint);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| {
                log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
                FlowError::transport(e.to_string())
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", endpoint, e);
                FlowError::transport(e.to_string())
            })?;

        read_body("POST", endpoint, response).await
    }
}

async fn read_body(method: &str, endpoint: &str, response: Response) -> Result<String, FlowError> {
    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
    }

    log::trace!("{} {} - Response received, reading body", method, endpoint);
    response.text().await.map_err(|e| {
        log::error!("{} {} - Failed to read response: {}", method, endpoint, e);
        FlowError::transport(e.to_string())
    })
}
