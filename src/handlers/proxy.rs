use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use tracing::{debug, error, instrument};

use crate::schemas::{AppState, BackendUnavailable};

/// Forwards a prediction route to the backend, passing body and status
/// through untouched.
#[instrument(skip(state, headers, body), fields(path = %uri.path()))]
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = format!("{}{}", state.backend_url, uri.path());
    debug!("Forwarding {} to {}", method, url);

    let mut request = state.client.request(method, &url);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type);
    }

    let reply = match request.body(body).send().await {
        Ok(reply) => reply,
        Err(e) => {
            error!("Backend request to {} failed: {}", url, e);
            return unavailable(e);
        }
    };

    let status = reply.status();
    let content_type = reply.headers().get(CONTENT_TYPE).cloned();
    let bytes = match reply.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read backend reply from {}: {}", url, e);
            return unavailable(e);
        }
    };
    debug!("Backend replied {} ({} bytes)", status, bytes.len());

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

fn unavailable(e: reqwest::Error) -> Response {
    let body = BackendUnavailable {
        success: false,
        error: format!("Prediction backend unavailable: {}", e),
    };
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}
