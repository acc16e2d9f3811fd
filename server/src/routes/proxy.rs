//! Relay for `/api/*` requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api` request is sent on
//! to the configured upstream with the same method, path, query, body and
//! end-to-end headers, and the upstream's answer is returned as-is.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out upstream becomes `502 Bad Gateway` with a JSON
//! `{ "error": ... }` body. Upstream error statuses pass through untouched.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body relayed upstream.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded.
/// `host` and `content-length` are recomputed by the outgoing client.
fn is_connection_header(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
            | "host"
            | "content-length"
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("request body rejected: {0}")]
    RequestBody(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Upstream URL for an incoming `path_and_query`.
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

/// Copy `headers`, dropping connection-scoped ones.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_connection_header(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.upstream, path_and_query);

    let body: Bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::RequestBody(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(method = %parts.method, upstream = %url, error = %e, "upstream unreachable"))?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, upstream = %url, status = status.as_u16(), "relayed");

    Ok((status, headers, Body::from(bytes)).into_response())
}
