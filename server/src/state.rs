//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one upstream HTTP client (connection pool, timeout) and the base
//! URL every `/api` request is relayed to.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream API base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the upstream client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.api_timeout).build()?;
        Ok(Self { http, upstream: Arc::from(config.api_url.as_str()) })
    }
}
