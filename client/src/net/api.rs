//! REST API helpers for the volunteer-matching backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is attempt-once and returns `Result<_, ApiError>`; callers
//! decide how to surface the failure. Nothing here retries or panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::error::ApiError;
use super::types::{Opportunity, OpportunityDraft, OpportunityPage, Partner, PartnerDraft};

pub const OPPORTUNITIES_ENDPOINT: &str = "/api/opportunities";
pub const PARTNERS_ENDPOINT: &str = "/api/partners";
pub const FREQUENCIES_ENDPOINT: &str = "/api/frequencies";
pub const TOKEN_ENDPOINT: &str = "/api/token/auth";

fn opportunity_endpoint(id: i64) -> String {
    format!("{OPPORTUNITIES_ENDPOINT}/{id}")
}

/// Append a `search` query to `base`. An empty query returns `base` as-is.
pub fn search_url(base: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return base.to_owned();
    }
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}search={}", urlencoding::encode(query))
}

/// `Authorization` header value for HTTP Basic credentials.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// `Authorization` header value for a bearer token.
pub fn bearer_auth_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &bearer_auth_header(token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::status(resp.status(), &resp.status_text()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch arbitrary JSON from `url`. Used by components that do not know the
/// shape of what they load.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not JSON.
pub async fn fetch_json(url: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url).send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the first page of opportunities, optionally filtered by `search`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a collection.
pub async fn fetch_opportunities(search: Option<&str>) -> Result<OpportunityPage, ApiError> {
    let url = search_url(OPPORTUNITIES_ENDPOINT, search.unwrap_or_default());
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one opportunity by id.
///
/// # Errors
///
/// Returns an error if the request fails or the opportunity does not exist.
pub async fn fetch_opportunity(id: i64) -> Result<Opportunity, ApiError> {
    let url = opportunity_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&url).send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err(ApiError::Unavailable)
    }
}

/// Create an opportunity via `POST /api/opportunities`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the draft.
pub async fn create_opportunity(token: Option<&str>, draft: &OpportunityDraft) -> Result<Opportunity, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::post(OPPORTUNITIES_ENDPOINT), token).json(draft)?;
        let resp = req.send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Unavailable)
    }
}

/// Update an opportunity via `PUT /api/opportunities/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the draft.
pub async fn update_opportunity(
    token: Option<&str>,
    id: i64,
    draft: &OpportunityDraft,
) -> Result<Opportunity, ApiError> {
    let url = opportunity_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::put(&url), token).json(draft)?;
        let resp = req.send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url, draft);
        Err(ApiError::Unavailable)
    }
}

/// Delete an opportunity via `DELETE /api/opportunities/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers non-2xx.
pub async fn delete_opportunity(token: Option<&str>, id: i64) -> Result<(), ApiError> {
    let url = opportunity_endpoint(id);
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&url), token).send().await?;
        if !resp.ok() {
            return Err(ApiError::status(resp.status(), &resp.status_text()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, url);
        Err(ApiError::Unavailable)
    }
}

/// Fetch all partners from `GET /api/partners`.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a collection.
pub async fn fetch_partners() -> Result<Vec<Partner>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PARTNERS_ENDPOINT).send().await?;
        let page: super::types::Collection<Partner> = read_json(resp).await?;
        Ok(page.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a partner via `POST /api/partners`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the draft.
pub async fn create_partner(token: Option<&str>, draft: &PartnerDraft) -> Result<Partner, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = authorized(gloo_net::http::Request::post(PARTNERS_ENDPOINT), token).json(draft)?;
        let resp = req.send().await?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(ApiError::Unavailable)
    }
}

/// Fetch frequency names from `GET /api/frequencies`.
///
/// # Errors
///
/// Returns an error if the request fails or the body has the wrong shape.
pub async fn fetch_frequencies() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(FREQUENCIES_ENDPOINT).send().await?;
        let list: super::types::FrequencyList = read_json(resp).await?;
        Ok(list.frequencies)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Exchange username/password for an API token via `POST /api/token/auth`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn request_token(username: &str, password: &str) -> Result<String, ApiError> {
    let authorization = basic_auth_header(username, password);
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(TOKEN_ENDPOINT)
            .header("Authorization", &authorization)
            .send()
            .await?;
        let body: super::types::TokenResponse = read_json(resp).await?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = authorization;
        Err(ApiError::Unavailable)
    }
}
