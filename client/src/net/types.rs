//! Wire DTOs for the volunteer-matching REST API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the API emits so serde decoding stays
//! lossless. Optional descriptive fields default to `None` because older
//! records omit them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A volunteer task record owned by a partner organization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: i64,
    pub name: String,
    /// Display name of the owning partner.
    #[serde(default)]
    pub partner_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Comma-separated tag names as rendered by the API.
    #[serde(default)]
    pub tag_string: Option<String>,
}

/// An organization offering opportunities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

/// Pagination metadata attached to collection responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
}

/// Collection envelope returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    pub items: Vec<T>,
    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), meta: None }
    }
}

/// One page of opportunities from `GET /api/opportunities`.
pub type OpportunityPage = Collection<Opportunity>;

/// Response body of `POST /api/token/auth`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Response body of `GET /api/frequencies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FrequencyList {
    #[serde(default)]
    pub frequencies: Vec<String>,
}

/// Request body for creating or updating an opportunity.
///
/// Empty optional fields are skipped so an update only touches what the user
/// filled in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OpportunityDraft {
    pub name: String,
    pub partner_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Request body for creating a partner.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PartnerDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
