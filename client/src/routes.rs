//! Application paths.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares one `leptos_router` `<Route>` per path below; pages
//! build links from these constants and helpers so the two never drift.
//! Parameterized routes capture `:id`, read back with `parse_id`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME_PATH: &str = "/";
pub const SIGNIN_PATH: &str = "/signin";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const DASHBOARD_SEARCH_PATH: &str = "/dashboard/opportunities/search";
pub const ADD_OPPORTUNITY_PATH: &str = "/dashboard/addopportunity";
pub const ADD_PARTNER_PATH: &str = "/dashboard/addpartner";

/// Path for the edit form of opportunity `id`.
pub fn edit_opportunity_path(id: i64) -> String {
    format!("/dashboard/editopportunity/{id}")
}

/// Path for the read-only view of opportunity `id`.
pub fn opportunity_path(id: i64) -> String {
    format!("/opportunities/{id}")
}

/// Parse a numeric id captured from a route.
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.parse().ok()
}
