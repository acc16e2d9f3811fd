//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the shared `AppContext`, owns its route-scoped
//! orchestration (fetches, redirects, alerts) and delegates rendering
//! details to `components`.

pub mod dashboard;
pub mod home;
pub mod opportunity_detail;
pub mod opportunity_form;
pub mod partner_form;
pub mod signin;
