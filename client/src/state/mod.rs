//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `session` for what survives navigation, `loadable` for mount fetches,
//! `form` for field values, `opportunities` for keyed list edits.

pub mod form;
pub mod loadable;
pub mod opportunities;
pub mod session;
