//! Networking modules for the volunteer-matching REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` defines the single failure type, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
