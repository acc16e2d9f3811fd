//! # client
//!
//! Leptos + WASM frontend for the volunteer-matching service.
//!
//! Pages, leaf components, session state, the route table and the REST
//! helpers that talk to the backend through the server's `/api` proxy.
//! Built with `ssr` for server rendering and `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
