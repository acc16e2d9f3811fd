//! Browser dialog helpers.
//!
//! Hydrate-only; the SSR build logs instead so server rendering stays
//! deterministic.

/// Show a blocking `window.alert` with `message`.
pub fn alert_dialog(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("alert: {message}");
    }
}
