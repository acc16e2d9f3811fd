//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that issue authenticated writes apply identical unauthenticated
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::SIGNIN_PATH;
use crate::state::session::{AppContext, SessionState};

/// True when the session has no token to authorize writes with.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/signin` whenever the session has no token.
pub fn install_unauth_redirect<F>(app: AppContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if app.state().with(should_redirect_unauth) {
            navigate(SIGNIN_PATH, NavigateOptions::default());
        }
    });
}
