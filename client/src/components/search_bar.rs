//! Search input that fetches a configurable URL.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SearchBar` knows nothing about what it loads: the raw JSON body goes to
//! the owner's `on_result` callback and the owner decides how to decode it.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::net::api::search_url;
use crate::net::error::ApiError;

/// Search box bound to `url`; submits `GET {url}?search={query}`.
#[component]
pub fn SearchBar(
    #[prop(into)] url: String,
    on_result: Callback<serde_json::Value>,
    #[prop(optional)] on_error: Option<Callback<ApiError>>,
    #[prop(default = "Search opportunities")] placeholder: &'static str,
) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let target = search_url(&url, &query.get_untracked());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_json(&target).await;
            deliver(result, |value| on_result.run(value), |err| {
                log::warn!("search request to {target} failed: {err}");
                if let Some(on_error) = on_error {
                    on_error.run(err);
                }
            });
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, on_result, on_error);
            busy.set(false);
        }
    };

    view! {
        <form class="search-bar input-group" on:submit=on_submit>
            <input
                class="form-control"
                type="search"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="input-group-append">
                <button class="btn btn-info" type="submit" disabled=move || busy.get()>
                    "Search"
                </button>
            </div>
        </form>
    }
}

/// Route a finished request to the matching callback, passing the body
/// through untouched.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn deliver(
    result: Result<serde_json::Value, ApiError>,
    on_result: impl FnOnce(serde_json::Value),
    on_error: impl FnOnce(ApiError),
) {
    match result {
        Ok(value) => on_result(value),
        Err(err) => on_error(err),
    }
}
