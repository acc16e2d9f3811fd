//! Top navigation bar.

use leptos::prelude::*;

use crate::routes::{DASHBOARD_PATH, HOME_PATH, SIGNIN_PATH};
use crate::state::session::{AppContext, SessionPatch, SessionState};

#[component]
pub fn Nav() -> impl IntoView {
    let app = expect_context::<AppContext>();
    let signed_in = move || app.state().with(SessionState::is_signed_in);
    let username = move || app.state().with(|s| s.display_name().to_owned());

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-info">
            <a class="navbar-brand" href=HOME_PATH>
                "Volunteer Force"
            </a>
            <ul class="navbar-nav mr-auto">
                <li class="nav-item">
                    <a class="nav-link" href=HOME_PATH>
                        "Opportunities"
                    </a>
                </li>
                <li class="nav-item">
                    <a class="nav-link" href=DASHBOARD_PATH>
                        "Dashboard"
                    </a>
                </li>
            </ul>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="btn btn-outline-light" href=SIGNIN_PATH>
                            "Sign In"
                        </a>
                    }
                }
            >
                <span class="navbar-text mr-2">{username}</span>
                <a
                    class="btn btn-outline-light"
                    href=SIGNIN_PATH
                    on:click=move |_| app.set(SessionPatch::signed_out())
                >
                    "Sign Out"
                </a>
            </Show>
        </nav>
    }
}
