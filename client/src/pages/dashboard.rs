//! Dashboard page listing opportunities with edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Loads the opportunity list once on mount,
//! lets the search bar replace it, and removes deleted records by id.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertMessage};
use crate::components::opportunity_list::OpportunityList;
use crate::components::search_bar::SearchBar;
use crate::net::api::OPPORTUNITIES_ENDPOINT;
use crate::net::error::ApiError;
use crate::net::types::OpportunityPage;
use crate::routes::{ADD_OPPORTUNITY_PATH, ADD_PARTNER_PATH};
use crate::state::loadable::Loadable;
use crate::state::opportunities::listing_from_search;
use crate::state::session::{AppContext, SessionState};
use crate::util::auth::install_unauth_redirect;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const DELETE_FAILED_MESSAGE: &str = "Error Deleting";

/// Dashboard page. Redirects to `/signin` without a session token.
#[component]
pub fn DashboardPage(app: AppContext) -> impl IntoView {
    install_unauth_redirect(app, use_navigate());

    let listing = RwSignal::new(Loadable::<OpportunityPage>::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_opportunities(None).await;
        if let Err(e) = &result {
            log::warn!("opportunity list fetch failed: {e}");
        }
        if let Ok(page) = &result {
            app.set(crate::state::session::SessionPatch::opportunities(page.items.clone()));
        }
        listing.set(Loadable::from_result(result));
    });

    let on_search = Callback::new(move |raw: serde_json::Value| listing.set(listing_from_search(raw)));
    let on_search_error = Callback::new(move |e: ApiError| listing.set(Loadable::Failed(e.to_string())));

    let on_delete = Callback::new(move |id: i64| {
        let token = app.token_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_opportunity(token.as_deref(), id).await {
                Ok(()) => {
                    log::info!("deleted opportunity {id}");
                    listing.update(|l| {
                        crate::state::opportunities::remove_from_listing(l, id);
                    });
                    app.set_with(|s| s.without_opportunity(id));
                }
                Err(e) => {
                    log::warn!("delete of opportunity {id} failed: {e}");
                    crate::util::browser::alert_dialog(DELETE_FAILED_MESSAGE);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
        }
    });

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <nav aria-label="breadcrumb">
                <ol class="breadcrumb">
                    <li class="breadcrumb-item active" aria-current="page">
                        "Dashboard"
                    </li>
                </ol>
            </nav>
            <div class="card mb-3">
                <div class="card-header">{move || app.state().with(greeting)}</div>
                <div class="card-body">
                    <p>"Add an opportunity below or, edit an existing one."</p>
                    <div class="btn-group" role="group" aria-label="Dashboard actions">
                        <a class="btn btn-info" href=ADD_OPPORTUNITY_PATH>
                            "Add Opportunity"
                        </a>
                        <a class="btn btn-info" href=ADD_PARTNER_PATH>
                            "Add Partner (Admin)"
                        </a>
                    </div>
                </div>
            </div>
            <br/>
            <h4>"Opportunities"</h4>
            <SearchBar url=OPPORTUNITIES_ENDPOINT on_result=on_search on_error=on_search_error/>
            <br/>
            {move || match listing.get() {
                Loadable::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Loadable::Failed(msg) => {
                    view! { <Alert message=Signal::stored(Some(load_failed_alert(&msg)))/> }.into_any()
                }
                Loadable::Ready(page) => {
                    view! { <OpportunityList items=page.items editable=true on_delete=on_delete/> }.into_any()
                }
            }}
        </div>
    }
}

fn greeting(state: &SessionState) -> String {
    format!("Welcome back, {}!", state.display_name())
}

fn load_failed_alert(msg: &str) -> AlertMessage {
    AlertMessage::danger(format!("Could not load opportunities: {msg}"))
}
