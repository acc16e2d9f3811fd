//! Public landing page with an opportunity search.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::alert::{Alert, AlertMessage};
use crate::components::opportunity_list::OpportunityList;
use crate::components::search_bar::SearchBar;
use crate::net::api::OPPORTUNITIES_ENDPOINT;
use crate::net::error::ApiError;
use crate::net::types::OpportunityPage;
use crate::state::loadable::Loadable;
use crate::state::opportunities::listing_from_search;
use crate::state::session::AppContext;

#[component]
pub fn HomePage(app: AppContext) -> impl IntoView {
    let cached = app.state().with_untracked(|s| s.opportunities.clone());
    let listing = RwSignal::new(if cached.is_empty() {
        Loadable::<OpportunityPage>::Loading
    } else {
        Loadable::Ready(OpportunityPage { items: cached, meta: None })
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_opportunities(None).await;
        match result {
            Ok(page) => {
                app.set(crate::state::session::SessionPatch::opportunities(page.items.clone()));
                listing.set(Loadable::Ready(page));
            }
            Err(e) => {
                log::warn!("opportunity list fetch failed: {e}");
                // Keep showing the cached list if there is one.
                if listing.with_untracked(Loadable::is_loading) {
                    listing.set(Loadable::Failed(e.to_string()));
                }
            }
        }
    });

    let on_search = Callback::new(move |raw: serde_json::Value| listing.set(listing_from_search(raw)));
    let on_search_error = Callback::new(move |e: ApiError| listing.set(Loadable::Failed(e.to_string())));

    view! {
        <div class="home-page">
            <div class="jumbotron">
                <h1>"Find a way to help"</h1>
                <p class="lead">
                    "Browse volunteer opportunities offered by local partner organizations."
                </p>
            </div>
            <SearchBar url=OPPORTUNITIES_ENDPOINT on_result=on_search on_error=on_search_error/>
            <br/>
            {move || match listing.get() {
                Loadable::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Loadable::Failed(msg) => {
                    let alert = AlertMessage::danger(format!("Could not load opportunities: {msg}"));
                    view! { <Alert message=Signal::stored(Some(alert))/> }.into_any()
                }
                Loadable::Ready(page) => view! { <OpportunityList items=page.items/> }.into_any(),
            }}
        </div>
    }
}
