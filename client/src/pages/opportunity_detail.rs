//! Read-only view of a single opportunity.

#[cfg(test)]
#[path = "opportunity_detail_test.rs"]
mod opportunity_detail_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::alert::{Alert, AlertMessage};
use crate::net::types::Opportunity;
use crate::routes::{HOME_PATH, edit_opportunity_path};
use crate::state::loadable::Loadable;
use crate::state::opportunities::find_by_id;
use crate::state::session::{AppContext, SessionState};

#[component]
pub fn OpportunityDetailPage(app: AppContext, id: i64) -> impl IntoView {
    let cached = app.state().with_untracked(|s| cached_opportunity(s, id));
    let opportunity = RwSignal::new(cached.map_or(Loadable::Loading, Loadable::Ready));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_opportunity(id).await;
        if let Err(e) = &result {
            log::warn!("opportunity {id} fetch failed: {e}");
        }
        opportunity.set(Loadable::from_result(result));
    });

    let signed_in = move || app.state().with(SessionState::is_signed_in);

    view! {
        <div class="opportunity-page">
            <a href=HOME_PATH>"Back to opportunities"</a>
            {move || match opportunity.get() {
                Loadable::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                Loadable::Failed(msg) => {
                    let alert = AlertMessage::danger(format!("Could not load opportunity: {msg}"));
                    view! { <Alert message=Signal::stored(Some(alert))/> }.into_any()
                }
                Loadable::Ready(opp) => {
                    let rows = detail_rows(&opp)
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <dt class="col-sm-3">{label}</dt>
                                <dd class="col-sm-9">{value}</dd>
                            }
                        })
                        .collect::<Vec<_>>();
                    let edit_href = edit_opportunity_path(opp.id);
                    view! {
                        <div class="card mt-3">
                            <div class="card-header">{opp.name}</div>
                            <div class="card-body">
                                <dl class="row">{rows}</dl>
                                <Show when=signed_in>
                                    <a class="btn btn-warning btn-sm" href=edit_href.clone()>
                                        "Edit"
                                    </a>
                                </Show>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

/// Look for the record in lists already fetched this session.
fn cached_opportunity(state: &SessionState, id: i64) -> Option<Opportunity> {
    find_by_id(&state.opportunities, id)
        .or_else(|| find_by_id(&state.my_opportunities, id))
        .cloned()
}

/// Label/value pairs for the populated fields of `opp`.
fn detail_rows(opp: &Opportunity) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Partner", opp.partner_name.clone())];
    let optional = [
        ("Description", &opp.description),
        ("Address", &opp.address),
        ("Frequency", &opp.frequency),
        ("Starts", &opp.start_date),
        ("Ends", &opp.end_date),
        ("Tags", &opp.tag_string),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            rows.push((label, value.to_owned()));
        }
    }
    rows
}
