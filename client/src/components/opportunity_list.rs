//! List of opportunities with optional edit and delete actions.
//!
//! DESIGN
//! ======
//! Delete reports the record id, never its position, so the owner can
//! remove it by key even if the list was refreshed in between.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::net::types::Opportunity;
use crate::routes::{edit_opportunity_path, opportunity_path};

#[component]
pub fn OpportunityList(
    items: Vec<Opportunity>,
    #[prop(optional)] editable: bool,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    if items.is_empty() {
        return view! {
            <ul class="list-group">
                <li class="list-group-item text-muted">"No opportunities found."</li>
            </ul>
        }
        .into_any();
    }

    let rows = items
        .into_iter()
        .map(|opp| {
            let id = opp.id;
            view! {
                <li class="list-group-item d-flex justify-content-between align-items-center">
                    <span>{opp.name} " - " {opp.partner_name}</span>
                    <div>
                        <a class="btn btn-info btn-sm" href=opportunity_path(id)>
                            "View"
                        </a>
                        {editable
                            .then(|| {
                                view! {
                                    <a class="btn btn-warning btn-sm" href=edit_opportunity_path(id)>
                                        "Edit"
                                    </a>
                                }
                            })}
                        {on_delete
                            .map(|on_delete| {
                                view! {
                                    <button
                                        class="btn btn-danger btn-sm"
                                        type="button"
                                        on:click=move |_| on_delete.run(id)
                                    >
                                        "Delete"
                                    </button>
                                }
                            })}
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="list-group">{rows}</ul> }.into_any()
}
