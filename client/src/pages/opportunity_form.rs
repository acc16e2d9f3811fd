//! Create and edit forms for opportunities.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves both `/dashboard/addopportunity` and
//! `/dashboard/editopportunity/:id`. Partner names populate a select and are
//! cached in the session so later forms skip the fetch.

#[cfg(test)]
#[path = "opportunity_form_test.rs"]
mod opportunity_form_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertMessage};
use crate::components::form::Form;
use crate::net::types::{Opportunity, OpportunityDraft};
use crate::routes::{DASHBOARD_PATH, opportunity_path};
use crate::state::form::{FieldChange, FieldDescriptor, FormRows, FormValues, InputType};
use crate::state::loadable::Loadable;
use crate::state::session::AppContext;
use crate::util::auth::install_unauth_redirect;

const MISSING_REQUIRED: &str = "Opportunity name and partner are required.";

/// Whether the form creates a new record or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    fn title(self) -> &'static str {
        match self {
            Self::Create => "Add Opportunity",
            Self::Edit(_) => "Edit Opportunity",
        }
    }
}

#[component]
pub fn OpportunityFormPage(app: AppContext, mode: FormMode) -> impl IntoView {
    install_unauth_redirect(app, use_navigate());

    let values = RwSignal::new(FormValues::default());
    let partners = RwSignal::new(app.state().with_untracked(|s| partner_names(&s.partners)));
    let frequencies = RwSignal::new(Vec::<String>::new());
    let existing = RwSignal::new(match mode {
        FormMode::Create => Loadable::Ready(()),
        FormMode::Edit(_) => Loadable::Loading,
    });
    let alert = RwSignal::new(None::<AlertMessage>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        if partners.get_untracked().is_empty() {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_partners().await {
                    Ok(list) => {
                        partners.set(partner_names(&list));
                        app.set(crate::state::session::SessionPatch::partners(list));
                    }
                    Err(e) => log::warn!("partner list fetch failed: {e}"),
                }
            });
        }
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_frequencies().await {
                Ok(list) => frequencies.set(list),
                Err(e) => log::warn!("frequency list fetch failed: {e}"),
            }
        });
        if let FormMode::Edit(id) = mode {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_opportunity(id).await {
                    Ok(opp) => {
                        values.set(values_from_opportunity(&opp));
                        existing.set(Loadable::Ready(()));
                    }
                    Err(e) => {
                        log::warn!("opportunity {id} fetch failed: {e}");
                        existing.set(Loadable::Failed(e.to_string()));
                    }
                }
            });
        }
    }

    let rows = Signal::derive(move || opportunity_rows(&partners.get(), &frequencies.get()));
    let on_change = Callback::new(move |change: FieldChange| values.update(|v| v.apply(change)));

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let draft = match draft_from_values(&values.get_untracked()) {
            Ok(draft) => draft,
            Err(msg) => {
                alert.set(Some(AlertMessage::danger(msg)));
                return;
            }
        };
        let token = app.token_untracked();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match mode {
                FormMode::Create => crate::net::api::create_opportunity(token.as_deref(), &draft).await,
                FormMode::Edit(id) => crate::net::api::update_opportunity(token.as_deref(), id, &draft).await,
            };
            match result {
                Ok(opp) => {
                    log::info!("saved opportunity {}", opp.id);
                    app.set_with(|s| s.with_saved_opportunity(opp.clone()));
                    if mode == FormMode::Create {
                        values.set(FormValues::default());
                    }
                    alert.set(Some(saved_alert(&opp, mode)));
                }
                Err(e) => {
                    log::warn!("saving opportunity failed: {e}");
                    alert.set(Some(AlertMessage::danger(e.to_string())));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, token);
            busy.set(false);
        }
    });

    view! {
        <div class="card">
            <div class="card-header">{mode.title()}</div>
            <div class="card-body">
                <a href=DASHBOARD_PATH>"Back to dashboard"</a>
                {move || match existing.get() {
                    Loadable::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                    Loadable::Failed(msg) => {
                        let alert = AlertMessage::danger(format!("Could not load opportunity: {msg}"));
                        view! { <Alert message=Signal::stored(Some(alert))/> }.into_any()
                    }
                    Loadable::Ready(()) => {
                        view! {
                            <Form
                                rows=rows
                                data=values
                                on_change=on_change
                                on_submit=on_submit
                                color="info"
                                submit_label="Save"
                                busy=busy
                            />
                        }
                            .into_any()
                    }
                }}
                <br/>
                <Alert message=alert/>
            </div>
        </div>
    }
}

fn partner_names(partners: &[crate::net::types::Partner]) -> Vec<String> {
    partners.iter().map(|p| p.name.clone()).collect()
}

/// Form layout; falls back to free text when a choice list is unavailable.
fn opportunity_rows(partners: &[String], frequencies: &[String]) -> FormRows {
    let partner = FieldDescriptor::new("Partner", "partner_name");
    let partner = if partners.is_empty() { partner } else { partner.with_options(partners.to_vec()) };
    let frequency = FieldDescriptor::new("Frequency", "frequency");
    let frequency = if frequencies.is_empty() { frequency } else { frequency.with_options(frequencies.to_vec()) };

    vec![
        vec![FieldDescriptor::new("Opportunity Name", "name"), partner],
        vec![FieldDescriptor::new("Description", "description").with_type(InputType::TextArea)],
        vec![FieldDescriptor::new("Address", "address"), frequency],
        vec![
            FieldDescriptor::new("Start Date", "start_date").with_type(InputType::Date),
            FieldDescriptor::new("End Date", "end_date").with_type(InputType::Date),
        ],
    ]
}

/// Build the request body; the API rejects drafts without name or partner.
fn draft_from_values(values: &FormValues) -> Result<OpportunityDraft, &'static str> {
    let (Some(name), Some(partner_name)) = (values.non_empty("name"), values.non_empty("partner_name")) else {
        return Err(MISSING_REQUIRED);
    };
    Ok(OpportunityDraft {
        name,
        partner_name,
        description: values.non_empty("description"),
        address: values.non_empty("address"),
        frequency: values.non_empty("frequency"),
        start_date: values.non_empty("start_date"),
        end_date: values.non_empty("end_date"),
    })
}

/// Prefill values for editing `opp`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn values_from_opportunity(opp: &Opportunity) -> FormValues {
    let mut values = FormValues::default();
    values.set("name", opp.name.as_str());
    values.set("partner_name", opp.partner_name.as_str());
    values.set_opt("description", opp.description.as_deref());
    values.set_opt("address", opp.address.as_deref());
    values.set_opt("frequency", opp.frequency.as_deref());
    values.set_opt("start_date", opp.start_date.as_deref());
    values.set_opt("end_date", opp.end_date.as_deref());
    values
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn saved_alert(opp: &Opportunity, mode: FormMode) -> AlertMessage {
    let verb = match mode {
        FormMode::Create => "Created",
        FormMode::Edit(_) => "Updated",
    };
    AlertMessage::success(format!("{verb} \"{}\".", opp.name)).with_link(opportunity_path(opp.id), "View it.")
}
