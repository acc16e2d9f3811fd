//! Add-partner form.

#[cfg(test)]
#[path = "partner_form_test.rs"]
mod partner_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::{Alert, AlertMessage};
use crate::components::form::Form;
use crate::net::types::{Partner, PartnerDraft};
use crate::routes::{ADD_OPPORTUNITY_PATH, DASHBOARD_PATH};
use crate::state::form::{FieldChange, FieldDescriptor, FormRows, FormValues, InputType};
use crate::state::session::AppContext;
use crate::util::auth::install_unauth_redirect;

const MISSING_NAME: &str = "Partner name is required.";

#[component]
pub fn AddPartnerPage(app: AppContext) -> impl IntoView {
    install_unauth_redirect(app, use_navigate());

    let values = RwSignal::new(FormValues::default());
    let alert = RwSignal::new(None::<AlertMessage>);
    let busy = RwSignal::new(false);

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
            match crate::net::api::create_partner(token.as_deref(), &draft).await {
                Ok(partner) => {
                    log::info!("created partner {}", partner.id);
                    let alert_msg = created_alert(&partner);
                    app.set_with(|s| {
                        let mut partners = s.partners.clone();
                        partners.push(partner);
                        crate::state::session::SessionPatch::partners(partners)
                    });
                    values.set(FormValues::default());
                    alert.set(Some(alert_msg));
                }
                Err(e) => {
                    log::warn!("creating partner failed: {e}");
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
            <div class="card-header">"Add Partner"</div>
            <div class="card-body">
                <a href=DASHBOARD_PATH>"Back to dashboard"</a>
                <Form
                    rows=Signal::stored(partner_rows())
                    data=values
                    on_change=on_change
                    on_submit=on_submit
                    color="info"
                    submit_label="Add Partner"
                    busy=busy
                />
                <br/>
                <Alert message=alert/>
            </div>
        </div>
    }
}

fn partner_rows() -> FormRows {
    vec![
        vec![FieldDescriptor::new("Partner Name", "name")],
        vec![
            FieldDescriptor::new("Email", "email").with_type(InputType::Email),
            FieldDescriptor::new("Phone", "phone").with_type(InputType::Tel),
        ],
        vec![FieldDescriptor::new("Website", "website").with_type(InputType::Url)],
    ]
}

fn draft_from_values(values: &FormValues) -> Result<PartnerDraft, &'static str> {
    let name = values.non_empty("name").ok_or(MISSING_NAME)?;
    Ok(PartnerDraft {
        name,
        email: values.non_empty("email"),
        phone: values.non_empty("phone"),
        website: values.non_empty("website"),
    })
}

/// Success banner pointing at the opportunity form, where the new partner
/// is now selectable.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn created_alert(partner: &Partner) -> AlertMessage {
    AlertMessage::success(format!("Added partner \"{}\".", partner.name))
        .with_link(ADD_OPPORTUNITY_PATH, "Add an opportunity for them.")
}
