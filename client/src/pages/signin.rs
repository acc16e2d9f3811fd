//! Sign-in page exchanging username/password for an API token.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

use crate::components::alert::{Alert, AlertMessage};
use crate::components::form::Form;
use crate::net::error::ApiError;
use crate::routes::DASHBOARD_SEARCH_PATH;
use crate::state::form::{FieldChange, FieldDescriptor, FormRows, FormValues, InputType};
use crate::state::session::{AppContext, SessionPatch};

const MISSING_CREDENTIALS: &str = "Enter both username and password.";

#[component]
pub fn SigninPage(app: AppContext) -> impl IntoView {
    let values = RwSignal::new(FormValues::default());
    let alert = RwSignal::new(None::<AlertMessage>);
    let busy = RwSignal::new(false);

    if app.token_untracked().is_some() {
        alert.set(Some(signed_in_alert()));
    }

    let on_change = Callback::new(move |change: FieldChange| values.update(|v| v.apply(change)));

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let (username, password) = match validate_credentials(&values.get_untracked()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                alert.set(Some(AlertMessage::danger(msg)));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::request_token(&username, &password).await;
            if let Err(e) = &result {
                log::warn!("sign-in for {username} failed: {e}");
            }
            let (patch, message) = signin_outcome(&username, result);
            if let Some(patch) = patch {
                app.set(patch);
            }
            alert.set(Some(message));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            busy.set(false);
        }
    });

    view! {
        <div class="card">
            <div class="card-header">"Welcome to Volunteer Force!"</div>
            <div class="card-body">
                <h2>"Sign In"</h2>
                <p>"Sign in below to access your dashboard."</p>
                <Form
                    rows=Signal::stored(signin_rows())
                    data=values
                    on_change=on_change
                    on_submit=on_submit
                    color="info"
                    submit_label="Sign In"
                    busy=busy
                />
                <br/>
                <Alert message=alert/>
            </div>
        </div>
    }
}

fn signin_rows() -> FormRows {
    vec![
        vec![FieldDescriptor::new("Username", "username")],
        vec![FieldDescriptor::new("Password", "password").with_type(InputType::Password)],
    ]
}

/// Trim the username and require both fields.
fn validate_credentials(values: &FormValues) -> Result<(String, String), &'static str> {
    let username = values.get("username").trim();
    let password = values.get("password");
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

fn signed_in_alert() -> AlertMessage {
    AlertMessage::success("You signed in!").with_link(DASHBOARD_SEARCH_PATH, "Go to the dashboard.")
}

/// Map a token request result onto the session change and banner to show.
///
/// A failure leaves the session untouched.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn signin_outcome(username: &str, result: Result<String, ApiError>) -> (Option<SessionPatch>, AlertMessage) {
    match result {
        Ok(token) => (Some(SessionPatch::signed_in(token, username)), signed_in_alert()),
        Err(e) => (None, AlertMessage::danger(e.to_string())),
    }
}
