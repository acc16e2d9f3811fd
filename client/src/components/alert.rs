//! Inline alert banner.
//!
//! A pure projection of `Option<AlertMessage>`: `None` renders nothing.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

/// Severity of an alert; maps onto the stylesheet's `alert-*` classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
        }
    }
}

/// In-app link rendered after the alert text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertLink {
    pub href: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
    pub link: Option<AlertLink>,
}

impl AlertMessage {
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into(), link: None }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Danger, text)
    }

    #[must_use]
    pub fn with_link(mut self, href: impl Into<String>, label: impl Into<String>) -> Self {
        self.link = Some(AlertLink { href: href.into(), label: label.into() });
        self
    }

    /// Full class list for the banner element.
    pub fn class_list(&self) -> String {
        format!("alert {}", self.kind.css_class())
    }
}

#[component]
pub fn Alert(#[prop(into)] message: Signal<Option<AlertMessage>>) -> impl IntoView {
    move || {
        message.get().map(|m| {
            let class = m.class_list();
            let link = m.link.map(|link| {
                view! {
                    " "
                    <a class="alert-link" href=link.href>
                        {link.label}
                    </a>
                }
            });
            view! {
                <div class=class role="alert">
                    {m.text}
                    {link}
                </div>
            }
        })
    }
}
