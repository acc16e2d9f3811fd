//! Shared session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` owns one `AppContext` and hands it to every routed page.
//! Pages keep their own data in local signals and only go through
//! `AppContext::set` for state that must survive navigation (auth token,
//! signed-in user, cached partner list).
//!
//! DESIGN
//! ======
//! `SessionPatch` is the typed "partial state": each `Some` field replaces
//! the stored value, each `None` leaves it alone. Merges are shallow and the
//! later patch wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Opportunity, Partner};
use crate::state::opportunities::{remove_by_id, upsert_by_id};

/// The user who signed in during this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
}

/// State that outlives any single page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// API token returned by `POST /api/token/auth`.
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    /// Last opportunity list published by a page.
    pub opportunities: Vec<Opportunity>,
    /// Opportunities created or edited by this user during the session.
    pub my_opportunities: Vec<Opportunity>,
    /// Partner list, fetched once and reused by the opportunity forms.
    pub partners: Vec<Partner>,
}

/// A shallow update to `SessionState`.
///
/// `token` and `user` are doubly optional so a patch can clear them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionPatch {
    pub token: Option<Option<String>>,
    pub user: Option<Option<SessionUser>>,
    pub opportunities: Option<Vec<Opportunity>>,
    pub my_opportunities: Option<Vec<Opportunity>>,
    pub partners: Option<Vec<Partner>>,
}

impl SessionPatch {
    /// Record a successful sign-in.
    pub fn signed_in(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: Some(Some(token.into())),
            user: Some(Some(SessionUser { username: username.into() })),
            ..Self::default()
        }
    }

    /// Forget the token and user; cached lists are kept.
    pub fn signed_out() -> Self {
        Self { token: Some(None), user: Some(None), ..Self::default() }
    }

    pub fn partners(partners: Vec<Partner>) -> Self {
        Self { partners: Some(partners), ..Self::default() }
    }

    pub fn opportunities(opportunities: Vec<Opportunity>) -> Self {
        Self { opportunities: Some(opportunities), ..Self::default() }
    }

    /// True when applying this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl SessionState {
    /// Apply `patch` on top of the current state.
    pub fn merge(&mut self, patch: SessionPatch) {
        let SessionPatch { token, user, opportunities, my_opportunities, partners } = patch;
        if let Some(token) = token {
            self.token = token;
        }
        if let Some(user) = user {
            self.user = user;
        }
        if let Some(opportunities) = opportunities {
            self.opportunities = opportunities;
        }
        if let Some(my_opportunities) = my_opportunities {
            self.my_opportunities = my_opportunities;
        }
        if let Some(partners) = partners {
            self.partners = partners;
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    /// Display name for greetings; falls back when nobody is signed in.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("volunteer", |u| u.username.as_str())
    }

    /// Patch dropping opportunity `id` from every cached list.
    pub fn without_opportunity(&self, id: i64) -> SessionPatch {
        let mut opportunities = self.opportunities.clone();
        let mut my_opportunities = self.my_opportunities.clone();
        remove_by_id(&mut opportunities, id);
        remove_by_id(&mut my_opportunities, id);
        SessionPatch {
            opportunities: Some(opportunities),
            my_opportunities: Some(my_opportunities),
            ..SessionPatch::default()
        }
    }

    /// Patch storing a created or edited opportunity in every cached list.
    pub fn with_saved_opportunity(&self, opportunity: Opportunity) -> SessionPatch {
        let mut opportunities = self.opportunities.clone();
        let mut my_opportunities = self.my_opportunities.clone();
        upsert_by_id(&mut opportunities, opportunity.clone());
        upsert_by_id(&mut my_opportunities, opportunity);
        SessionPatch {
            opportunities: Some(opportunities),
            my_opportunities: Some(my_opportunities),
            ..SessionPatch::default()
        }
    }
}

/// Handle to the shared session, owned by the root component.
///
/// `Copy` so it can move into any number of closures; all copies point at
/// the same signal.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    state: RwSignal<SessionState>,
}

impl AppContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Reactive read access; tracked when called inside an effect or view.
    pub fn state(self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current token, without subscribing the caller.
    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Merge `patch` into the shared state.
    pub fn set(self, patch: SessionPatch) {
        self.set_then(patch, |_| {});
    }

    /// Build a patch from the current state and merge it.
    pub fn set_with(self, build: impl FnOnce(&SessionState) -> SessionPatch) {
        let patch = self.state.with_untracked(build);
        self.set(patch);
    }

    /// Merge `patch`, then run `callback` with the merged state.
    ///
    /// The signal notifies subscribers before `callback` runs, so any
    /// re-render it triggers is already scheduled.
    pub fn set_then(self, patch: SessionPatch, callback: impl FnOnce(&SessionState)) {
        if patch.is_empty() {
            self.state.with_untracked(|s| callback(s));
            return;
        }
        self.state.update(|s| s.merge(patch));
        self.state.with_untracked(|s| callback(s));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
