use super::*;
use crate::state::session::SessionPatch;

#[test]
fn should_redirect_unauth_when_token_missing() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_signed_in() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::signed_in("T", "alice"));
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_after_sign_out() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::signed_in("T", "alice"));
    state.merge(SessionPatch::signed_out());
    assert!(should_redirect_unauth(&state));
}
