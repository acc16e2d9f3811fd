use super::*;

fn opportunity(id: i64, name: &str) -> Opportunity {
    Opportunity {
        id,
        name: name.to_owned(),
        partner_name: "Partner".to_owned(),
        description: None,
        address: None,
        frequency: None,
        start_date: None,
        end_date: None,
        tag_string: None,
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_starts_empty() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.opportunities.is_empty());
    assert!(state.my_opportunities.is_empty());
    assert!(state.partners.is_empty());
    assert!(!state.is_signed_in());
}

#[test]
fn merge_replaces_only_present_fields() {
    let mut state = SessionState { opportunities: vec![opportunity(1, "A")], ..SessionState::default() };
    state.merge(SessionPatch { token: Some(Some("T".to_owned())), ..SessionPatch::default() });
    assert_eq!(state.token.as_deref(), Some("T"));
    assert_eq!(state.opportunities, vec![opportunity(1, "A")]);
}

#[test]
fn merge_sequence_later_patch_wins() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::signed_in("first", "alice"));
    state.merge(SessionPatch::opportunities(vec![opportunity(1, "A")]));
    state.merge(SessionPatch { token: Some(Some("second".to_owned())), ..SessionPatch::default() });
    state.merge(SessionPatch::opportunities(vec![opportunity(2, "B")]));

    assert_eq!(state.token.as_deref(), Some("second"));
    assert_eq!(state.display_name(), "alice");
    assert_eq!(state.opportunities, vec![opportunity(2, "B")]);
}

#[test]
fn merge_empty_patch_is_noop() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::signed_in("T", "alice"));
    let before = state.clone();
    state.merge(SessionPatch::default());
    assert_eq!(state, before);
}

#[test]
fn signed_out_clears_token_and_user_but_keeps_lists() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::signed_in("T", "alice"));
    let saved = state.with_saved_opportunity(opportunity(4, "Mine"));
    state.merge(saved);
    state.merge(SessionPatch::signed_out());
    assert!(!state.is_signed_in());
    assert!(state.user.is_none());
    assert_eq!(state.my_opportunities.len(), 1);
}

#[test]
fn display_name_falls_back_without_user() {
    assert_eq!(SessionState::default().display_name(), "volunteer");
}

#[test]
fn without_opportunity_clears_every_cached_list() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::opportunities(vec![opportunity(1, "A"), opportunity(2, "B")]));
    let saved = state.with_saved_opportunity(opportunity(2, "B"));
    state.merge(saved);

    let patch = state.without_opportunity(2);
    state.merge(patch);
    assert_eq!(state.opportunities, vec![opportunity(1, "A")]);
    assert!(state.my_opportunities.is_empty());
}

#[test]
fn without_unknown_opportunity_keeps_lists() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::opportunities(vec![opportunity(1, "A")]));
    let patch = state.without_opportunity(9);
    state.merge(patch);
    assert_eq!(state.opportunities, vec![opportunity(1, "A")]);
}

#[test]
fn with_saved_opportunity_replaces_and_appends() {
    let mut state = SessionState::default();
    state.merge(SessionPatch::opportunities(vec![opportunity(1, "A"), opportunity(2, "B")]));

    let patch = state.with_saved_opportunity(opportunity(2, "B renamed"));
    state.merge(patch);
    assert_eq!(state.opportunities, vec![opportunity(1, "A"), opportunity(2, "B renamed")]);
    assert_eq!(state.my_opportunities, vec![opportunity(2, "B renamed")]);

    let patch = state.with_saved_opportunity(opportunity(3, "C"));
    state.merge(patch);
    assert_eq!(state.opportunities.len(), 3);
    assert_eq!(state.my_opportunities.len(), 2);
}

// =============================================================
// SessionPatch
// =============================================================

#[test]
fn patch_default_is_empty() {
    assert!(SessionPatch::default().is_empty());
    assert!(!SessionPatch::signed_out().is_empty());
}

#[test]
fn signed_in_patch_sets_token_and_user() {
    let patch = SessionPatch::signed_in("T", "jordan");
    assert_eq!(patch.token, Some(Some("T".to_owned())));
    assert_eq!(patch.user, Some(Some(SessionUser { username: "jordan".to_owned() })));
    assert!(patch.partners.is_none());
}

// =============================================================
// AppContext
// =============================================================

#[test]
fn app_context_set_then_sees_merged_state() {
    Owner::new().with(|| {
        let app = AppContext::new();
        let mut seen = None;
        app.set_then(SessionPatch::signed_in("T", "alice"), |s| seen = s.token.clone());
        assert_eq!(seen.as_deref(), Some("T"));
        assert_eq!(app.token_untracked().as_deref(), Some("T"));
    });
}

#[test]
fn app_context_set_with_reads_current_state() {
    Owner::new().with(|| {
        let app = AppContext::new();
        app.set(SessionPatch::opportunities(vec![opportunity(1, "A"), opportunity(2, "B")]));
        app.set_with(|s| s.without_opportunity(1));
        assert_eq!(app.state().get_untracked().opportunities, vec![opportunity(2, "B")]);
    });
}

#[test]
fn app_context_copies_share_state() {
    Owner::new().with(|| {
        let app = AppContext::new();
        let other = app;
        other.set(SessionPatch::partners(vec![Partner {
            id: 1,
            name: "Parks".to_owned(),
            email: None,
            phone: None,
            website: None,
        }]));
        assert_eq!(app.state().get_untracked().partners.len(), 1);
    });
}
