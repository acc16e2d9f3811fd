use super::*;

// =============================================================
// Opportunity
// =============================================================

#[test]
fn opportunity_decodes_minimal_record() {
    let raw = serde_json::json!({ "id": 3, "name": "Trail cleanup", "partner_name": "Parks" });
    let opp: Opportunity = serde_json::from_value(raw).unwrap();
    assert_eq!(opp.id, 3);
    assert_eq!(opp.name, "Trail cleanup");
    assert_eq!(opp.partner_name, "Parks");
    assert!(opp.description.is_none());
    assert!(opp.frequency.is_none());
}

#[test]
fn opportunity_ignores_unknown_fields() {
    let raw = serde_json::json!({
        "id": 1,
        "name": "Food bank",
        "partner_name": "Larimer Food",
        "_links": { "self": "/api/opportunities/1" },
        "shift_hours": 4
    });
    let opp: Opportunity = serde_json::from_value(raw).unwrap();
    assert_eq!(opp.id, 1);
}

#[test]
fn opportunity_missing_partner_name_defaults_empty() {
    let raw = serde_json::json!({ "id": 9, "name": "X" });
    let opp: Opportunity = serde_json::from_value(raw).unwrap();
    assert_eq!(opp.partner_name, "");
}

// =============================================================
// Collection
// =============================================================

#[test]
fn collection_decodes_meta_when_present() {
    let raw = serde_json::json!({
        "items": [{ "id": 1, "name": "X", "partner_name": "P" }],
        "_meta": { "page": 1, "per_page": 10, "total_pages": 3, "total_items": 25 }
    });
    let page: OpportunityPage = serde_json::from_value(raw).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.meta,
        Some(PageMeta { page: 1, per_page: 10, total_pages: 3, total_items: 25 })
    );
}

#[test]
fn collection_meta_is_optional() {
    let raw = serde_json::json!({ "items": [] });
    let page: Collection<Partner> = serde_json::from_value(raw).unwrap();
    assert!(page.items.is_empty());
    assert!(page.meta.is_none());
}

#[test]
fn collection_default_is_empty() {
    let page = OpportunityPage::default();
    assert!(page.items.is_empty());
    assert!(page.meta.is_none());
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn opportunity_draft_skips_empty_optionals() {
    let draft = OpportunityDraft {
        name: "Soup kitchen".to_owned(),
        partner_name: "Shelter".to_owned(),
        frequency: Some("Weekly".to_owned()),
        ..OpportunityDraft::default()
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({ "name": "Soup kitchen", "partner_name": "Shelter", "frequency": "Weekly" })
    );
}

#[test]
fn partner_draft_serializes_name_only() {
    let draft = PartnerDraft { name: "Code for FoCo".to_owned(), ..PartnerDraft::default() };
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({ "name": "Code for FoCo" }));
}

// =============================================================
// Small responses
// =============================================================

#[test]
fn token_response_decodes() {
    let token: TokenResponse = serde_json::from_str(r#"{"token":"T"}"#).unwrap();
    assert_eq!(token.token, "T");
}

#[test]
fn frequency_list_defaults_when_key_missing() {
    let list: FrequencyList = serde_json::from_str("{}").unwrap();
    assert!(list.frequencies.is_empty());
}
