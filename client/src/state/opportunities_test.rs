use super::*;
use crate::net::types::PageMeta;

fn opp(id: i64) -> Opportunity {
    Opportunity {
        id,
        name: format!("opp-{id}"),
        partner_name: "P".to_owned(),
        description: None,
        address: None,
        frequency: None,
        start_date: None,
        end_date: None,
        tag_string: None,
    }
}

fn ids(items: &[Opportunity]) -> Vec<i64> {
    items.iter().map(|o| o.id).collect()
}

// =============================================================
// remove_by_id
// =============================================================

#[test]
fn remove_by_id_drops_one_and_keeps_order() {
    let mut items = vec![opp(10), opp(20), opp(30), opp(40)];
    let removed = remove_by_id(&mut items, 20);
    assert_eq!(removed.map(|o| o.id), Some(20));
    assert_eq!(ids(&items), vec![10, 30, 40]);
}

#[test]
fn remove_by_id_handles_each_position() {
    for target in [1, 2, 3] {
        let mut items = vec![opp(1), opp(2), opp(3)];
        remove_by_id(&mut items, target);
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|o| o.id != target));
        assert!(items.windows(2).all(|w| w[0].id < w[1].id));
    }
}

#[test]
fn remove_by_id_unknown_id_is_noop() {
    let mut items = vec![opp(1), opp(2)];
    assert!(remove_by_id(&mut items, 99).is_none());
    assert_eq!(ids(&items), vec![1, 2]);
}

#[test]
fn remove_by_id_after_reorder_removes_correct_record() {
    let mut items = vec![opp(3), opp(1), opp(2)];
    remove_by_id(&mut items, 1);
    assert_eq!(ids(&items), vec![3, 2]);
}

// =============================================================
// upsert_by_id / find_by_id
// =============================================================

#[test]
fn upsert_by_id_replaces_existing() {
    let mut items = vec![opp(1), opp(2)];
    let mut edited = opp(2);
    edited.name = "renamed".to_owned();
    upsert_by_id(&mut items, edited);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].name, "renamed");
}

#[test]
fn upsert_by_id_appends_new() {
    let mut items = vec![opp(1)];
    upsert_by_id(&mut items, opp(5));
    assert_eq!(ids(&items), vec![1, 5]);
}

#[test]
fn find_by_id_returns_match() {
    let items = vec![opp(1), opp(2)];
    assert_eq!(find_by_id(&items, 2).map(|o| o.id), Some(2));
    assert!(find_by_id(&items, 3).is_none());
}

// =============================================================
// listing_from_search / remove_from_listing
// =============================================================

#[test]
fn listing_from_search_decodes_items() {
    let raw = serde_json::json!({ "items": [{ "id": 1, "name": "X", "partner_name": "P" }] });
    let listing = listing_from_search(raw);
    let Loadable::Ready(page) = listing else { panic!("expected a ready listing") };
    assert_eq!(ids(&page.items), vec![1]);
}

#[test]
fn listing_from_search_rejects_wrong_shape() {
    let listing = listing_from_search(serde_json::json!({ "results": [] }));
    assert!(matches!(listing, Loadable::Failed(ref e) if e.starts_with("unexpected response")));
}

#[test]
fn remove_from_listing_updates_items_and_total() {
    let mut listing = Loadable::Ready(OpportunityPage {
        items: vec![opp(1), opp(2)],
        meta: Some(PageMeta { page: 1, per_page: 10, total_pages: 1, total_items: 2 }),
    });
    assert!(remove_from_listing(&mut listing, 1));
    let Loadable::Ready(page) = listing else { panic!("expected a ready listing") };
    assert_eq!(ids(&page.items), vec![2]);
    assert_eq!(page.meta.as_ref().map(|m| m.total_items), Some(1));
}

#[test]
fn remove_from_listing_ignores_unloaded_or_missing() {
    let mut loading: Loadable<OpportunityPage> = Loadable::Loading;
    assert!(!remove_from_listing(&mut loading, 1));

    let mut listing = Loadable::Ready(OpportunityPage { items: vec![opp(1)], meta: None });
    assert!(!remove_from_listing(&mut listing, 7));
    assert!(matches!(listing, Loadable::Ready(ref p) if p.items.len() == 1));
}
