//! Identifier-keyed edits on fetched opportunity lists.
//!
//! Lists are never edited by array position: a background refresh may have
//! reordered them between render and click.

#[cfg(test)]
#[path = "opportunities_test.rs"]
mod opportunities_test;

use crate::net::types::{Opportunity, OpportunityPage};
use crate::state::loadable::Loadable;

/// Remove the opportunity with `id`, preserving the order of the rest.
///
/// Returns the removed record, or `None` when the id is not present.
pub fn remove_by_id(items: &mut Vec<Opportunity>, id: i64) -> Option<Opportunity> {
    let pos = items.iter().position(|o| o.id == id)?;
    Some(items.remove(pos))
}

/// Replace the opportunity with the same id, or append it.
pub fn upsert_by_id(items: &mut Vec<Opportunity>, opportunity: Opportunity) {
    match items.iter_mut().find(|o| o.id == opportunity.id) {
        Some(slot) => *slot = opportunity,
        None => items.push(opportunity),
    }
}

/// Find an opportunity by id.
pub fn find_by_id(items: &[Opportunity], id: i64) -> Option<&Opportunity> {
    items.iter().find(|o| o.id == id)
}

/// Decode a raw search response into list state.
pub fn listing_from_search(raw: serde_json::Value) -> Loadable<OpportunityPage> {
    match serde_json::from_value::<OpportunityPage>(raw) {
        Ok(page) => Loadable::Ready(page),
        Err(e) => Loadable::Failed(format!("unexpected response: {e}")),
    }
}

/// Remove `id` from a loaded listing, keeping the page totals in step.
///
/// Returns `false` when the listing is not loaded or the id is absent.
pub fn remove_from_listing(listing: &mut Loadable<OpportunityPage>, id: i64) -> bool {
    let Some(page) = listing.ready_mut() else {
        return false;
    };
    if remove_by_id(&mut page.items, id).is_none() {
        return false;
    }
    if let Some(meta) = page.meta.as_mut() {
        meta.total_items = meta.total_items.saturating_sub(1);
    }
    true
}
