//! Persisted user decisions: the deleted set, per-order received flags and
//! the filter state.
//!
//! Every read substitutes a documented default on absent or malformed
//! values; every write is synchronous and best-effort. A fresh store means
//! "no deletions, all unchecked, filter = show all".

use std::collections::HashSet;

use super::engine::FilterState;
use crate::shared::storage::KeyValueStore;

const DELETED_KEY: &str = "orders_deleted";
const FILTER_KEY: &str = "orders_filter";

fn received_key(order_id: &str) -> String {
    format!("order_received_{}", order_id)
}

/// Deserializes the persisted deleted set; any failure yields the empty set.
pub fn load_deleted_set(store: &dyn KeyValueStore) -> HashSet<String> {
    store
        .get(DELETED_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .map(|ids| ids.into_iter().collect())
        .unwrap_or_default()
}

/// Appends an id to the persisted deleted set. Idempotent: an id already in
/// the set is not appended again, so duplicates never accumulate.
pub fn mark_deleted(store: &dyn KeyValueStore, order_id: &str) {
    let mut ids: Vec<String> = store
        .get(DELETED_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    if !ids.iter().any(|id| id == order_id) {
        ids.push(order_id.to_string());
    }
    if let Ok(raw) = serde_json::to_string(&ids) {
        store.set(DELETED_KEY, &raw);
    }
}

/// Received flag for a togglable order; absent means unchecked.
pub fn load_received(store: &dyn KeyValueStore, order_id: &str) -> bool {
    store
        .get(&received_key(order_id))
        .map(|v| v == "true")
        .unwrap_or(false)
}

pub fn save_received(store: &dyn KeyValueStore, order_id: &str, checked: bool) {
    store.set(
        &received_key(order_id),
        if checked { "true" } else { "false" },
    );
}

/// Persisted filter state; absent or garbage falls back to "show all".
pub fn load_filter(store: &dyn KeyValueStore) -> FilterState {
    store
        .get(FILTER_KEY)
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(FilterState::from_index)
        .unwrap_or_default()
}

pub fn save_filter(store: &dyn KeyValueStore, filter: FilterState) {
    store.set(FILTER_KEY, &filter.index().to_string());
}
