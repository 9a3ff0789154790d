use std::collections::HashSet;

use contracts::orders::OrderCard;
use leptos::prelude::*;

use super::engine::{FilterState, SortField};
use super::persistence;
use crate::shared::storage::KeyValueStore;

/// Live entry of the card registry: contract data plus the mutable
/// received flag.
#[derive(Clone, Debug, PartialEq)]
pub struct CardState {
    pub card: OrderCard,
    pub checked: bool,
}

impl CardState {
    /// Archived cards carry a fixed checked=true and accept no toggles.
    pub fn locked(&self) -> bool {
        self.card.archived
    }
}

#[derive(Clone, Debug)]
pub struct OrderListState {
    /// Live registry in current display order.
    pub cards: Vec<CardState>,
    /// Id sequence captured once at load; target of the Default sort.
    pub original_order: Vec<String>,
    /// Not persisted, resets on each load.
    pub sort_field: SortField,
    pub sort_ascending: bool,
    pub filter: FilterState,
}

impl OrderListState {
    /// Startup sequence: drop previously deleted cards, restore received
    /// flags, restore the persisted filter. Archived cards are always
    /// checked and never read from the store. Duplicate ids keep the first
    /// occurrence only.
    pub fn load(cards: Vec<OrderCard>, store: &dyn KeyValueStore) -> Self {
        let deleted = persistence::load_deleted_set(store);
        let mut seen = HashSet::new();
        let mut live = Vec::new();
        for card in cards {
            if deleted.contains(&card.order_id) {
                continue;
            }
            if !seen.insert(card.order_id.clone()) {
                continue;
            }
            let checked = if card.archived {
                true
            } else {
                persistence::load_received(store, &card.order_id)
            };
            live.push(CardState { card, checked });
        }
        let original_order = live.iter().map(|c| c.card.order_id.clone()).collect();
        Self {
            cards: live,
            original_order,
            sort_field: SortField::Default,
            sort_ascending: true,
            filter: persistence::load_filter(store),
        }
    }
}

/// Create state signal
pub fn create_state(cards: Vec<OrderCard>, store: &dyn KeyValueStore) -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::load(cards, store))
}
