//! Состояние списка заказов: сортировка, фильтр, удаление, отметка
//! "получен".
//!
//! Единственная точка входа для действий пользователя — [`dispatch`].
//! Каждое действие завершается полным пересчётом производного состояния
//! (порядок, видимость, итоги); инкрементальных правок нет.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::persistence;
use super::state::{CardState, OrderListState};
use crate::shared::storage::KeyValueStore;

/// Поле сортировки. Не сохраняется между сессиями.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    /// Исходный порядок карточек, захваченный при загрузке.
    #[default]
    Default,
    Price,
    Date,
    Received,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Default => "Default",
            SortField::Price => "Price",
            SortField::Date => "Date",
            SortField::Received => "Received",
        }
    }

    pub fn all() -> [SortField; 4] {
        [
            SortField::Default,
            SortField::Price,
            SortField::Date,
            SortField::Received,
        ]
    }
}

/// Трёхпозиционный цикл видимости. Сохраняется между сессиями как 0/1/2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    All,
    HideReceived,
    ReceivedOnly,
}

impl FilterState {
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => FilterState::HideReceived,
            2 => FilterState::ReceivedOnly,
            _ => FilterState::All,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            FilterState::All => 0,
            FilterState::HideReceived => 1,
            FilterState::ReceivedOnly => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % 3)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterState::All => "All orders",
            FilterState::HideReceived => "Hide received",
            FilterState::ReceivedOnly => "Received only",
        }
    }

    /// Видимость карточки по её текущему (живому) значению чекбокса.
    pub fn is_visible(&self, checked: bool) -> bool {
        match self {
            FilterState::All => true,
            FilterState::HideReceived => !checked,
            FilterState::ReceivedOnly => checked,
        }
    }
}

/// Действия пользователя над списком. UI только конструирует их; вся
/// логика и персистентность живут в [`dispatch`].
#[derive(Clone, Debug, PartialEq)]
pub enum OrderAction {
    ToggleReceived { order_id: String, checked: bool },
    Delete { order_id: String },
    Sort(SortField),
    CycleFilter,
}

pub fn dispatch(state: &mut OrderListState, store: &dyn KeyValueStore, action: OrderAction) {
    match action {
        OrderAction::ToggleReceived { order_id, checked } => {
            toggle_received(state, store, &order_id, checked)
        }
        OrderAction::Delete { order_id } => delete_order(state, store, &order_id),
        OrderAction::Sort(field) => toggle_sort(state, field),
        OrderAction::CycleFilter => cycle_filter(state, store),
    }
}

fn toggle_received(
    state: &mut OrderListState,
    store: &dyn KeyValueStore,
    order_id: &str,
    checked: bool,
) {
    let Some(entry) = state
        .cards
        .iter_mut()
        .find(|c| c.card.order_id == order_id)
    else {
        return;
    };
    // Чекбокс архивной карточки отключён в UI; её фиксированное состояние
    // не попадает в хранилище.
    if entry.locked() {
        return;
    }
    entry.checked = checked;
    persistence::save_received(store, order_id, checked);
}

/// Удаление окончательно для сессии: карточка уходит из реестра, id — в
/// сохранённый список. Повторное удаление того же id безвредно.
fn delete_order(state: &mut OrderListState, store: &dyn KeyValueStore, order_id: &str) {
    persistence::mark_deleted(store, order_id);
    state.cards.retain(|c| c.card.order_id != order_id);
}

/// Правило переключения: клик по активному полю меняет направление, по
/// другому полю — делает его активным по возрастанию, по "Default" —
/// сбрасывает сортировку.
pub fn toggle_sort(state: &mut OrderListState, field: SortField) {
    if field == SortField::Default {
        state.sort_field = SortField::Default;
        state.sort_ascending = true;
    } else if state.sort_field == field {
        state.sort_ascending = !state.sort_ascending;
    } else {
        state.sort_field = field;
        state.sort_ascending = true;
    }
    resort(state);
}

fn cycle_filter(state: &mut OrderListState, store: &dyn KeyValueStore) {
    state.filter = state.filter.next();
    persistence::save_filter(store, state.filter);
}

/// Переставляет карточки реестра по текущему состоянию сортировки.
/// Чистая перестановка: данные не пересчитываются, фильтр не затрагивается.
fn resort(state: &mut OrderListState) {
    match state.sort_field {
        SortField::Default => {
            // Буквально исходная последовательность, не выводится из полей.
            let index: HashMap<String, usize> = state
                .original_order
                .iter()
                .enumerate()
                .map(|(i, id)| (id.clone(), i))
                .collect();
            state
                .cards
                .sort_by_key(|c| index.get(&c.card.order_id).copied().unwrap_or(usize::MAX));
        }
        SortField::Price => sort_cards(state, |a, b| {
            a.card
                .price_value()
                .partial_cmp(&b.card.price_value())
                .unwrap_or(Ordering::Equal)
        }),
        SortField::Date => sort_cards(state, |a, b| a.card.date_key().cmp(b.card.date_key())),
        SortField::Received => sort_cards(state, |a, b| {
            received_rank(a).cmp(&received_rank(b))
        }),
    }
}

/// Полученные раньше неполученных при сортировке по возрастанию.
fn received_rank(entry: &CardState) -> u8 {
    if entry.checked {
        0
    } else {
        1
    }
}

fn sort_cards(
    state: &mut OrderListState,
    compare: impl Fn(&CardState, &CardState) -> Ordering,
) {
    let ascending = state.sort_ascending;
    state.cards.sort_by(|a, b| {
        let ord = compare(a, b);
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Индикатор направления для заголовка кнопки сортировки
pub fn sort_indicator(current: SortField, field: SortField, ascending: bool) -> &'static str {
    if current == field && field != SortField::Default {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::super::persistence;
    use super::super::state::OrderListState;
    use super::super::summary;
    use super::*;
    use crate::shared::storage::{KeyValueStore, MemoryStore};
    use contracts::orders::OrderCard;

    fn card(id: &str, price: &str, date: Option<&str>, archived: bool) -> OrderCard {
        OrderCard {
            order_id: id.to_string(),
            order_number: id.to_string(),
            price: price.to_string(),
            delivery_date: date.map(str::to_string),
            status: "In transit".to_string(),
            delivery_info: String::new(),
            description: String::new(),
            delayed: false,
            image: None,
            archived,
        }
    }

    fn ids(state: &OrderListState) -> Vec<&str> {
        state.cards.iter().map(|c| c.card.order_id.as_str()).collect()
    }

    fn visible_ids(state: &OrderListState) -> Vec<&str> {
        state
            .cards
            .iter()
            .filter(|c| state.filter.is_visible(c.checked))
            .map(|c| c.card.order_id.as_str())
            .collect()
    }

    fn load(cards: Vec<OrderCard>, store: &dyn KeyValueStore) -> OrderListState {
        OrderListState::load(cards, store)
    }

    #[test]
    fn sort_by_price_with_non_numeric_as_zero() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![
                card("a", "5.00", None, false),
                card("b", "", None, false),
                card("c", "2.50", None, false),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        assert_eq!(ids(&state), vec!["b", "c", "a"]);

        // second click on the active field flips the direction
        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        assert!(!state.sort_ascending);
        assert_eq!(ids(&state), vec!["a", "c", "b"]);
    }

    #[test]
    fn sort_by_date_puts_missing_dates_last_ascending() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![
                card("a", "1", None, false),
                card("b", "1", Some("2026-02-01"), false),
                card("c", "1", Some("2026-01-15"), false),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Date));
        assert_eq!(ids(&state), vec!["c", "b", "a"]);

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Date));
        assert_eq!(ids(&state), vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_by_received_checked_first_ascending() {
        let store = MemoryStore::default();
        persistence::save_received(&store, "b", true);
        let mut state = load(
            vec![
                card("a", "1", None, false),
                card("b", "1", None, false),
                card("c", "1", None, true),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Received));
        // stable: checked keep their relative order (b before c), unchecked after
        assert_eq!(ids(&state), vec!["b", "c", "a"]);
    }

    #[test]
    fn direction_round_trip_restores_order() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![
                card("a", "3.00", None, false),
                card("b", "1.00", None, false),
                card("c", "2.00", None, false),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        let before: Vec<String> = ids(&state).iter().map(|s| s.to_string()).collect();

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        assert_eq!(ids(&state), before);
    }

    #[test]
    fn default_restores_literal_original_order() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![
                card("a", "3.00", None, false),
                card("b", "1.00", None, false),
                card("c", "2.00", None, false),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        assert_eq!(ids(&state), vec!["b", "c", "a"]);

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Default));
        assert_eq!(state.sort_field, SortField::Default);
        assert_eq!(ids(&state), vec!["a", "b", "c"]);
    }

    #[test]
    fn default_order_excludes_deleted_members() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![
                card("a", "3.00", None, false),
                card("b", "1.00", None, false),
                card("c", "2.00", None, false),
            ],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        dispatch(
            &mut state,
            &store,
            OrderAction::Delete {
                order_id: "b".to_string(),
            },
        );
        dispatch(&mut state, &store, OrderAction::Sort(SortField::Default));
        assert_eq!(ids(&state), vec!["a", "c"]);
    }

    #[test]
    fn switching_field_resets_to_ascending() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![card("a", "1", None, false), card("b", "2", None, false)],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        dispatch(&mut state, &store, OrderAction::Sort(SortField::Price));
        assert!(!state.sort_ascending);

        dispatch(&mut state, &store, OrderAction::Sort(SortField::Date));
        assert_eq!(state.sort_field, SortField::Date);
        assert!(state.sort_ascending);
    }

    #[test]
    fn filter_cycle_returns_to_all_after_three_toggles() {
        let store = MemoryStore::default();
        let mut state = load(vec![card("a", "1", None, false)], &store);
        assert_eq!(state.filter, FilterState::All);

        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(state.filter, FilterState::HideReceived);
        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(state.filter, FilterState::ReceivedOnly);
        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(state.filter, FilterState::All);
    }

    #[test]
    fn filter_visibility_per_state() {
        let store = MemoryStore::default();
        persistence::save_received(&store, "a", true);
        persistence::save_received(&store, "c", true);
        let mut state = load(
            vec![
                card("a", "1", None, false),
                card("b", "1", None, false),
                card("c", "1", None, false),
            ],
            &store,
        );

        assert_eq!(visible_ids(&state), vec!["a", "b", "c"]);

        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(visible_ids(&state), vec!["b"]);

        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(visible_ids(&state), vec!["a", "c"]);
    }

    #[test]
    fn filter_application_is_idempotent() {
        let store = MemoryStore::default();
        persistence::save_received(&store, "a", true);
        let state = load(
            vec![card("a", "1", None, false), card("b", "1", None, false)],
            &store,
        );

        let first: Vec<String> = visible_ids(&state).iter().map(|s| s.to_string()).collect();
        assert_eq!(visible_ids(&state), first);
    }

    #[test]
    fn filter_persists_across_reload() {
        let store = MemoryStore::default();
        let mut state = load(vec![card("a", "1", None, false)], &store);
        dispatch(&mut state, &store, OrderAction::CycleFilter);
        dispatch(&mut state, &store, OrderAction::CycleFilter);

        let reloaded = load(vec![card("a", "1", None, false)], &store);
        assert_eq!(reloaded.filter, FilterState::ReceivedOnly);
    }

    #[test]
    fn toggle_received_persists_and_survives_reload() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![card("a", "1", None, false), card("b", "1", None, false)],
            &store,
        );

        dispatch(
            &mut state,
            &store,
            OrderAction::ToggleReceived {
                order_id: "a".to_string(),
                checked: true,
            },
        );
        assert!(state.cards[0].checked);

        let reloaded = load(
            vec![card("a", "1", None, false), card("b", "1", None, false)],
            &store,
        );
        assert!(reloaded.cards[0].checked);
        assert!(!reloaded.cards[1].checked);
    }

    #[test]
    fn locked_card_ignores_toggle_and_writes_nothing() {
        let store = MemoryStore::default();
        let mut state = load(vec![card("a", "1", None, true)], &store);
        assert!(state.cards[0].checked);

        dispatch(
            &mut state,
            &store,
            OrderAction::ToggleReceived {
                order_id: "a".to_string(),
                checked: false,
            },
        );
        assert!(state.cards[0].checked);
        assert_eq!(store.get("order_received_a"), None);
    }

    #[test]
    fn locked_cards_participate_in_filtering() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![card("a", "1", None, true), card("b", "1", None, false)],
            &store,
        );

        dispatch(&mut state, &store, OrderAction::CycleFilter); // hide received
        assert_eq!(visible_ids(&state), vec!["b"]);

        dispatch(&mut state, &store, OrderAction::CycleFilter); // received only
        assert_eq!(visible_ids(&state), vec!["a"]);
    }

    #[test]
    fn deleted_card_never_returns_after_reload() {
        let store = MemoryStore::default();
        let mut state = load(
            vec![card("a", "1", None, false), card("b", "1", None, false)],
            &store,
        );

        dispatch(
            &mut state,
            &store,
            OrderAction::Delete {
                order_id: "b".to_string(),
            },
        );
        assert_eq!(ids(&state), vec!["a"]);

        // deleting again is harmless
        dispatch(
            &mut state,
            &store,
            OrderAction::Delete {
                order_id: "b".to_string(),
            },
        );
        assert_eq!(persistence::load_deleted_set(&store).len(), 1);

        let reloaded = load(
            vec![card("a", "1", None, false), card("b", "1", None, false)],
            &store,
        );
        assert_eq!(ids(&reloaded), vec!["a"]);
    }

    #[test]
    fn summary_matches_visible_sum_after_any_action() {
        let store = MemoryStore::default();
        persistence::save_received(&store, "b", true);
        let mut state = load(
            vec![
                card("a", "12.50", Some("2026-01-01"), false),
                card("b", "7.30", None, false),
                card("c", "bad", None, true),
            ],
            &store,
        );

        let actions = [
            OrderAction::Sort(SortField::Price),
            OrderAction::CycleFilter,
            OrderAction::ToggleReceived {
                order_id: "a".to_string(),
                checked: true,
            },
            OrderAction::CycleFilter,
            OrderAction::Delete {
                order_id: "b".to_string(),
            },
            OrderAction::Sort(SortField::Default),
        ];

        for action in actions {
            dispatch(&mut state, &store, action);
            let total = summary::recompute(&state.cards, state.filter);
            let expected: f64 = state
                .cards
                .iter()
                .filter(|c| state.filter.is_visible(c.checked))
                .map(|c| c.card.price_value())
                .sum();
            assert_eq!(total.total, expected);
            assert_eq!(total.count, visible_ids(&state).len());
        }
    }

    #[test]
    fn scenario_from_two_orders_to_reload() {
        let store = MemoryStore::default();
        persistence::save_received(&store, "2", true);
        let cards = || vec![card("1", "12.50", None, false), card("2", "7.30", None, false)];

        let mut state = load(cards(), &store);
        let initial = summary::recompute(&state.cards, state.filter);
        assert_eq!(initial.count, 2);
        assert_eq!(initial.total_formatted(), "€ 19,80");

        dispatch(&mut state, &store, OrderAction::CycleFilter);
        assert_eq!(state.filter, FilterState::HideReceived);
        assert_eq!(visible_ids(&state), vec!["1"]);
        let filtered = summary::recompute(&state.cards, state.filter);
        assert_eq!(filtered.count, 1);
        assert_eq!(filtered.total_formatted(), "€ 12,50");

        dispatch(
            &mut state,
            &store,
            OrderAction::Delete {
                order_id: "2".to_string(),
            },
        );
        let deleted = persistence::load_deleted_set(&store);
        assert_eq!(deleted.len(), 1);
        assert!(deleted.contains("2"));

        let reloaded = load(cards(), &store);
        assert_eq!(ids(&reloaded), vec!["1"]);
    }

    #[test]
    fn sort_indicator_marks_only_active_field() {
        assert_eq!(
            sort_indicator(SortField::Price, SortField::Price, true),
            " ▲"
        );
        assert_eq!(
            sort_indicator(SortField::Price, SortField::Price, false),
            " ▼"
        );
        assert_eq!(sort_indicator(SortField::Price, SortField::Date, true), "");
        assert_eq!(
            sort_indicator(SortField::Default, SortField::Default, true),
            ""
        );
    }
}
