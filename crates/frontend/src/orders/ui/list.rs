use leptos::prelude::*;

use super::card::OrderCardView;
use crate::orders::data;
use crate::orders::engine::{self, OrderAction, SortField};
use crate::orders::state::create_state;
use crate::orders::summary;
use crate::shared::icons::icon;
use crate::shared::storage::LocalStorage;

/// Страница списка заказов: панель сортировки и фильтра, карточки, итоги.
///
/// Весь видимый результат выводится из одного сигнала состояния: после
/// любого действия порядок, видимость и итоги пересчитываются целиком.
#[component]
pub fn OrderListPage() -> impl IntoView {
    let store = LocalStorage;
    let state = create_state(data::read_embedded_orders(), &store);

    let dispatch = Callback::new(move |action: OrderAction| {
        state.update(|s| engine::dispatch(s, &store, action));
    });

    // Единственный источник итогов: шапка и подвал читают один Memo и не
    // могут разойтись.
    let totals = Memo::new(move |_| state.with(|s| summary::recompute(&s.cards, s.filter)));
    let summary_line = move || {
        let t = totals.get();
        format!("{} orders · {}", t.count, t.total_formatted())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"AliExpress Orders"</h1>
                    <span class="header__summary">{summary_line}</span>
                </div>
                <div class="header__actions">
                    {SortField::all().into_iter().map(|field| {
                        let is_active = move || {
                            state.with(|s| s.sort_field == field && field != SortField::Default)
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "button button--sort button--sort-active"
                                    } else {
                                        "button button--sort"
                                    }
                                }
                                on:click=move |_| dispatch.run(OrderAction::Sort(field))
                            >
                                {field.label()}
                                {move || {
                                    state.with(|s| {
                                        engine::sort_indicator(s.sort_field, field, s.sort_ascending)
                                    })
                                }}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="button button--filter"
                        on:click=move |_| dispatch.run(OrderAction::CycleFilter)
                    >
                        {icon("filter")}
                        {move || state.with(|s| s.filter.label())}
                    </button>
                </div>
            </div>

            <div class="order-list">
                {move || {
                    let s = state.get();
                    let filter = s.filter;
                    s.cards
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <OrderCardView entry=entry filter=filter on_action=dispatch />
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="footer">
                <span class="footer__summary">{summary_line}</span>
            </div>
        </div>
    }
}
