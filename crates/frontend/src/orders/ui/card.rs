use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::orders::engine::{FilterState, OrderAction};
use crate::orders::state::CardState;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money_eur;

/// Карточка одного заказа.
///
/// Клик по карточке открывает страницу заказа; чекбокс и корзина
/// останавливают всплытие, чтобы не уводить со страницы. У архивных
/// карточек чекбокс отключён.
#[component]
pub fn OrderCardView(
    entry: CardState,
    filter: FilterState,
    on_action: Callback<OrderAction>,
) -> impl IntoView {
    let CardState { card, checked } = entry;
    let locked = card.archived;
    let visible = filter.is_visible(checked);
    let url = card.order_url();

    let card_class = {
        let mut class = String::from("order-card");
        if card.archived {
            class.push_str(" order-card--archived");
        }
        if !visible {
            class.push_str(" order-card--hidden");
        }
        class
    };

    let status_class = format!("order-card__status {}", card.status_class());
    let display_status = card.display_status().to_string();
    let desc_class = if card.delayed {
        "order-card__desc order-card__desc--delayed"
    } else {
        "order-card__desc"
    };

    let open_order = move |_| {
        if let Some(win) = web_sys::window() {
            let _ = win.open_with_url_and_target(&url, "_blank");
        }
    };

    let id_for_toggle = card.order_id.clone();
    let handle_toggle = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        on_action.run(OrderAction::ToggleReceived {
            order_id: id_for_toggle.clone(),
            checked,
        });
    };

    let id_for_delete = card.order_id.clone();
    let number_for_delete = card.order_number.clone();
    let handle_delete = move |ev: MouseEvent| {
        ev.stop_propagation();
        // Simple confirm dialog via browser
        let confirmed = {
            if let Some(win) = web_sys::window() {
                win.confirm_with_message(&format!("Удалить заказ {}?", number_for_delete))
                    .unwrap_or(false)
            } else {
                false
            }
        };
        if !confirmed {
            return;
        }
        on_action.run(OrderAction::Delete {
            order_id: id_for_delete.clone(),
        });
    };

    view! {
        <div
            class=card_class
            style:display=if visible { "" } else { "none" }
            on:click=open_order
        >
            {match card.image.clone() {
                Some(src) => view! {
                    <img src=src alt="Product" class="order-card__image" />
                }.into_any(),
                None => view! {
                    <div class="order-card__image order-card__image--empty">"No image"</div>
                }.into_any(),
            }}
            <div class="order-card__body">
                <div class=status_class>{display_status}</div>
                <div class="order-card__number">{card.order_number.clone()}</div>
                <h4 class="order-card__title">{card.delivery_info.clone()}</h4>
                {(!card.description.is_empty()).then(|| view! {
                    <div class=desc_class>{card.description.clone()}</div>
                })}
            </div>
            <div class="order-card__side" on:click=|ev| ev.stop_propagation()>
                <div class="order-card__price">{format_money_eur(card.price_value())}</div>
                <label class="order-card__received">
                    <input
                        type="checkbox"
                        class="order-card__checkbox"
                        prop:checked=checked
                        disabled=locked
                        on:change=handle_toggle
                    />
                    "Received"
                </label>
                <button
                    class="order-card__delete"
                    title="Удалить заказ"
                    on:click=handle_delete
                >
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}
