//! Чтение данных заказов, встроенных генератором в страницу.
//!
//! Генератор кладёт JSON-массив карточек в элемент
//! `<script type="application/json" id="order-data">`. Отсутствующий
//! элемент или битый JSON деградируют до пустого списка.

use contracts::orders::OrderCard;
use leptos::logging::log;

const ORDER_DATA_ELEMENT_ID: &str = "order-data";

pub fn read_embedded_orders() -> Vec<OrderCard> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ORDER_DATA_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    if text.trim().is_empty() {
        log!("no embedded order data found (#{})", ORDER_DATA_ELEMENT_ID);
        return Vec::new();
    }

    match serde_json::from_str::<Vec<OrderCard>>(&text) {
        Ok(cards) => {
            log!("loaded {} orders from embedded data", cards.len());
            cards
        }
        Err(e) => {
            log!("failed to parse embedded order data: {}", e);
            Vec::new()
        }
    }
}
