use crate::orders::ui::OrderListPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <OrderListPage />
    }
}
