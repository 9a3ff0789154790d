mod card;
mod list;

pub use list::OrderListPage;
