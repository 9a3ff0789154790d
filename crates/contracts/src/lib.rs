//! Контракт данных между офлайн-генератором страницы и фронтендом просмотра.
//!
//! Генератор извлекает заказы из сохранённых страниц и встраивает их в
//! выходной HTML как JSON; фронтенд десериализует этот JSON и больше
//! ничего о генераторе не знает.

pub mod orders;
