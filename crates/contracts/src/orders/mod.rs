use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Подстановка для карточек без даты доставки: сортируется после любой
/// реальной ISO-даты.
pub const MAX_DATE: &str = "9999-12-31";

/// Одна карточка заказа, как её записал генератор.
///
/// Все поля кроме `order_id` опциональны на уровне сериализации: карточка
/// с отсутствующим или битым полем остаётся валидной и отображается с
/// документированными значениями по умолчанию (цена 0, дата-максимум).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCard {
    /// Стабильный идентификатор (номер заказа без пробелов).
    /// Суффикс ключей персистентности и хвост ссылки на заказ.
    pub order_id: String,
    /// Номер заказа в человекочитаемом виде ("12 3456 7890 1234").
    #[serde(default)]
    pub order_number: String,
    /// Цена, уже нормализованная генератором в EUR ("12.50").
    #[serde(default)]
    pub price: String,
    /// Ожидаемая дата доставки в ISO-формате, если генератор её распознал.
    #[serde(default)]
    pub delivery_date: Option<String>,
    /// Статус заказа, как на исходной странице ("In transit", "Ready for pickup").
    #[serde(default)]
    pub status: String,
    /// Строка с информацией о доставке.
    #[serde(default)]
    pub delivery_info: String,
    /// Дополнительное описание (обычно про задержку).
    #[serde(default)]
    pub description: String,
    /// Описание помечено как опасное/задержка на исходной странице.
    #[serde(default)]
    pub delayed: bool,
    /// Картинка товара как data URL, если генератор её нашёл.
    #[serde(default)]
    pub image: Option<String>,
    /// Заказ из архива: чекбокс "получен" предустановлен и заблокирован.
    #[serde(default)]
    pub archived: bool,
}

impl OrderCard {
    /// Цена как число; отсутствующее или нечисловое значение считается 0.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }

    /// Ключ сортировки по дате: валидная ISO-дата как есть, иначе [`MAX_DATE`],
    /// чтобы карточки без даты уходили в конец при сортировке по возрастанию.
    pub fn date_key(&self) -> &str {
        match &self.delivery_date {
            Some(d) if NaiveDate::parse_from_str(d, "%Y-%m-%d").is_ok() => d,
            _ => MAX_DATE,
        }
    }

    /// Ссылка на страницу заказа на AliExpress.
    pub fn order_url(&self) -> String {
        format!("https://aliexpress.ru/order-list/{}", self.order_id)
    }

    /// Отображаемый статус: архивные заказы всегда "Received".
    pub fn display_status(&self) -> &str {
        if self.archived {
            "Received"
        } else {
            &self.status
        }
    }

    /// CSS-модификатор бейджа статуса.
    pub fn status_class(&self) -> &'static str {
        if self.archived {
            return "status-ready";
        }
        let status = self.status.to_uppercase();
        if status.contains("READY") || status.contains("PICKUP") {
            "status-ready"
        } else if status.contains("TRANSIT") {
            "status-transit"
        } else {
            "status-unknown"
        }
    }
}
