//! Утилиты форматирования сумм для карточек и итогов

/// Форматирует сумму с двумя знаками после запятой, запятая как
/// десятичный разделитель
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_amount;
///
/// let formatted = format_amount(19.8);
/// assert_eq!(formatted, "19,80");
/// ```
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value).replace('.', ",")
}

/// Полный формат суммы с префиксом валюты: "€ 19,80"
///
/// Все места вывода итога (шапка и подвал) используют именно эту функцию,
/// чтобы значения не могли разойтись.
pub fn format_money_eur(value: f64) -> String {
    format!("€ {}", format_amount(value))
}
