use super::engine::FilterState;
use super::state::CardState;
use crate::shared::number_format::format_money_eur;

/// Итоги по видимым карточкам. Пересчитываются целиком после каждого
/// действия; скрытые и удалённые карточки не учитываются.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
}

impl Summary {
    pub fn total_formatted(&self) -> String {
        format_money_eur(self.total)
    }
}

pub fn recompute(cards: &[CardState], filter: FilterState) -> Summary {
    let mut count = 0;
    let mut total = 0.0;
    for entry in cards {
        if filter.is_visible(entry.checked) {
            count += 1;
            total += entry.card.price_value();
        }
    }
    Summary { count, total }
}
