use serde::{Deserialize, Serialize};

use crate::domain::bets::Multiplier;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{Outcome, Side};
use crate::domain::RoundId;

/// Тип события в раунде.
///
/// Слой отображения проигрывает эти события с нужными паузами:
/// к моменту записи результат раунда уже посчитан.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Сдача началась.
    RoundStarted { round_id: RoundId },

    /// Открыты множители бонусов (только для сделанных бонусных ставок).
    MultipliersRevealed {
        bonus: Option<Multiplier>,
        super_: Option<Multiplier>,
    },

    /// Шу был пересобран перед очередной картой.
    Reshuffled { cards_in_shoe: usize },

    /// Карта сдана стороне.
    CardDealt {
        side: Side,
        card: Card,
        score_after: u8,
    },

    /// Шу оказался пуст и был восстановлен.
    InvariantViolation { message: String },

    /// Раунд рассчитан.
    Settled {
        outcome: Outcome,
        player_score: u8,
        banker_score: u8,
        winnings: Chips,
    },

    /// Баланс обнулился и был восстановлен до стартового.
    BankrollReset { balance: Chips },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Лог одного раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundLog {
    pub events: Vec<RoundEvent>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Карты в порядке сдачи.
    pub fn dealt_cards(&self) -> impl Iterator<Item = (Side, Card)> + '_ {
        self.events.iter().filter_map(|e| match e.kind {
            RoundEventKind::CardDealt { side, card, .. } => Some((side, card)),
            _ => None,
        })
    }
}
