use serde::{Deserialize, Serialize};

use crate::domain::bets::Multiplier;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Outcome;
use crate::domain::RoundId;
use crate::engine::history::OutcomeTally;
use crate::engine::{RoundEvent, RoundPhase, RoundResult};

/// DTO бонусной ставки: полная сумма, база, плата и множитель.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SideBetDto {
    pub total: Chips,
    pub base: Chips,
    pub fee: Chips,
    /// Множитель – только после начала сдачи, до этого всегда None.
    pub multiplier: Option<Multiplier>,
}

/// DTO ставок по категориям.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BetsDto {
    pub banker: Chips,
    pub player: Chips,
    pub tie: Chips,
    pub banker_bonus: SideBetDto,
    pub banker_super: SideBetDto,
    pub total: Chips,
}

/// DTO руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub cards: Vec<Card>,
    pub score: u8,
}

/// DTO истории исходов (от старого к новому).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryDto {
    pub outcomes: Vec<Outcome>,
    pub tally: OutcomeTally,
}

/// DTO стола – всё, что нужно фронту после любого перехода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub round_id: RoundId,
    pub phase: RoundPhase,
    pub balance: Chips,
    /// Выбранный номинал фишки (в целых единицах).
    pub selected_chip: u64,
    pub bets: BetsDto,
    pub player: HandDto,
    pub banker: HandDto,
    pub shoe_remaining: usize,
    /// Карт осталось не больше порога – следующий раунд пересоберёт шу.
    pub low_shoe: bool,
    pub reshuffle_occurred: bool,
    /// Доступен ли повтор прошлых ставок.
    pub can_repeat: bool,
    pub last_round_total: Option<Chips>,
    /// Результат раунда (только в фазе Settled).
    pub result: Option<RoundResult>,
    pub history: HistoryDto,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Обновлённое состояние стола.
    TableState(TableViewDto),

    /// Раунд сдан и рассчитан: стол, результат и события для анимации.
    RoundSettled {
        table: TableViewDto,
        result: RoundResult,
        events: Vec<RoundEvent>,
    },
}
