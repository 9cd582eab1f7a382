//! Движок баккары: шу, правила добора, бонусные множители, ставки, расчёт.
//!
//! Высокоуровневый объект: `BaccaratEngine`
//! Основные операции:
//!   - `place_bet` / `clear_bets` / `repeat_last_bet` – работа со ставками
//!   - `start_deal` – сдача, добор третьих карт и расчёт раунда
//!   - `continue_after_result` – переход к следующему раунду

pub mod errors;
pub mod game_loop;
pub mod history;
pub mod ledger;
pub mod odds;
pub mod round_log;
pub mod rules;
pub mod settlement;
pub mod shoe;

pub use errors::EngineError;
pub use game_loop::{BaccaratEngine, RoundPhase, RoundResult};
pub use history::OutcomeHistory;
pub use ledger::{LastRound, Ledger};
pub use odds::OddsGenerator;
pub use round_log::{RoundEvent, RoundEventKind, RoundLog};
pub use settlement::{settle, CategoryPayout, Settlement};
pub use shoe::{fisher_yates, Draw, Shoe};

/// Источник случайности для engine.
///
/// Тасовка шу и выбор множителей идут только через него, поэтому в тестах
/// достаточно подставить детерминированную реализацию.
pub trait RandomSource {
    /// Равномерное целое в `[0, bound)`. `bound` всегда > 0.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Равномерное вещественное в `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}
