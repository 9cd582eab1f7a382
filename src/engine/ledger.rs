use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::bets::{BetCategory, BonusState, SideBet, WagerSet};
use crate::domain::chips::Chips;
use crate::engine::errors::EngineError;
use crate::engine::odds::OddsGenerator;
use crate::engine::RandomSource;

/// Ставки прошлого раунда для повтора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastRound {
    pub bets: WagerSet,
    pub bonus_base: Chips,
    pub super_base: Chips,
}

impl LastRound {
    pub fn total(&self) -> Chips {
        self.bets.total()
    }
}

/// Учёт ставок и баланса.
///
/// Фаза раунда здесь не проверяется – это делает `BaccaratEngine`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ledger {
    pub balance: Chips,
    pub bets: WagerSet,
    pub bonus: BonusState,
    pub last: Option<LastRound>,
}

impl Ledger {
    pub fn new(balance: Chips) -> Self {
        Self {
            balance,
            bets: WagerSet::default(),
            bonus: BonusState::default(),
            last: None,
        }
    }

    /// Поставить `amount` (база) на категорию. Возвращает списанную сумму.
    ///
    /// Для бонусов списывается база + плата, а первая ставка в категорию
    /// за раунд защёлкивает множитель.
    pub fn place_bet<R: RandomSource>(
        &mut self,
        category: BetCategory,
        amount: Chips,
        odds: &OddsGenerator,
        rng: &mut R,
    ) -> Result<Chips, EngineError> {
        if amount.is_zero() || !amount.is_whole() {
            return Err(EngineError::InvalidAmount(amount));
        }

        let cost = category.total_cost(amount);
        if self.balance < cost {
            return Err(EngineError::InsufficientBalance {
                required: cost,
                available: self.balance,
            });
        }

        // Множитель выбираем до любых изменений, чтобы ошибка ничего не трогала.
        let fresh_multiplier = match category.side_bet() {
            Some(side) if self.bonus.multiplier(side).is_none() => Some((
                side,
                odds.generate(side, rng)
                    .ok_or(EngineError::InvariantViolation("payout table is empty"))?,
            )),
            _ => None,
        };

        self.balance -= cost;
        *self.bets.get_mut(category) += cost;
        if let Some(side) = category.side_bet() {
            *self.bonus.base_mut(side) += amount;
        }
        if let Some((side, multiplier)) = fresh_multiplier {
            *self.bonus.multiplier_mut(side) = Some(multiplier);
        }

        debug!(%category, %amount, %cost, balance = %self.balance, "bet placed");
        Ok(cost)
    }

    /// Вернуть все ставки на баланс и сбросить базы и множители.
    pub fn clear_bets(&mut self) -> Chips {
        let refund = self.bets.total();
        self.balance += refund;
        self.bets = WagerSet::default();
        self.bonus.reset();
        refund
    }

    /// Сумма прошлых ставок, если они есть.
    pub fn last_total(&self) -> Option<Chips> {
        self.last
            .as_ref()
            .filter(|l| !l.bets.is_empty())
            .map(LastRound::total)
    }

    /// Можно ли повторить прошлые ставки при текущем балансе.
    pub fn can_repeat(&self) -> bool {
        self.last_total().is_some_and(|t| self.balance >= t)
    }

    /// Повтор ставок прошлого раунда.
    ///
    /// Баланс проверяется до возврата текущих ставок.
    pub fn repeat_last_bet<R: RandomSource>(
        &mut self,
        odds: &OddsGenerator,
        rng: &mut R,
    ) -> Result<Chips, EngineError> {
        let last = self
            .last
            .filter(|l| !l.bets.is_empty())
            .ok_or(EngineError::NoPreviousBets)?;

        let total = last.total();
        if self.balance < total {
            return Err(EngineError::InsufficientBalance {
                required: total,
                available: self.balance,
            });
        }

        let multipliers = Self::draw_multipliers(&last, odds, rng)?;

        self.clear_bets();
        self.apply(&last, multipliers);
        Ok(total)
    }

    /// Запомнить текущие ставки как «прошлые» (в момент начала сдачи).
    pub fn snapshot_last_round(&mut self) {
        self.last = Some(LastRound {
            bets: self.bets,
            bonus_base: self.bonus.bonus_base,
            super_base: self.bonus.super_base,
        });
    }

    /// Начало нового раунда: рассчитанные ставки уходят, прошлые ставки
    /// ставятся заново, если хватает баланса. Иначе всё обнуляется.
    ///
    /// Возвращает true, если ставки были повторены.
    pub fn start_new_round<R: RandomSource>(
        &mut self,
        odds: &OddsGenerator,
        rng: &mut R,
    ) -> Result<bool, EngineError> {
        let last = match self.last.filter(|l| !l.bets.is_empty()) {
            Some(last) if self.balance >= last.total() => last,
            _ => {
                self.bets = WagerSet::default();
                self.bonus.reset();
                return Ok(false);
            }
        };

        // Сброс только после успешного выбора множителей.
        let multipliers = Self::draw_multipliers(&last, odds, rng)?;
        self.bets = WagerSet::default();
        self.bonus.reset();
        self.apply(&last, multipliers);
        Ok(true)
    }

    fn draw_multipliers<R: RandomSource>(
        last: &LastRound,
        odds: &OddsGenerator,
        rng: &mut R,
    ) -> Result<BonusState, EngineError> {
        let mut bonus = BonusState {
            bonus_base: last.bonus_base,
            super_base: last.super_base,
            ..BonusState::default()
        };
        for side in SideBet::ALL {
            if !last.bets.get(side.category()).is_zero() {
                let multiplier = odds
                    .generate(side, rng)
                    .ok_or(EngineError::InvariantViolation("payout table is empty"))?;
                *bonus.multiplier_mut(side) = Some(multiplier);
            }
        }
        Ok(bonus)
    }

    fn apply(&mut self, last: &LastRound, bonus: BonusState) {
        self.bets = last.bets;
        self.bonus = bonus;
        self.balance -= last.total();
        debug!(total = %last.total(), balance = %self.balance, "previous bets applied");
    }
}
