use serde::{Deserialize, Serialize};

use crate::domain::bets::{BetCategory, BonusState, SideBet, WagerSet};
use crate::domain::chips::Chips;
use crate::domain::hand::Outcome;

/// Ставка и то, что по ней вернулось на баланс (с учётом самой ставки).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryPayout {
    pub category: BetCategory,
    pub staked: Chips,
    pub returned: Chips,
}

/// Результат расчёта раунда. Чистые данные, баланс здесь не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    pub outcome: Outcome,
    pub player_score: u8,
    pub banker_score: u8,
    /// Всё, что возвращается на баланс.
    pub winnings: Chips,
    pub total_staked: Chips,
    /// Разбивка по пяти категориям, в порядке `BetCategory::ALL`.
    pub breakdown: Vec<CategoryPayout>,
    /// Сгоревшая плата за вход в бонусы.
    pub fees_forfeited: Chips,
}

impl Settlement {
    /// Чистый результат раунда: выигрыш минус поставленное, в сотых.
    pub fn net(&self) -> i64 {
        self.winnings.signed_diff(self.total_staked)
    }

    pub fn returned(&self, category: BetCategory) -> Chips {
        self.breakdown
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.returned)
            .unwrap_or(Chips::ZERO)
    }
}

/// Выплата по бонусу при выигрыше банкира: `base × (1 + multiplier)`.
///
/// Без защёлкнутого множителя бонус ничего не платит.
fn side_bet_payout(bonus: &BonusState, side: SideBet) -> Chips {
    let base = bonus.base(side);
    match bonus.multiplier(side) {
        Some(m) if !base.is_zero() => m.payout(base),
        _ => Chips::ZERO,
    }
}

/// Расчёт раунда по финальным очкам.
///
/// - игрок: ставка на игрока ×2, всё на банкира (включая бонусы) сгорает;
/// - банкир: ставка на банкира ×1.95 плюс выплаты бонусов;
/// - ничья: ставка на ничью ×9, ставки на игрока и банкира возвращаются,
///   у бонусов возвращается только база.
pub fn settle(
    bets: &WagerSet,
    bonus: &BonusState,
    player_score: u8,
    banker_score: u8,
) -> Settlement {
    let outcome = Outcome::from_scores(player_score, banker_score);

    let returned = |category: BetCategory| -> Chips {
        match (outcome, category) {
            (Outcome::Player, BetCategory::Player) => bets.player.mul_ratio(2, 1),
            (Outcome::Banker, BetCategory::Banker) => bets.banker.mul_ratio(195, 100),
            (Outcome::Banker, BetCategory::BankerBonus) => side_bet_payout(bonus, SideBet::Bonus),
            (Outcome::Banker, BetCategory::BankerSuper) => side_bet_payout(bonus, SideBet::Super),
            (Outcome::Tie, BetCategory::Tie) => bets.tie.mul_ratio(9, 1),
            (Outcome::Tie, BetCategory::Banker) => bets.banker,
            (Outcome::Tie, BetCategory::Player) => bets.player,
            (Outcome::Tie, BetCategory::BankerBonus) => bonus.bonus_base,
            (Outcome::Tie, BetCategory::BankerSuper) => bonus.super_base,
            _ => Chips::ZERO,
        }
    };

    let breakdown: Vec<CategoryPayout> = BetCategory::ALL
        .iter()
        .map(|&category| CategoryPayout {
            category,
            staked: bets.get(category),
            returned: returned(category),
        })
        .collect();

    let winnings: Chips = breakdown.iter().map(|p| p.returned).sum();

    let fees_forfeited: Chips = SideBet::ALL
        .iter()
        .map(|&side| bonus.fee(side, bets))
        .sum();

    Settlement {
        outcome,
        player_score,
        banker_score,
        winnings,
        total_staked: bets.total(),
        breakdown,
        fees_forfeited,
    }
}
