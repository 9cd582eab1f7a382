use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Категория ставки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BetCategory {
    Banker,
    Player,
    Tie,
    /// Бонус на банкира: ставка + 50% платы.
    BankerBonus,
    /// Супер-бонус на банкира: ставка + 400% платы.
    BankerSuper,
}

impl BetCategory {
    pub const ALL: [BetCategory; 5] = [
        BetCategory::Banker,
        BetCategory::Player,
        BetCategory::Tie,
        BetCategory::BankerBonus,
        BetCategory::BankerSuper,
    ];

    /// Побочная ставка, к которой относится категория (если это бонус).
    pub fn side_bet(&self) -> Option<SideBet> {
        match self {
            BetCategory::BankerBonus => Some(SideBet::Bonus),
            BetCategory::BankerSuper => Some(SideBet::Super),
            _ => None,
        }
    }

    /// Полная стоимость ставки `base` с учётом платы за вход.
    pub fn total_cost(&self, base: Chips) -> Chips {
        match self.side_bet() {
            Some(side) => {
                let (num, den) = side.cost_ratio();
                base.mul_ratio(num, den)
            }
            None => base,
        }
    }
}

impl fmt::Display for BetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BetCategory::Banker => "banker",
            BetCategory::Player => "player",
            BetCategory::Tie => "tie",
            BetCategory::BankerBonus => "bankerBonus",
            BetCategory::BankerSuper => "bankerSuper",
        };
        f.write_str(s)
    }
}

/// Одна из двух бонусных ставок со случайным множителем.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SideBet {
    Bonus,
    Super,
}

impl SideBet {
    pub const ALL: [SideBet; 2] = [SideBet::Bonus, SideBet::Super];

    /// Во сколько раз полная стоимость больше базы: (числитель, знаменатель).
    /// Бонус: 1 + 0.5, супер: 1 + 4.
    pub const fn cost_ratio(&self) -> (u64, u64) {
        match self {
            SideBet::Bonus => (3, 2),
            SideBet::Super => (5, 1),
        }
    }

    pub fn category(&self) -> BetCategory {
        match self {
            SideBet::Bonus => BetCategory::BankerBonus,
            SideBet::Super => BetCategory::BankerSuper,
        }
    }
}

/// Множитель выплаты бонуса в десятых: `Multiplier(25)` = 2.5.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Multiplier(pub u32);

impl Multiplier {
    pub const fn tenths(value: u32) -> Self {
        Multiplier(value)
    }

    /// Выплата по выигравшему бонусу: `base × (1 + multiplier)`.
    pub fn payout(&self, base: Chips) -> Chips {
        base.mul_ratio(10 + self.0 as u64, 10)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

/// Суммы ставок по всем пяти категориям.
///
/// Для бонусов здесь лежит полная стоимость (база + плата).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WagerSet {
    pub banker: Chips,
    pub player: Chips,
    pub tie: Chips,
    pub banker_bonus: Chips,
    pub banker_super: Chips,
}

impl WagerSet {
    pub fn get(&self, category: BetCategory) -> Chips {
        match category {
            BetCategory::Banker => self.banker,
            BetCategory::Player => self.player,
            BetCategory::Tie => self.tie,
            BetCategory::BankerBonus => self.banker_bonus,
            BetCategory::BankerSuper => self.banker_super,
        }
    }

    pub fn get_mut(&mut self, category: BetCategory) -> &mut Chips {
        match category {
            BetCategory::Banker => &mut self.banker,
            BetCategory::Player => &mut self.player,
            BetCategory::Tie => &mut self.tie,
            BetCategory::BankerBonus => &mut self.banker_bonus,
            BetCategory::BankerSuper => &mut self.banker_super,
        }
    }

    pub fn total(&self) -> Chips {
        BetCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }
}

/// Состояние двух бонусных ставок: базы (без платы) и защёлкнутые множители.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BonusState {
    pub bonus_base: Chips,
    pub super_base: Chips,
    pub bonus_multiplier: Option<Multiplier>,
    pub super_multiplier: Option<Multiplier>,
}

impl BonusState {
    pub fn base(&self, side: SideBet) -> Chips {
        match side {
            SideBet::Bonus => self.bonus_base,
            SideBet::Super => self.super_base,
        }
    }

    pub fn base_mut(&mut self, side: SideBet) -> &mut Chips {
        match side {
            SideBet::Bonus => &mut self.bonus_base,
            SideBet::Super => &mut self.super_base,
        }
    }

    pub fn multiplier(&self, side: SideBet) -> Option<Multiplier> {
        match side {
            SideBet::Bonus => self.bonus_multiplier,
            SideBet::Super => self.super_multiplier,
        }
    }

    pub fn multiplier_mut(&mut self, side: SideBet) -> &mut Option<Multiplier> {
        match side {
            SideBet::Bonus => &mut self.bonus_multiplier,
            SideBet::Super => &mut self.super_multiplier,
        }
    }

    /// Плата за вход (невозвратная часть) для бонуса при заданной полной ставке.
    pub fn fee(&self, side: SideBet, wagered: &WagerSet) -> Chips {
        wagered.get(side.category()) - self.base(side)
    }

    pub fn reset(&mut self) {
        *self = BonusState::default();
    }
}
