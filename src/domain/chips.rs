use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Денежная сумма в сотых долях единицы.
///
/// Ставки делаются целыми единицами, но комиссия банкира (×1.95),
/// плата за бонус (×1.5) и множитель 2.5 дают дробные суммы, поэтому
/// храним центы и остаёмся в целочисленной арифметике.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    /// Сколько сотых в одной единице.
    pub const UNIT: u64 = 100;

    pub fn new(hundredths: u64) -> Self {
        Chips(hundredths)
    }

    /// Сумма из целых единиц: `Chips::units(10)` = 10.00.
    pub const fn units(units: u64) -> Self {
        Chips(units.saturating_mul(Self::UNIT))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_whole(&self) -> bool {
        self.0 % Self::UNIT == 0
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Chips) -> Chips {
        Chips(self.0.saturating_sub(other.0))
    }

    /// Умножение на дробь `num / den` с округлением вниз.
    ///
    /// Для ставок в целых единицах все коэффициенты игры делятся нацело.
    pub fn mul_ratio(self, num: u64, den: u64) -> Chips {
        if den == 0 {
            return Chips::ZERO;
        }
        let wide = (self.0 as u128) * (num as u128) / (den as u128);
        Chips(u64::try_from(wide).unwrap_or(u64::MAX))
    }

    /// Знаковая разница `self - other` в сотых.
    pub fn signed_diff(self, other: Chips) -> i64 {
        let diff = self.0 as i128 - other.0 as i128;
        diff.clamp(i64::MIN as i128, i64::MAX as i128) as i64
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl core::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    /// Формат `1234.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::UNIT, self.0 % Self::UNIT)
    }
}
