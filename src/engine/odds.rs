use tracing::debug;

use crate::domain::bets::{Multiplier, SideBet};
use crate::domain::table::{PayoutTable, TableConfig};
use crate::engine::RandomSource;

/// Взвешенный выбор по готовому значению `draw` из `[0, total_weight)`.
///
/// Идём по таблице, накапливая вес, и берём первую строку, у которой
/// накопленный вес ≥ `draw`.
pub fn select(table: &PayoutTable, draw: f64) -> Option<Multiplier> {
    let mut cumulative = 0u64;
    for entry in &table.entries {
        cumulative += entry.weight as u64;
        if cumulative as f64 >= draw {
            return Some(entry.multiplier);
        }
    }
    // Сюда попадаем только при draw ≥ total_weight.
    table.entries.last().map(|e| e.multiplier)
}

/// Случайный множитель из таблицы. `None` только для пустой таблицы.
pub fn generate<R: RandomSource>(table: &PayoutTable, rng: &mut R) -> Option<Multiplier> {
    if table.entries.is_empty() {
        return None;
    }
    let draw = rng.next_unit() * table.total_weight() as f64;
    select(table, draw)
}

/// Генератор множителей для обеих бонусных ставок.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OddsGenerator {
    bonus: PayoutTable,
    super_: PayoutTable,
}

impl OddsGenerator {
    pub fn new(bonus: PayoutTable, super_: PayoutTable) -> Self {
        Self { bonus, super_ }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::new(config.bonus_table.clone(), config.super_table.clone())
    }

    pub fn table(&self, side: SideBet) -> &PayoutTable {
        match side {
            SideBet::Bonus => &self.bonus,
            SideBet::Super => &self.super_,
        }
    }

    pub fn generate<R: RandomSource>(&self, side: SideBet, rng: &mut R) -> Option<Multiplier> {
        let multiplier = generate(self.table(side), rng);
        debug!(?side, ?multiplier, "side bet multiplier generated");
        multiplier
    }
}

impl Default for OddsGenerator {
    fn default() -> Self {
        Self::new(PayoutTable::standard_bonus(), PayoutTable::standard_super())
    }
}
