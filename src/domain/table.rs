use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::bets::Multiplier;
use crate::domain::chips::Chips;

/// Ошибки конфигурации стола.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(String),

    #[error("Не удалось прочитать конфиг: {0}")]
    Io(String),

    #[error("Не удалось разобрать JSON конфига: {0}")]
    Parse(String),
}

/// Одна строка таблицы выплат: множитель и его вес.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutEntry {
    pub multiplier: Multiplier,
    pub weight: u32,
}

impl PayoutEntry {
    pub const fn new(multiplier_tenths: u32, weight: u32) -> Self {
        Self {
            multiplier: Multiplier(multiplier_tenths),
            weight,
        }
    }
}

/// Взвешенная таблица множителей для бонусной ставки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutTable {
    pub entries: Vec<PayoutEntry>,
}

impl PayoutTable {
    pub fn new(entries: Vec<PayoutEntry>) -> Self {
        Self { entries }
    }

    /// Бонус: 2.0 (150), 2.5 (3), 3.0 (1).
    pub fn standard_bonus() -> Self {
        Self::new(vec![
            PayoutEntry::new(20, 150),
            PayoutEntry::new(25, 3),
            PayoutEntry::new(30, 1),
        ])
    }

    /// Супер: 9 (100), 11 (10), 13 (5), 14 (3), 19 (1).
    pub fn standard_super() -> Self {
        Self::new(vec![
            PayoutEntry::new(90, 100),
            PayoutEntry::new(110, 10),
            PayoutEntry::new(130, 5),
            PayoutEntry::new(140, 3),
            PayoutEntry::new(190, 1),
        ])
    }

    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| e.weight as u64).sum()
    }

    pub fn contains(&self, multiplier: Multiplier) -> bool {
        self.entries.iter().any(|e| e.multiplier == multiplier)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::InvalidConfig(format!(
                "TableConfig: {name} payout table is empty"
            )));
        }
        if self.entries.iter().any(|e| e.weight == 0) {
            return Err(ConfigError::InvalidConfig(format!(
                "TableConfig: {name} payout table has zero weight entry"
            )));
        }
        Ok(())
    }
}

/// Конфиг стола: шу, банкролл, история, таблицы бонусов.
///
/// Все поля необязательны в JSON: отсутствующие берутся из `Default`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Сколько колод по 52 карты в шу.
    pub deck_count: u8,
    /// При остатке карт ≤ этого порога шу пересобирается перед сдачей.
    pub min_cards_before_shuffle: usize,
    /// Стартовый банкролл, он же сумма восстановления после банкротства.
    pub starting_balance: Chips,
    /// Номинал фишки по умолчанию (в целых единицах).
    pub default_chip: u64,
    /// Длина скользящей истории исходов.
    pub history_limit: usize,
    pub bonus_table: PayoutTable,
    pub super_table: PayoutTable,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            deck_count: 6,
            min_cards_before_shuffle: 60,
            starting_balance: Chips::units(1000),
            default_chip: 10,
            history_limit: 20,
            bonus_table: PayoutTable::standard_bonus(),
            super_table: PayoutTable::standard_super(),
        }
    }
}

impl TableConfig {
    /// Размер полного шу.
    pub fn shoe_size(&self) -> usize {
        self.deck_count as usize * 52
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_count == 0 {
            return Err(ConfigError::InvalidConfig(
                "TableConfig: deck_count = 0".into(),
            ));
        }

        if self.min_cards_before_shuffle >= self.shoe_size() {
            return Err(ConfigError::InvalidConfig(format!(
                "TableConfig: min_cards_before_shuffle ({}) must be below shoe size ({})",
                self.min_cards_before_shuffle,
                self.shoe_size()
            )));
        }

        if self.starting_balance.is_zero() {
            return Err(ConfigError::InvalidConfig(
                "TableConfig: starting_balance = 0".into(),
            ));
        }

        if self.default_chip == 0 {
            return Err(ConfigError::InvalidConfig(
                "TableConfig: default_chip = 0".into(),
            ));
        }

        if self.history_limit == 0 {
            return Err(ConfigError::InvalidConfig(
                "TableConfig: history_limit = 0".into(),
            ));
        }

        self.bonus_table.validate("bonus")?;
        self.super_table.validate("super")?;

        Ok(())
    }
}
