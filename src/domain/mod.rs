//! Доменная модель баккары: карты, руки, фишки, ставки, конфиг стола.

pub mod bets;
pub mod card;
pub mod chips;
pub mod hand;
pub mod table;

/// Порядковый номер раунда за столом.
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bets::*;
pub use card::*;
pub use chips::*;
pub use hand::*;
pub use table::*;
