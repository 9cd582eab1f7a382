//! Движок баккары на один стол.
//!
//! Шу из нескольких колод, пять категорий ставок (включая два бонуса со
//! случайными множителями), правила добора третьей карты и расчёт выплат.
//! Отрисовка и анимации – забота внешнего слоя: он шлёт команды из
//! `api::Command` и читает `api::TableViewDto`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

pub use engine::{BaccaratEngine, EngineError, RandomSource};
