//! Инфраструктурный слой вокруг движка баккары:
//! - RNG-реализации для движка (системная и с seed);
//! - загрузка конфига стола из JSON.

pub mod config;
pub mod rng;

pub use config::*;
pub use rng::*;
