use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::table::TableConfig;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Тасовка Фишера–Йетса: для i от последнего индекса до 1 меняем
/// позицию i со случайной позицией из [0, i].
pub fn fisher_yates<T, R: RandomSource>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_below(i + 1);
        slice.swap(i, j);
    }
}

/// Результат одной сдачи карты из шу.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    pub card: Card,
    /// Перед этой картой шу был пересобран по порогу.
    pub reshuffled: bool,
    /// Шу оказался пуст и был восстановлен (нарушение инварианта).
    pub recovered: bool,
}

/// Шу из нескольких колод. Карты берутся с хвоста, как со стопки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    deck_count: u8,
    min_cards_before_shuffle: usize,
    /// Сколько раз шу собирался заново (включая первую сборку).
    reshuffle_count: u64,
}

impl Shoe {
    /// Собрать и перетасовать полный шу по конфигу.
    pub fn new<R: RandomSource>(config: &TableConfig, rng: &mut R) -> Self {
        let mut shoe = Self::from_cards(Vec::new(), config);
        shoe.initialize(rng);
        shoe
    }

    /// Шу с заданным порядком карт, без тасовки. Последняя карта сдаётся первой.
    pub fn from_cards(cards: Vec<Card>, config: &TableConfig) -> Self {
        Self {
            cards,
            deck_count: config.deck_count,
            min_cards_before_shuffle: config.min_cards_before_shuffle,
            reshuffle_count: 0,
        }
    }

    /// Полный состав: `deck_count` колод, все сочетания масти и ранга.
    pub fn full_composition(deck_count: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(deck_count as usize * 52);
        for _ in 0..deck_count {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(rank, suit));
                }
            }
        }
        cards
    }

    /// Пересобрать полный шу и перетасовать его.
    pub fn initialize<R: RandomSource>(&mut self, rng: &mut R) {
        self.cards = Self::full_composition(self.deck_count);
        self.shuffle(rng);
        self.reshuffle_count += 1;
        info!(
            cards = self.cards.len(),
            reshuffles = self.reshuffle_count,
            "shoe shuffled"
        );
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.cards, rng);
    }

    pub fn needs_reshuffle(&self) -> bool {
        self.cards.len() <= self.min_cards_before_shuffle
    }

    /// Проверка порога в начале раунда. Возвращает true, если шу пересобран.
    pub fn reshuffle_if_needed<R: RandomSource>(&mut self, rng: &mut R) -> bool {
        if self.needs_reshuffle() {
            info!(remaining = self.cards.len(), "shoe below threshold, reshuffling");
            self.initialize(rng);
            true
        } else {
            false
        }
    }

    /// Сдать одну карту.
    ///
    /// Порог проверяется до сдачи. Пустой шу после проверки означает
    /// нарушение инварианта: логируем, пересобираем и продолжаем.
    pub fn draw<R: RandomSource>(&mut self, rng: &mut R) -> Result<Draw, EngineError> {
        let reshuffled = self.reshuffle_if_needed(rng);

        let mut recovered = false;
        if self.cards.is_empty() {
            error!("shoe unexpectedly empty, reinitializing");
            self.initialize(rng);
            recovered = true;
        }

        let card = self
            .cards
            .pop()
            .ok_or(EngineError::InvariantViolation("shoe is empty after reinitialization"))?;

        debug!(%card, remaining = self.cards.len(), "card drawn");

        Ok(Draw {
            card,
            reshuffled,
            recovered,
        })
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn min_cards_before_shuffle(&self) -> usize {
        self.min_cards_before_shuffle
    }

    pub fn reshuffle_count(&self) -> u64 {
        self.reshuffle_count
    }
}
