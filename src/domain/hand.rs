use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::engine::rules;

/// Сторона стола, которой сдаются карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Banker,
}

/// Исход раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Player,
    Banker,
    Tie,
}

impl Outcome {
    /// Сравнение финальных очков.
    pub fn from_scores(player_score: u8, banker_score: u8) -> Self {
        if player_score > banker_score {
            Outcome::Player
        } else if banker_score > player_score {
            Outcome::Banker
        } else {
            Outcome::Tie
        }
    }

    /// Однобуквенная метка для истории (`P`, `B`, `T`).
    pub fn short(&self) -> char {
        match self {
            Outcome::Player => 'P',
            Outcome::Banker => 'B',
            Outcome::Tie => 'T',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Player => "player",
            Outcome::Banker => "banker",
            Outcome::Tie => "tie",
        };
        f.write_str(s)
    }
}

/// Рука одной стороны: 2 или 3 карты в порядке сдачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(3) }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Очки руки (0–9).
    pub fn score(&self) -> u8 {
        rules::score(&self.cards)
    }

    /// Третья карта, если она была добрана.
    pub fn third_card(&self) -> Option<Card> {
        self.cards.get(2).copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
