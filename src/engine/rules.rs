//! Подсчёт очков и таблица добора третьих карт.

use crate::domain::card::Card;
use crate::domain::hand::{Hand, Side};

/// Очки одной карты: A = 1, J/Q/K = 0, остальные по номиналу (10 = 10).
pub fn card_value(card: &Card) -> u8 {
    card.value()
}

/// Очки руки: сумма значений по модулю 10.
pub fn score(cards: &[Card]) -> u8 {
    let total: u32 = cards.iter().map(|c| card_value(c) as u32).sum();
    (total % 10) as u8
}

/// Натуральная рука: 8 или 9 очков на двух картах.
pub fn is_natural(score: u8) -> bool {
    score >= 8
}

/// Игрок добирает на 0–5.
pub fn player_draws(player_score: u8) -> bool {
    player_score <= 5
}

/// Добирает ли банкир.
///
/// `player_third` – значение третьей карты игрока, если он добирал.
/// Без третьей карты игрока банкир добирает на 0–5.
pub fn banker_draws(banker_score: u8, player_third: Option<u8>) -> bool {
    match (banker_score, player_third) {
        (0..=2, _) => true,
        (3..=5, None) => true,
        (3, Some(p)) => p != 8,
        (4, Some(p)) => (2..=7).contains(&p),
        (5, Some(p)) => (4..=7).contains(&p),
        (6, Some(p)) => p == 6 || p == 7,
        _ => false,
    }
}

/// Какие третьи карты были сданы.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThirdCards {
    pub player: Option<Card>,
    pub banker: Option<Card>,
}

/// Добор третьих карт для рук по две карты.
///
/// `draw` сдаёт карту указанной стороне; ошибка сдачи прерывает добор.
pub fn resolve_third_card<E>(
    player: &mut Hand,
    banker: &mut Hand,
    mut draw: impl FnMut(Side) -> Result<Card, E>,
) -> Result<ThirdCards, E> {
    let player_score = player.score();
    let banker_score = banker.score();

    let mut third = ThirdCards::default();

    if is_natural(player_score) || is_natural(banker_score) {
        return Ok(third);
    }

    if player_draws(player_score) {
        let card = draw(Side::Player)?;
        player.push(card);
        third.player = Some(card);
    }

    let player_third_value = third.player.as_ref().map(card_value);
    if banker_draws(banker_score, player_third_value) {
        let card = draw(Side::Banker)?;
        banker.push(card);
        third.banker = Some(card);
    }

    Ok(third)
}
