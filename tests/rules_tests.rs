//! Очки и таблица добора третьих карт.

use std::convert::Infallible;

use baccarat_engine::domain::card::{Card, Rank, Suit};
use baccarat_engine::domain::hand::{Hand, Side};
use baccarat_engine::engine::rules::{
    banker_draws, is_natural, player_draws, resolve_third_card, score,
};

fn c(s: &str) -> Card {
    s.parse().expect("valid card literal")
}

fn hand(cards: &[&str]) -> Hand {
    Hand::from_cards(cards.iter().map(|s| c(s)).collect())
}

/// Очки всегда в 0..=9 и не зависят от порядка карт.
#[test]
fn score_is_mod_ten_and_order_independent() {
    for a in Rank::ALL {
        for b in Rank::ALL {
            for d in Rank::ALL {
                let x = Card::new(a, Suit::Spades);
                let y = Card::new(b, Suit::Hearts);
                let z = Card::new(d, Suit::Clubs);

                let s = score(&[x, y, z]);
                assert!(s <= 9);
                assert_eq!(s, score(&[z, x, y]));
                assert_eq!(s, score(&[y, z, x]));
                assert_eq!(
                    s as u32,
                    (a.points() as u32 + b.points() as u32 + d.points() as u32) % 10
                );
            }
        }
    }
}

#[test]
fn score_examples() {
    assert_eq!(score(&[c("9h"), c("Kh")]), 9);
    assert_eq!(score(&[c("7s"), c("8s")]), 5);
    assert_eq!(score(&[c("10s"), c("Qd")]), 0);
    assert_eq!(score(&[c("As"), c("9d"), c("5c")]), 5);
    assert_eq!(score(&[]), 0);
}

#[test]
fn player_draws_on_zero_to_five() {
    for s in 0..=9u8 {
        assert_eq!(player_draws(s), s <= 5, "player score {s}");
    }
}

/// Сверка с классической таблицей банкира для всех очков и всех третьих карт.
#[test]
fn banker_tableau_matches_standard_table() {
    // Для каждого счёта банкира: на каких третьих картах игрока он добирает.
    let draws_on: [&[u8]; 10] = [
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[0, 1, 2, 3, 4, 5, 6, 7, 9],
        &[2, 3, 4, 5, 6, 7],
        &[4, 5, 6, 7],
        &[6, 7],
        &[],
        &[],
        &[],
    ];

    for banker in 0..=9u8 {
        for p in 0..=9u8 {
            let expected = draws_on[banker as usize].contains(&p);
            assert_eq!(
                banker_draws(banker, Some(p)),
                expected,
                "banker {banker}, player third {p}"
            );
        }
        // Игрок стоял: банкир добирает на 0–5.
        assert_eq!(banker_draws(banker, None), banker <= 5, "banker {banker}, no third");
    }
}

/// Десятка игрока (значение 10) ведёт себя как ноль.
#[test]
fn ten_valued_third_card_behaves_like_zero() {
    for banker in 0..=9u8 {
        assert_eq!(banker_draws(banker, Some(10)), banker_draws(banker, Some(0)));
    }
}

/// Натуральная рука у любой стороны: добора нет ни при каком раскладе.
#[test]
fn naturals_never_draw() {
    let mut calls = 0usize;
    for p1 in Rank::ALL {
        for p2 in Rank::ALL {
            for b1 in Rank::ALL {
                for b2 in Rank::ALL {
                    let mut player = Hand::from_cards(vec![
                        Card::new(p1, Suit::Spades),
                        Card::new(p2, Suit::Hearts),
                    ]);
                    let mut banker = Hand::from_cards(vec![
                        Card::new(b1, Suit::Diamonds),
                        Card::new(b2, Suit::Clubs),
                    ]);
                    if !is_natural(player.score()) && !is_natural(banker.score()) {
                        continue;
                    }

                    let third = resolve_third_card(&mut player, &mut banker, |_| {
                        calls += 1;
                        Ok::<Card, Infallible>(c("5s"))
                    })
                    .unwrap();

                    assert_eq!(third.player, None);
                    assert_eq!(third.banker, None);
                    assert_eq!(player.len(), 2);
                    assert_eq!(banker.len(), 2);
                }
            }
        }
    }
    assert_eq!(calls, 0);
}

#[test]
fn player_draws_then_banker_uses_third_card_value() {
    // Игрок 5 → добирает 4; банкир 6 на 4 стоит.
    let mut player = hand(&["2s", "3s"]);
    let mut banker = hand(&["3h", "3d"]);
    let mut order = Vec::new();

    let third = resolve_third_card(&mut player, &mut banker, |side| {
        order.push(side);
        Ok::<Card, Infallible>(c("4c"))
    })
    .unwrap();

    assert_eq!(order, vec![Side::Player]);
    assert_eq!(third.player, Some(c("4c")));
    assert_eq!(third.banker, None);
    assert_eq!(player.score(), 9);
    assert_eq!(banker.score(), 6);
}

#[test]
fn banker_draws_when_player_stands() {
    // Игрок 7 стоит; банкир 5 добирает.
    let mut player = hand(&["7s", "Ks"]);
    let mut banker = hand(&["2h", "3h"]);
    let mut order = Vec::new();

    let third = resolve_third_card(&mut player, &mut banker, |side| {
        order.push(side);
        Ok::<Card, Infallible>(c("4d"))
    })
    .unwrap();

    assert_eq!(order, vec![Side::Banker]);
    assert_eq!(third.player, None);
    assert_eq!(banker.third_card(), Some(c("4d")));
    assert_eq!(banker.score(), 9);
}

#[test]
fn both_draw_in_player_then_banker_order() {
    // Игрок 1, банкир 2: оба добирают.
    let mut player = hand(&["As", "Ks"]);
    let mut banker = hand(&["2h", "Qh"]);
    let mut cards = vec![c("6c"), c("7c")].into_iter();
    let mut order = Vec::new();

    resolve_third_card(&mut player, &mut banker, |side| {
        order.push(side);
        Ok::<Card, Infallible>(cards.next().unwrap())
    })
    .unwrap();

    assert_eq!(order, vec![Side::Player, Side::Banker]);
    assert_eq!(player.score(), 7);
    assert_eq!(banker.score(), 9);
}

#[test]
fn draw_error_stops_resolution() {
    let mut player = hand(&["As", "Ks"]);
    let mut banker = hand(&["2h", "Qh"]);

    let res = resolve_third_card(&mut player, &mut banker, |_| Err::<Card, &str>("shoe broken"));

    assert_eq!(res, Err("shoe broken"));
    assert_eq!(player.len(), 2);
    assert_eq!(banker.len(), 2);
}
