//! Расчёт раунда по итоговым очкам.

use baccarat_engine::domain::bets::{BetCategory, BonusState, Multiplier, WagerSet};
use baccarat_engine::domain::chips::Chips;
use baccarat_engine::domain::hand::Outcome;
use baccarat_engine::engine::settle;

fn u(n: u64) -> Chips {
    Chips::units(n)
}

/// Банкир 100, бонус база 10 (×2.0), супер база 10 (×9).
fn banker_with_side_bets() -> (WagerSet, BonusState) {
    let bets = WagerSet {
        banker: u(100),
        banker_bonus: u(15),
        banker_super: u(50),
        ..WagerSet::default()
    };
    let bonus = BonusState {
        bonus_base: u(10),
        super_base: u(10),
        bonus_multiplier: Some(Multiplier(20)),
        super_multiplier: Some(Multiplier(90)),
    };
    (bets, bonus)
}

#[test]
fn banker_win_pays_commission_and_side_bets() {
    let (bets, bonus) = banker_with_side_bets();

    let s = settle(&bets, &bonus, 3, 9);

    assert_eq!(s.outcome, Outcome::Banker);
    assert_eq!(s.returned(BetCategory::Banker), u(195));
    assert_eq!(s.returned(BetCategory::BankerBonus), u(30));
    assert_eq!(s.returned(BetCategory::BankerSuper), u(100));
    assert_eq!(s.winnings, u(325));
    assert_eq!(s.total_staked, u(165));
    assert_eq!(s.net(), 16_000);
    assert_eq!(s.fees_forfeited, u(45));
}

#[test]
fn banker_commission_keeps_fractions() {
    let bets = WagerSet {
        banker: u(1),
        ..WagerSet::default()
    };
    let s = settle(&bets, &BonusState::default(), 0, 1);
    assert_eq!(s.winnings, Chips(195));
}

#[test]
fn player_win_pays_even_money_and_forfeits_banker_side() {
    let (mut bets, bonus) = banker_with_side_bets();
    bets.player = u(40);

    let s = settle(&bets, &bonus, 8, 2);

    assert_eq!(s.outcome, Outcome::Player);
    assert_eq!(s.winnings, u(80));
    assert_eq!(s.returned(BetCategory::Banker), Chips::ZERO);
    assert_eq!(s.returned(BetCategory::BankerBonus), Chips::ZERO);
    assert_eq!(s.returned(BetCategory::BankerSuper), Chips::ZERO);
}

/// Ничья: возврат игрока и банкира, ничья ×9, у бонусов только база.
#[test]
fn tie_refunds_main_bets_and_side_bases() {
    let bets = WagerSet {
        banker: u(100),
        player: u(100),
        ..WagerSet::default()
    };
    let s = settle(&bets, &BonusState::default(), 7, 7);
    assert_eq!(s.outcome, Outcome::Tie);
    assert_eq!(s.winnings, u(200));

    let bets = WagerSet {
        banker: u(100),
        player: u(100),
        tie: u(10),
        ..WagerSet::default()
    };
    let s = settle(&bets, &BonusState::default(), 7, 7);
    assert_eq!(s.winnings, u(290));
    assert_eq!(s.returned(BetCategory::Tie), u(90));

    let (bets, bonus) = banker_with_side_bets();
    let s = settle(&bets, &bonus, 4, 4);
    assert_eq!(s.returned(BetCategory::Banker), u(100));
    assert_eq!(s.returned(BetCategory::BankerBonus), u(10));
    assert_eq!(s.returned(BetCategory::BankerSuper), u(10));
    assert_eq!(s.winnings, u(120));
    assert_eq!(s.fees_forfeited, u(45));
}

#[test]
fn side_bet_without_multiplier_pays_nothing() {
    let bets = WagerSet {
        banker_bonus: u(15),
        ..WagerSet::default()
    };
    let bonus = BonusState {
        bonus_base: u(10),
        ..BonusState::default()
    };

    let s = settle(&bets, &bonus, 0, 9);
    assert_eq!(s.returned(BetCategory::BankerBonus), Chips::ZERO);
}

#[test]
fn breakdown_lists_every_category_in_order() {
    let (bets, bonus) = banker_with_side_bets();
    let s = settle(&bets, &bonus, 1, 2);

    let categories: Vec<_> = s.breakdown.iter().map(|p| p.category).collect();
    assert_eq!(categories, BetCategory::ALL.to_vec());
    assert_eq!(
        s.breakdown.iter().map(|p| p.staked).sum::<Chips>(),
        s.total_staked
    );
}

#[test]
fn empty_bets_settle_to_zero() {
    let s = settle(&WagerSet::default(), &BonusState::default(), 5, 6);
    assert_eq!(s.winnings, Chips::ZERO);
    assert_eq!(s.net(), 0);
    assert_eq!(s.fees_forfeited, Chips::ZERO);
}
