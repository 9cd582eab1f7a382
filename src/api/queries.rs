use serde::{Deserialize, Serialize};

use crate::domain::bets::SideBet;
use crate::engine::{BaccaratEngine, RandomSource, RoundEvent, RoundResult};

use super::dto::{BetsDto, HandDto, HistoryDto, SideBetDto, TableViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полное состояние стола.
    GetTable,

    /// История исходов.
    GetHistory,

    /// Результат последнего раунда (если стол в фазе Settled).
    GetLastResult,

    /// События текущего / последнего раунда.
    GetRoundLog,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Table(TableViewDto),
    History(HistoryDto),
    LastResult(Option<RoundResult>),
    RoundLog(Vec<RoundEvent>),
}

pub fn run_query<R: RandomSource>(engine: &BaccaratEngine<R>, query: &Query) -> QueryResponse {
    match query {
        Query::GetTable => QueryResponse::Table(build_table_view(engine)),
        Query::GetHistory => QueryResponse::History(build_history(engine)),
        Query::GetLastResult => QueryResponse::LastResult(engine.last_result().cloned()),
        Query::GetRoundLog => QueryResponse::RoundLog(engine.round_log().events.clone()),
    }
}

/// Сформировать DTO стола из движка.
pub fn build_table_view<R: RandomSource>(engine: &BaccaratEngine<R>) -> TableViewDto {
    let shoe = engine.shoe();

    TableViewDto {
        round_id: engine.round_id(),
        phase: engine.phase(),
        balance: engine.balance(),
        selected_chip: engine.selected_chip(),
        bets: build_bets(engine),
        player: HandDto {
            cards: engine.player_hand().cards.clone(),
            score: engine.player_score(),
        },
        banker: HandDto {
            cards: engine.banker_hand().cards.clone(),
            score: engine.banker_score(),
        },
        shoe_remaining: shoe.remaining(),
        low_shoe: shoe.needs_reshuffle(),
        reshuffle_occurred: engine.reshuffle_occurred(),
        can_repeat: engine.can_repeat(),
        last_round_total: engine.ledger().last_total(),
        result: engine.last_result().cloned(),
        history: build_history(engine),
    }
}

fn build_bets<R: RandomSource>(engine: &BaccaratEngine<R>) -> BetsDto {
    let bets = engine.bets();
    let bonus = engine.bonus_state();
    let (bonus_mult, super_mult) = engine.revealed_multipliers();

    let side = |side: SideBet, multiplier| SideBetDto {
        total: bets.get(side.category()),
        base: bonus.base(side),
        fee: bonus.fee(side, bets),
        multiplier,
    };

    BetsDto {
        banker: bets.banker,
        player: bets.player,
        tie: bets.tie,
        banker_bonus: side(SideBet::Bonus, bonus_mult),
        banker_super: side(SideBet::Super, super_mult),
        total: bets.total(),
    }
}

fn build_history<R: RandomSource>(engine: &BaccaratEngine<R>) -> HistoryDto {
    let history = engine.history();
    HistoryDto {
        outcomes: history.to_vec(),
        tally: history.tally(),
    }
}
