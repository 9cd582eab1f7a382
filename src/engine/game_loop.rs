use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::bets::{BetCategory, BonusState, Multiplier, WagerSet};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{Hand, Outcome, Side};
use crate::domain::table::{ConfigError, TableConfig};
use crate::domain::RoundId;
use crate::engine::errors::EngineError;
use crate::engine::history::OutcomeHistory;
use crate::engine::ledger::{LastRound, Ledger};
use crate::engine::odds::OddsGenerator;
use crate::engine::round_log::{RoundEventKind, RoundLog};
use crate::engine::rules;
use crate::engine::settlement::{settle, CategoryPayout};
use crate::engine::shoe::Shoe;
use crate::engine::RandomSource;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Приём ставок.
    Betting,
    /// Идёт сдача. Снаружи видна только через лог раунда.
    Dealing,
    /// Раунд рассчитан, ждём продолжения.
    Settled,
}

/// Итог раунда: руки, очки, выплаты, изменение баланса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round_id: RoundId,
    pub player_hand: Hand,
    pub banker_hand: Hand,
    pub player_score: u8,
    pub banker_score: u8,
    pub outcome: Outcome,
    /// Всё, что вернулось на баланс (на эту сумму вырос баланс).
    pub winnings: Chips,
    pub total_staked: Chips,
    /// Выигрыш минус поставленное, в сотых (может быть отрицательным).
    pub net: i64,
    pub breakdown: Vec<CategoryPayout>,
    pub bonus_multiplier: Option<Multiplier>,
    pub super_multiplier: Option<Multiplier>,
    pub fees_forfeited: Chips,
    pub balance_after: Chips,
    /// Баланс дошёл до нуля и был восстановлен до стартового.
    pub bankroll_reset: bool,
}

impl RoundResult {
    pub fn returned(&self, category: BetCategory) -> Chips {
        self.breakdown
            .iter()
            .find(|p| p.category == category)
            .map(|p| p.returned)
            .unwrap_or(Chips::ZERO)
    }
}

/// Движок одного стола баккары.
///
/// Владеет шу, учётом ставок, состоянием бонусов и историей. Все изменения
/// идут через методы; ошибка любого метода оставляет состояние как было.
pub struct BaccaratEngine<R: RandomSource> {
    config: TableConfig,
    rng: R,
    shoe: Shoe,
    odds: OddsGenerator,
    ledger: Ledger,
    phase: RoundPhase,
    round_id: RoundId,
    player: Hand,
    banker: Hand,
    selected_chip: u64,
    history: OutcomeHistory,
    last_result: Option<RoundResult>,
    log: RoundLog,
    /// Был ли пересбор шу за последний переход (сдача или новый раунд).
    reshuffled: bool,
}

impl<R: RandomSource> BaccaratEngine<R> {
    /// Новый стол со свежим перетасованным шу.
    pub fn new(config: TableConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let shoe = Shoe::new(&config, &mut rng);
        Ok(Self::assemble(config, rng, shoe))
    }

    /// Стол с готовым шу (например, с заранее разложенными картами).
    pub fn with_shoe(config: TableConfig, rng: R, shoe: Shoe) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::assemble(config, rng, shoe))
    }

    fn assemble(config: TableConfig, rng: R, shoe: Shoe) -> Self {
        Self {
            odds: OddsGenerator::from_config(&config),
            ledger: Ledger::new(config.starting_balance),
            selected_chip: config.default_chip,
            history: OutcomeHistory::new(config.history_limit),
            config,
            rng,
            shoe,
            phase: RoundPhase::Betting,
            round_id: 1,
            player: Hand::new(),
            banker: Hand::new(),
            last_result: None,
            log: RoundLog::new(),
            reshuffled: false,
        }
    }

    fn ensure_phase(&self, expected: RoundPhase, action: &'static str) -> Result<(), EngineError> {
        if self.phase != expected {
            return Err(EngineError::InvalidStateTransition {
                action,
                phase: self.phase,
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Команды
    // ------------------------------------------------------------------

    /// Выбрать номинал фишки (в целых единицах).
    pub fn select_chip_value(&mut self, value: u64) -> Result<(), EngineError> {
        if value == 0 {
            return Err(EngineError::InvalidAmount(Chips::ZERO));
        }
        self.selected_chip = value;
        Ok(())
    }

    /// Поставить `amount` на категорию. Возвращает списанную сумму.
    pub fn place_bet(&mut self, category: BetCategory, amount: Chips) -> Result<Chips, EngineError> {
        self.ensure_phase(RoundPhase::Betting, "place_bet")?;
        self.ledger
            .place_bet(category, amount, &self.odds, &mut self.rng)
    }

    /// Поставить выбранную фишку на категорию.
    pub fn place_selected_chip(&mut self, category: BetCategory) -> Result<Chips, EngineError> {
        self.place_bet(category, Chips::units(self.selected_chip))
    }

    /// Снять все ставки. Возвращает сумму возврата.
    pub fn clear_bets(&mut self) -> Result<Chips, EngineError> {
        self.ensure_phase(RoundPhase::Betting, "clear_bets")?;
        Ok(self.ledger.clear_bets())
    }

    /// Повторить ставки прошлого раунда. Возвращает списанную сумму.
    pub fn repeat_last_bet(&mut self) -> Result<Chips, EngineError> {
        self.ensure_phase(RoundPhase::Betting, "repeat_last_bet")?;
        self.ledger.repeat_last_bet(&self.odds, &mut self.rng)
    }

    /// Сдача и расчёт раунда целиком.
    ///
    /// Игрок получает две карты, затем банкир две, затем добор по таблице.
    pub fn start_deal(&mut self) -> Result<&RoundResult, EngineError> {
        self.ensure_phase(RoundPhase::Betting, "start_deal")?;
        if self.ledger.bets.is_empty() {
            return Err(EngineError::NoBets);
        }

        let previous_last = self.ledger.last;
        let shoe_backup = self.shoe.clone();
        let log_backup = self.log.clone();
        let reshuffled_backup = self.reshuffled;

        match self.deal_and_settle() {
            Ok(()) => self
                .last_result
                .as_ref()
                .ok_or(EngineError::InvariantViolation("settled round has no result")),
            Err(e) => {
                // Откат: сдача не должна оставлять полуразданный стол.
                error!(error = %e, "deal aborted, restoring betting state");
                self.ledger.last = previous_last;
                self.shoe = shoe_backup;
                self.log = log_backup;
                self.reshuffled = reshuffled_backup;
                self.player.clear();
                self.banker.clear();
                self.phase = RoundPhase::Betting;
                Err(e)
            }
        }
    }

    /// Продолжить после результата: новый раунд с авто-повтором ставок.
    pub fn continue_after_result(&mut self) -> Result<bool, EngineError> {
        self.ensure_phase(RoundPhase::Settled, "continue_after_result")?;
        self.new_round()
    }

    // ------------------------------------------------------------------
    // Внутренние шаги раунда
    // ------------------------------------------------------------------

    fn deal_and_settle(&mut self) -> Result<(), EngineError> {
        self.reshuffled = false;
        self.log.clear();
        self.log.push(RoundEventKind::RoundStarted {
            round_id: self.round_id,
        });

        self.ledger.snapshot_last_round();
        self.phase = RoundPhase::Dealing;

        let bonus = self.ledger.bonus;
        if bonus.bonus_multiplier.is_some() || bonus.super_multiplier.is_some() {
            self.log.push(RoundEventKind::MultipliersRevealed {
                bonus: bonus.bonus_multiplier,
                super_: bonus.super_multiplier,
            });
        }

        let mut player = Hand::new();
        let mut banker = Hand::new();

        for side in [Side::Player, Side::Player, Side::Banker, Side::Banker] {
            let card = self.draw_card(side, &player, &banker)?;
            match side {
                Side::Player => player.push(card),
                Side::Banker => banker.push(card),
            }
        }

        {
            let Self {
                shoe,
                rng,
                log,
                reshuffled,
                ..
            } = self;
            // Для события нужен счёт после карты, поэтому считаем его по копии руки.
            let mut player_view = player.clone();
            let mut banker_view = banker.clone();
            rules::resolve_third_card(&mut player, &mut banker, |side| {
                let card = draw_logged(&mut *shoe, &mut *rng, &mut *log, &mut *reshuffled)?;
                let score_after = match side {
                    Side::Player => {
                        player_view.push(card);
                        player_view.score()
                    }
                    Side::Banker => {
                        banker_view.push(card);
                        banker_view.score()
                    }
                };
                log.push(RoundEventKind::CardDealt {
                    side,
                    card,
                    score_after,
                });
                Ok::<Card, EngineError>(card)
            })?;
        }

        self.player = player;
        self.banker = banker;
        self.settle_round();
        Ok(())
    }

    fn draw_card(&mut self, side: Side, player: &Hand, banker: &Hand) -> Result<Card, EngineError> {
        let card = draw_logged(
            &mut self.shoe,
            &mut self.rng,
            &mut self.log,
            &mut self.reshuffled,
        )?;
        let mut hand = match side {
            Side::Player => player.clone(),
            Side::Banker => banker.clone(),
        };
        hand.push(card);
        self.log.push(RoundEventKind::CardDealt {
            side,
            card,
            score_after: hand.score(),
        });
        Ok(card)
    }

    fn settle_round(&mut self) {
        let player_score = self.player.score();
        let banker_score = self.banker.score();
        let bonus: BonusState = self.ledger.bonus;
        let settlement = settle(&self.ledger.bets, &bonus, player_score, banker_score);

        self.ledger.balance += settlement.winnings;
        self.history.push(settlement.outcome);

        let mut bankroll_reset = false;
        if self.ledger.balance.is_zero() {
            info!(
                balance = %self.config.starting_balance,
                "balance depleted, bankroll restored"
            );
            self.ledger.balance = self.config.starting_balance;
            bankroll_reset = true;
        }

        info!(
            round_id = self.round_id,
            outcome = %settlement.outcome,
            player_score,
            banker_score,
            winnings = %settlement.winnings,
            balance = %self.ledger.balance,
            "round settled"
        );

        self.log.push(RoundEventKind::Settled {
            outcome: settlement.outcome,
            player_score,
            banker_score,
            winnings: settlement.winnings,
        });
        if bankroll_reset {
            self.log.push(RoundEventKind::BankrollReset {
                balance: self.ledger.balance,
            });
        }

        let net = settlement.net();
        self.last_result = Some(RoundResult {
            round_id: self.round_id,
            player_hand: self.player.clone(),
            banker_hand: self.banker.clone(),
            player_score,
            banker_score,
            outcome: settlement.outcome,
            winnings: settlement.winnings,
            total_staked: settlement.total_staked,
            net,
            breakdown: settlement.breakdown,
            bonus_multiplier: bonus.bonus_multiplier,
            super_multiplier: bonus.super_multiplier,
            fees_forfeited: settlement.fees_forfeited,
            balance_after: self.ledger.balance,
            bankroll_reset,
        });
        self.phase = RoundPhase::Settled;
    }

    /// Новый раунд: руки очищаются, шу проверяется по порогу, прошлые
    /// ставки повторяются при достаточном балансе.
    ///
    /// Возвращает true, если ставки были повторены автоматически.
    fn new_round(&mut self) -> Result<bool, EngineError> {
        let repeated = self.ledger.start_new_round(&self.odds, &mut self.rng)?;

        self.phase = RoundPhase::Betting;
        self.round_id += 1;
        self.player.clear();
        self.banker.clear();
        self.last_result = None;
        self.log.clear();

        self.reshuffled = self.shoe.reshuffle_if_needed(&mut self.rng);
        if self.reshuffled {
            self.log.push(RoundEventKind::Reshuffled {
                cards_in_shoe: self.shoe.remaining(),
            });
        }

        info!(round_id = self.round_id, repeated, "new round");
        Ok(repeated)
    }

    // ------------------------------------------------------------------
    // Запросы
    // ------------------------------------------------------------------

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn balance(&self) -> Chips {
        self.ledger.balance
    }

    pub fn bets(&self) -> &WagerSet {
        &self.ledger.bets
    }

    pub fn bonus_state(&self) -> &BonusState {
        &self.ledger.bonus
    }

    pub fn last_round_bets(&self) -> Option<&LastRound> {
        self.ledger.last.as_ref()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn can_repeat(&self) -> bool {
        self.phase == RoundPhase::Betting && self.ledger.can_repeat()
    }

    pub fn selected_chip(&self) -> u64 {
        self.selected_chip
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn banker_hand(&self) -> &Hand {
        &self.banker
    }

    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    pub fn banker_score(&self) -> u8 {
        self.banker.score()
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn reshuffle_occurred(&self) -> bool {
        self.reshuffled
    }

    /// Множители видны только с начала сдачи.
    pub fn revealed_multipliers(&self) -> (Option<Multiplier>, Option<Multiplier>) {
        match self.phase {
            RoundPhase::Betting => (None, None),
            RoundPhase::Dealing | RoundPhase::Settled => (
                self.ledger.bonus.bonus_multiplier,
                self.ledger.bonus.super_multiplier,
            ),
        }
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn history(&self) -> &OutcomeHistory {
        &self.history
    }

    pub fn round_log(&self) -> &RoundLog {
        &self.log
    }
}

/// Сдать карту из шу и записать в лог пересбор / восстановление шу.
fn draw_logged<R: RandomSource>(
    shoe: &mut Shoe,
    rng: &mut R,
    log: &mut RoundLog,
    reshuffled: &mut bool,
) -> Result<Card, EngineError> {
    let draw = shoe.draw(rng)?;
    if draw.reshuffled {
        *reshuffled = true;
        log.push(RoundEventKind::Reshuffled {
            cards_in_shoe: shoe.remaining() + 1,
        });
    }
    if draw.recovered {
        *reshuffled = true;
        log.push(RoundEventKind::InvariantViolation {
            message: EngineError::InvariantViolation("shoe unexpectedly empty").to_string(),
        });
    }
    Ok(draw.card)
}
