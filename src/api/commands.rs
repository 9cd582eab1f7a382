use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::bets::BetCategory;
use crate::domain::chips::Chips;
use crate::engine::{BaccaratEngine, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_table_view;

/// Команда от слоя отображения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Выбрать номинал фишки (в целых единицах).
    SelectChip { value: u64 },

    /// Поставить на категорию. Без `amount` ставится выбранная фишка.
    PlaceBet {
        category: BetCategory,
        amount: Option<Chips>,
    },

    /// Снять все ставки с возвратом.
    ClearBets,

    /// Повторить ставки прошлого раунда.
    RepeatLastBet,

    /// Сдать карты и рассчитать раунд.
    StartDeal,

    /// Закрыть результат и перейти к следующему раунду.
    ContinueAfterResult,
}

/// Выполнить команду над движком.
///
/// При ошибке состояние стола не меняется, ошибка уходит клиенту.
pub fn execute_command<R: RandomSource>(
    engine: &mut BaccaratEngine<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let outcome = apply(engine, &command);
    if let Err(err) = &outcome {
        warn!(?command, error = ?err, "command rejected");
    }
    outcome
}

fn apply<R: RandomSource>(
    engine: &mut BaccaratEngine<R>,
    command: &Command,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::SelectChip { value } => {
            engine.select_chip_value(*value)?;
        }
        Command::PlaceBet { category, amount } => {
            match amount {
                Some(amount) => engine.place_bet(*category, *amount)?,
                None => engine.place_selected_chip(*category)?,
            };
        }
        Command::ClearBets => {
            engine.clear_bets()?;
        }
        Command::RepeatLastBet => {
            engine.repeat_last_bet()?;
        }
        Command::StartDeal => {
            let result = engine.start_deal()?.clone();
            return Ok(CommandResponse::RoundSettled {
                table: build_table_view(engine),
                result,
                events: engine.round_log().events.clone(),
            });
        }
        Command::ContinueAfterResult => {
            engine.continue_after_result()?;
        }
    }

    Ok(CommandResponse::TableState(build_table_view(engine)))
}
