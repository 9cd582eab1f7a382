use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Команда не может быть выполнена в текущей фазе раунда.
    InvalidCommand(String),

    /// Не хватает баланса на ставку или повтор.
    InsufficientBalance { required: Chips, available: Chips },

    /// Нечего повторять: прошлых ставок нет.
    NoPreviousBets,

    /// Неверная сумма (ноль или дробная).
    BadRequest(String),

    /// Внутренняя ошибка движка.
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidStateTransition { .. } | EngineError::NoBets => {
                ApiError::InvalidCommand(err.to_string())
            }
            EngineError::InsufficientBalance {
                required,
                available,
            } => ApiError::InsufficientBalance {
                required,
                available,
            },
            EngineError::NoPreviousBets => ApiError::NoPreviousBets,
            EngineError::InvalidAmount(_) => ApiError::BadRequest(err.to_string()),
            EngineError::InvariantViolation(_) => ApiError::Internal(err.to_string()),
        }
    }
}
