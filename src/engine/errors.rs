use thiserror::Error;

use crate::domain::chips::Chips;
use crate::engine::game_loop::RoundPhase;

/// Ошибки движка баккары.
///
/// Любая ошибка отклоняет операцию целиком: состояние стола не меняется.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Операция {action} недопустима в фазе {phase:?}")]
    InvalidStateTransition {
        action: &'static str,
        phase: RoundPhase,
    },

    #[error("Нельзя начать сдачу без ставок")]
    NoBets,

    #[error("Недостаточно средств: нужно {required}, доступно {available}")]
    InsufficientBalance { required: Chips, available: Chips },

    #[error("Нет ставок прошлого раунда для повтора")]
    NoPreviousBets,

    #[error("Некорректная сумма ставки: {0}")]
    InvalidAmount(Chips),

    #[error("Нарушение внутреннего инварианта: {0}")]
    InvariantViolation(&'static str),
}
