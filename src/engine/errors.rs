use thiserror::Error;

use super::PhaseKind;

/// Ошибки машины состояний матча.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameStateError {
    /// Операцию вызвали не в той фазе. Это баг вызывающей стороны (UI/таймер),
    /// а не временный сбой: не ретраим и не глотаем.
    #[error("Illegal game state. Expected {expected} but currently {actual}")]
    IllegalState {
        expected: PhaseKind,
        actual: PhaseKind,
    },

    /// Номер раунда вне 0..=limit (битый снапшот из хранилища/JSON).
    #[error("Round {round} is out of range, limit is {limit}")]
    RoundOutOfRange { round: u8, limit: u8 },
}
