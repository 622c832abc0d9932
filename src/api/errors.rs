use serde::{Deserialize, Serialize};

use crate::domain::{SetupError, UnknownColourError};
use crate::engine::GameStateError;

/// Ошибки внешнего API (то, что отдаём UI / таймеру).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, неизвестный цвет).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе матча.
    IllegalState(String),

    /// Сетап матча не прошёл валидацию.
    InvalidSetup(String),
}

impl From<GameStateError> for ApiError {
    fn from(err: GameStateError) -> Self {
        ApiError::IllegalState(err.to_string())
    }
}

impl From<UnknownColourError> for ApiError {
    fn from(err: UnknownColourError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<SetupError> for ApiError {
    fn from(err: SetupError) -> Self {
        ApiError::InvalidSetup(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
