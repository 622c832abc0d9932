use serde::{Deserialize, Serialize};

use crate::domain::WinkColour;
use crate::engine::FinishReason;
use crate::time_ctrl::{MatchController, TimeSource};

use super::dto::{build_game_view, GameStateDto};
use super::errors::ApiError;

/// Команда от UI/таймера.
///
/// Цвета приходят текстом (каноническое имя) и парсятся через
/// `WinkColour::from_name` — неизвестное имя это BadRequest, без подстановки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameCommand {
    /// Кнопка "старт" / снять с паузы.
    Start,

    /// Кнопка "пауза".
    Pause,

    /// Таймер дошёл до нуля на ходу `colour`.
    TimeExpired { colour: String },

    /// Игрок закончил ход в раундах.
    ShotPlayed,

    /// Досрочное окончание матча.
    GameFinished { reason: FinishReason },
}

impl GameCommand {
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Применить команду к матчу и вернуть свежий DTO для табло.
pub fn apply_command<C: TimeSource>(
    controller: &mut MatchController<C>,
    command: GameCommand,
) -> Result<GameStateDto, ApiError> {
    match command {
        GameCommand::Start => controller.start()?,
        GameCommand::Pause => controller.pause()?,
        GameCommand::TimeExpired { colour } => {
            let colour = WinkColour::from_name(&colour)?;
            controller.time_expired(colour)?;
        }
        GameCommand::ShotPlayed => controller.shot_played()?,
        GameCommand::GameFinished { reason } => controller.game_finished(reason),
    }

    Ok(build_game_view(controller.state(), controller.now_ms()))
}
