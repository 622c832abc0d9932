// src/engine/phase.rs

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{TimestampMs, WinkColour};

use super::{GameStateError, ROUND_LIMIT};

/// Почему матч закончился.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Отыграны все завершающие раунды.
    RoundsComplete,
    /// Один из цветов загнал все виньки в чашку.
    PotOut,
    /// Thorpe's ring.
    ThorpesRing,
    /// Умышленное вмешательство в положение виньков.
    Interference,
}

/// Фаза матча вместе с полями, которые имеют смысл только в ней.
///
/// При десериализации номер раунда проверяется (`current_round <= ROUND_LIMIT`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "phase", rename_all = "snake_case", try_from = "RawGamePhase")]
pub enum GamePhase {
    /// Таймер стоит, остаток времени "в банке".
    Paused { time_remaining_ms: u64 },
    /// Таймер идёт к дедлайну.
    MainTime { end_time_ms: TimestampMs },
    /// Основное время вышло, играем завершающие раунды.
    Rounds {
        current_round: u8,
        colour_playing: WinkColour,
    },
    /// Терминальная фаза.
    Finished { reason: FinishReason },
}

/// Непроверенная фаза в том виде, как она лежит в JSON.
#[derive(Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
enum RawGamePhase {
    Paused { time_remaining_ms: u64 },
    MainTime { end_time_ms: TimestampMs },
    Rounds {
        current_round: u8,
        colour_playing: WinkColour,
    },
    Finished { reason: FinishReason },
}

impl TryFrom<RawGamePhase> for GamePhase {
    type Error = GameStateError;

    fn try_from(raw: RawGamePhase) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawGamePhase::Paused { time_remaining_ms } => GamePhase::Paused { time_remaining_ms },
            RawGamePhase::MainTime { end_time_ms } => GamePhase::MainTime { end_time_ms },
            RawGamePhase::Rounds {
                current_round,
                colour_playing,
            } => {
                if current_round > ROUND_LIMIT {
                    return Err(GameStateError::RoundOutOfRange {
                        round: current_round,
                        limit: ROUND_LIMIT,
                    });
                }
                GamePhase::Rounds {
                    current_round,
                    colour_playing,
                }
            }
            RawGamePhase::Finished { reason } => GamePhase::Finished { reason },
        })
    }
}

/// Фаза без данных — для ошибок и отображения.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Paused,
    MainTime,
    Rounds,
    Finished,
}

impl GamePhase {
    pub const fn kind(&self) -> PhaseKind {
        match self {
            GamePhase::Paused { .. } => PhaseKind::Paused,
            GamePhase::MainTime { .. } => PhaseKind::MainTime,
            GamePhase::Rounds { .. } => PhaseKind::Rounds,
            GamePhase::Finished { .. } => PhaseKind::Finished,
        }
    }
}

impl PhaseKind {
    /// Подпись для табло.
    pub const fn label(self) -> &'static str {
        match self {
            PhaseKind::Paused => "Paused",
            PhaseKind::MainTime => "Main time",
            PhaseKind::Rounds => "In rounds",
            PhaseKind::Finished => "Finished",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
