use serde::{Deserialize, Serialize};

use crate::domain::{TimestampMs, WinkColour};

use super::FinishReason;

/// Тип события в матче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameEventKind {
    /// Таймер запущен (или снят с паузы).
    Started { end_time_ms: TimestampMs },

    /// Таймер на паузе.
    Paused { time_remaining_ms: u64 },

    /// Основное время вышло на ходу `colour`.
    TimeExpired { colour: WinkColour },

    /// Ход в завершающих раундах.
    ShotPlayed {
        colour: WinkColour,
        /// Раунд и очередь после хода (None, если ход закончил матч).
        round_after: Option<u8>,
        next_colour: Option<WinkColour>,
    },

    /// Матч окончен.
    Finished { reason: FinishReason },
}

/// Событие матча с порядковым номером и временем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEvent {
    pub index: usize,
    pub at_ms: TimestampMs,
    pub kind: GameEventKind,
}

/// Полная история матча.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, at_ms: TimestampMs, kind: GameEventKind) {
        let idx = self.events.len();
        self.events.push(GameEvent {
            index: idx,
            at_ms,
            kind,
        });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Сколько ходов сыграно в завершающих раундах.
    pub fn shots_in_rounds(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.kind, GameEventKind::ShotPlayed { .. }))
            .count()
    }
}
