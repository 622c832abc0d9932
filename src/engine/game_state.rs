// src/engine/game_state.rs
//! Машина состояний одного матча.
//!
//! Фазы: Paused -> MainTime -> (Paused <-> MainTime)* -> Rounds -> Finished.
//! `game_finished` переводит в Finished из любой фазы (pot-out, ring, вмешательство).
//!
//! Время сюда приходит снаружи (`now_ms`), сами часы матч не опрашивает.
//! Фасад, который читает часы, — `time_ctrl::MatchController`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{TimestampMs, WinkColour, WinksGameSetup};

use super::{FinishReason, GamePhase, GameStateError, PhaseKind};

/// Сколько полных кругов играется после основного времени.
pub const ROUND_LIMIT: u8 = 5;

/// Текущее состояние матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinksGameState {
    setup: WinksGameSetup,
    squidge_off_winner: WinkColour,
    phase: GamePhase,
}

impl WinksGameState {
    /// Новый матч: таймер на паузе, в банке весь лимит времени из сетапа.
    pub fn new(setup: WinksGameSetup, squidge_off_winner: WinkColour) -> Self {
        let time_remaining_ms = setup.time_limit_ms;
        Self {
            setup,
            squidge_off_winner,
            phase: GamePhase::Paused { time_remaining_ms },
        }
    }

    pub fn setup(&self) -> &WinksGameSetup {
        &self.setup
    }

    pub fn squidge_off_winner(&self) -> WinkColour {
        self.squidge_off_winner
    }

    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_finished(&self) -> bool {
        self.phase_kind() == PhaseKind::Finished
    }

    /// Остаток времени (только в Paused).
    pub fn time_remaining_ms(&self) -> Option<u64> {
        match self.phase {
            GamePhase::Paused { time_remaining_ms } => Some(time_remaining_ms),
            _ => None,
        }
    }

    /// Момент окончания основного времени (только в MainTime).
    pub fn end_time_ms(&self) -> Option<TimestampMs> {
        match self.phase {
            GamePhase::MainTime { end_time_ms } => Some(end_time_ms),
            _ => None,
        }
    }

    /// Номер текущего раунда (только в Rounds).
    pub fn current_round(&self) -> Option<u8> {
        match self.phase {
            GamePhase::Rounds { current_round, .. } => Some(current_round),
            _ => None,
        }
    }

    /// Чей сейчас ход (только в Rounds).
    pub fn colour_playing(&self) -> Option<WinkColour> {
        match self.phase {
            GamePhase::Rounds { colour_playing, .. } => Some(colour_playing),
            _ => None,
        }
    }

    /// Причина окончания (только в Finished).
    pub fn finish_reason(&self) -> Option<FinishReason> {
        match self.phase {
            GamePhase::Finished { reason } => Some(reason),
            _ => None,
        }
    }

    /// Сколько времени осталось на момент `now_ms` — для табло.
    ///
    /// Paused: банк; MainTime: до дедлайна (не меньше нуля); иначе None.
    pub fn remaining_ms(&self, now_ms: TimestampMs) -> Option<u64> {
        match self.phase {
            GamePhase::Paused { time_remaining_ms } => Some(time_remaining_ms),
            GamePhase::MainTime { end_time_ms } => Some(end_time_ms.saturating_sub(now_ms)),
            _ => None,
        }
    }

    /// Дошёл ли таймер до нуля. Вызывать `time_expired` — забота драйвера.
    pub fn is_time_up(&self, now_ms: TimestampMs) -> bool {
        match self.phase {
            GamePhase::MainTime { end_time_ms } => now_ms >= end_time_ms,
            _ => false,
        }
    }

    fn illegal(&self, expected: PhaseKind) -> GameStateError {
        GameStateError::IllegalState {
            expected,
            actual: self.phase_kind(),
        }
    }

    fn verify_phase(&self, expected: PhaseKind) -> Result<(), GameStateError> {
        if self.phase_kind() != expected {
            return Err(self.illegal(expected));
        }
        Ok(())
    }

    /// Запустить таймер. Только из Paused.
    pub fn start(&mut self, now_ms: TimestampMs) -> Result<(), GameStateError> {
        let GamePhase::Paused { time_remaining_ms } = self.phase else {
            return Err(self.illegal(PhaseKind::Paused));
        };

        let end_time_ms = now_ms.saturating_add(time_remaining_ms);
        self.phase = GamePhase::MainTime { end_time_ms };

        debug!(now_ms, end_time_ms, "main time started");
        Ok(())
    }

    /// Поставить таймер на паузу. Только из MainTime.
    ///
    /// Если дедлайн уже прошёл, в банк кладём ноль.
    pub fn pause(&mut self, now_ms: TimestampMs) -> Result<(), GameStateError> {
        let GamePhase::MainTime { end_time_ms } = self.phase else {
            return Err(self.illegal(PhaseKind::MainTime));
        };

        let time_remaining_ms = end_time_ms.saturating_sub(now_ms);
        self.phase = GamePhase::Paused { time_remaining_ms };

        debug!(now_ms, time_remaining_ms, "main time paused");
        Ok(())
    }

    /// Основное время вышло. Только из MainTime.
    ///
    /// `colour_playing` — кто сейчас ходит (или только что закончил ход).
    /// Порядок важен: раунд = 0, цвет, и сразу один шаг `advance_round`.
    pub fn time_expired(&mut self, colour_playing: WinkColour) -> Result<(), GameStateError> {
        self.verify_phase(PhaseKind::MainTime)?;

        self.phase = GamePhase::Rounds {
            current_round: 0,
            colour_playing,
        };
        debug!(%colour_playing, "time expired, entering rounds");

        self.advance_round();
        Ok(())
    }

    /// Игрок закончил ход в завершающих раундах. Только из Rounds.
    pub fn shot_played(&mut self) -> Result<(), GameStateError> {
        self.verify_phase(PhaseKind::Rounds)?;
        self.advance_round();
        Ok(())
    }

    /// Матч окончен. Можно вызывать в любой фазе.
    pub fn game_finished(&mut self, reason: FinishReason) {
        let from = self.phase_kind();
        self.phase = GamePhase::Finished { reason };
        info!(%from, ?reason, "game finished");
    }

    /// Шаг раундов.
    ///
    /// Раунд засчитывается, когда очередь возвращается к победителю squidge-off.
    /// Если он уже отыграл `ROUND_LIMIT` раундов (или больше) — матч окончен.
    fn advance_round(&mut self) {
        let GamePhase::Rounds {
            mut current_round,
            colour_playing,
        } = self.phase
        else {
            return;
        };

        if colour_playing == self.squidge_off_winner {
            if current_round >= ROUND_LIMIT {
                self.game_finished(FinishReason::RoundsComplete);
                return;
            }
            current_round += 1;
        }

        let next = colour_playing.next();
        self.phase = GamePhase::Rounds {
            current_round,
            colour_playing: next,
        };
        debug!(current_round, colour_playing = %next, "turn advanced");
    }
}
