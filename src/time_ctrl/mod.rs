// src/time_ctrl/mod.rs
//! Контроль времени матча.
//!
//! Здесь собираем:
//! - источники времени (`TimeSource`, `SystemClock`, `ManualClock`);
//! - фасад `MatchController`, который читает часы ровно один раз на операцию,
//!   двигает `WinksGameState` и пишет `GameHistory`.

pub mod clock;

pub use clock::{ManualClock, SystemClock, TimeSource};

use tracing::warn;

use crate::domain::{TimestampMs, WinkColour, WinksGameSetup};
use crate::engine::{FinishReason, GameEventKind, GameHistory, GameStateError, WinksGameState};

/// Высокоуровневый контроллер матча для UI/таймера.
#[derive(Clone, Debug)]
pub struct MatchController<C: TimeSource = SystemClock> {
    state: WinksGameState,
    clock: C,
    history: GameHistory,
}

impl MatchController<SystemClock> {
    /// Контроллер на системных часах.
    pub fn with_system_clock(setup: WinksGameSetup, squidge_off_winner: WinkColour) -> Self {
        Self::new(setup, squidge_off_winner, SystemClock)
    }
}

impl<C: TimeSource> MatchController<C> {
    pub fn new(setup: WinksGameSetup, squidge_off_winner: WinkColour, clock: C) -> Self {
        Self {
            state: WinksGameState::new(setup, squidge_off_winner),
            clock,
            history: GameHistory::new(),
        }
    }

    pub fn state(&self) -> &WinksGameState {
        &self.state
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now_ms(&self) -> TimestampMs {
        self.clock.now_ms()
    }

    /// Остаток времени для табло на текущий момент.
    pub fn remaining_ms(&self) -> Option<u64> {
        self.state.remaining_ms(self.clock.now_ms())
    }

    /// Таймер дошёл до нуля — драйверу пора вызвать `time_expired`.
    pub fn is_time_up(&self) -> bool {
        self.state.is_time_up(self.clock.now_ms())
    }

    /// Запустить (или снять с паузы) основное время.
    pub fn start(&mut self) -> Result<(), GameStateError> {
        let now_ms = self.clock.now_ms();
        self.state.start(now_ms).map_err(rejected("start"))?;

        let end_time_ms = self.state.end_time_ms().unwrap_or(now_ms);
        self.history.push(now_ms, GameEventKind::Started { end_time_ms });
        Ok(())
    }

    /// Пауза основного времени.
    pub fn pause(&mut self) -> Result<(), GameStateError> {
        let now_ms = self.clock.now_ms();
        self.state.pause(now_ms).map_err(rejected("pause"))?;

        let time_remaining_ms = self.state.time_remaining_ms().unwrap_or(0);
        self.history
            .push(now_ms, GameEventKind::Paused { time_remaining_ms });
        Ok(())
    }

    /// Основное время вышло на ходу `colour`.
    pub fn time_expired(&mut self, colour: WinkColour) -> Result<(), GameStateError> {
        let now_ms = self.clock.now_ms();
        self.state
            .time_expired(colour)
            .map_err(rejected("time_expired"))?;

        self.history
            .push(now_ms, GameEventKind::TimeExpired { colour });
        self.record_finish_if_needed(now_ms);
        Ok(())
    }

    /// Ход в завершающих раундах.
    pub fn shot_played(&mut self) -> Result<(), GameStateError> {
        let now_ms = self.clock.now_ms();
        let colour = self.state.colour_playing();
        self.state.shot_played().map_err(rejected("shot_played"))?;

        if let Some(colour) = colour {
            self.history.push(
                now_ms,
                GameEventKind::ShotPlayed {
                    colour,
                    round_after: self.state.current_round(),
                    next_colour: self.state.colour_playing(),
                },
            );
        }
        self.record_finish_if_needed(now_ms);
        Ok(())
    }

    /// Досрочное окончание (pot-out, ring, вмешательство).
    pub fn game_finished(&mut self, reason: FinishReason) {
        let now_ms = self.clock.now_ms();
        self.state.game_finished(reason);
        self.history.push(now_ms, GameEventKind::Finished { reason });
    }

    fn record_finish_if_needed(&mut self, now_ms: TimestampMs) {
        if let Some(reason) = self.state.finish_reason() {
            self.history.push(now_ms, GameEventKind::Finished { reason });
        }
    }
}

fn rejected(operation: &'static str) -> impl Fn(GameStateError) -> GameStateError {
    move |err| {
        warn!(operation, error = %err, "operation rejected");
        err
    }
}
