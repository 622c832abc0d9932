// src/sim/mod.rs
//! Симуляция матча для dev-CLI и тестов.
//!
//! Матч играется на `ManualClock`: время двигаем сами, события выбирает `RandomSource`.
//! С одинаковым seed результат полностью воспроизводим.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{WinkColour, WinksGameSetup};
use crate::engine::{FinishReason, GameHistory, GameStateError, PhaseKind, WinksGameState};
use crate::time_ctrl::{ManualClock, MatchController};

/// RNG интерфейс для симуляции.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    /// Равномерно случайное число из `0..sides` (0, если `sides == 0`).
    fn roll(&mut self, sides: u32) -> u32;

    /// Событие с вероятностью 1 / `one_in`.
    fn one_in(&mut self, one_in: u32) -> bool {
        one_in > 0 && self.roll(one_in) == 0
    }
}

/// Параметры симуляции.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Максимальная длительность одного хода в основное время.
    pub max_shot_ms: u32,
    /// Пауза после хода: шанс 1 / `pause_one_in`.
    pub pause_one_in: u32,
    /// Сколько длится пауза.
    pub pause_ms: u64,
    /// Досрочный конец матча: шанс 1 / `finish_one_in` на каждый ход.
    pub finish_one_in: u32,
}

impl SimConfig {
    /// Типичный матч: ход до 40 сек, редкие паузы, pot-out примерно раз на 300 ходов.
    pub const fn standard() -> Self {
        Self {
            max_shot_ms: 40_000,
            pause_one_in: 25,
            pause_ms: 60_000,
            finish_one_in: 300,
        }
    }

    /// Без досрочных концовок: матч всегда доигрывается до конца раундов.
    pub const fn full_rounds() -> Self {
        Self {
            finish_one_in: 0,
            ..Self::standard()
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Итог симуляции.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    pub final_state: WinksGameState,
    pub history: GameHistory,
    pub finish_reason: Option<FinishReason>,
    /// Кто был за столом, когда вышло основное время (None — матч кончился раньше).
    pub time_expired_on: Option<WinkColour>,
    pub shots_in_rounds: usize,
    pub started_at_ms: u64,
    pub finished_at_ms: u64,
}

pub struct MatchSimulator<R: RandomSource> {
    config: SimConfig,
    rng: R,
}

impl<R: RandomSource> MatchSimulator<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Сыграть матч целиком, начиная с `start_ms`.
    pub fn run(
        &mut self,
        setup: WinksGameSetup,
        squidge_off_winner: WinkColour,
        start_ms: u64,
    ) -> Result<SimulationReport, GameStateError> {
        let clock = ManualClock::new(start_ms);
        let mut controller = MatchController::new(setup, squidge_off_winner, clock.clone());

        // После squidge-off первым ходит победитель.
        let mut at_table = squidge_off_winner;
        let mut time_expired_on = None;

        controller.start()?;

        loop {
            match controller.state().phase_kind() {
                PhaseKind::Finished => break,
                PhaseKind::Paused => controller.start()?,
                PhaseKind::MainTime => {
                    if controller.is_time_up() {
                        controller.time_expired(at_table)?;
                        time_expired_on = Some(at_table);
                        continue;
                    }
                    if self.rng.one_in(self.config.finish_one_in) {
                        let reason = self.out_of_band_reason();
                        controller.game_finished(reason);
                        continue;
                    }

                    let remaining = controller.remaining_ms().unwrap_or(0);
                    let shot_ms = 1 + u64::from(self.rng.roll(self.config.max_shot_ms));
                    clock.advance(shot_ms.min(remaining));
                    at_table = at_table.next();

                    if self.rng.one_in(self.config.pause_one_in) {
                        controller.pause()?;
                        clock.advance(self.config.pause_ms);
                    }
                }
                PhaseKind::Rounds => {
                    let shot_ms = 1 + u64::from(self.rng.roll(self.config.max_shot_ms));
                    clock.advance(shot_ms);

                    if self.rng.one_in(self.config.finish_one_in) {
                        let reason = self.out_of_band_reason();
                        controller.game_finished(reason);
                    } else {
                        controller.shot_played()?;
                    }
                }
            }
        }

        let state = controller.state().clone();
        let history = controller.history().clone();
        debug!(
            shots = history.shots_in_rounds(),
            reason = ?state.finish_reason(),
            "simulation finished"
        );

        Ok(SimulationReport {
            finish_reason: state.finish_reason(),
            time_expired_on,
            shots_in_rounds: history.shots_in_rounds(),
            started_at_ms: start_ms,
            finished_at_ms: controller.now_ms(),
            final_state: state,
            history,
        })
    }

    fn out_of_band_reason(&mut self) -> FinishReason {
        match self.rng.roll(3) {
            0 => FinishReason::PotOut,
            1 => FinishReason::ThorpesRing,
            _ => FinishReason::Interference,
        }
    }
}
