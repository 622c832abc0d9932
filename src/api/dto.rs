use serde::{Deserialize, Serialize};

use crate::domain::{GameFormat, TimestampMs, WinkColour};
use crate::engine::{FinishReason, PhaseKind, WinksGameState};

/// DTO состояния матча для табло.
///
/// Плоская запись: поля, не относящиеся к текущей фазе, — `None` (null в JSON).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateDto {
    pub phase: PhaseKind,
    /// Подпись фазы ("Paused", "Main time", "In rounds", "Finished").
    pub phase_label: String,
    pub format: GameFormat,
    pub label: Option<String>,
    pub squidge_off_winner: WinkColour,
    pub time_remaining_ms: Option<u64>,
    pub end_time_ms: Option<TimestampMs>,
    pub current_round: Option<u8>,
    pub colour_playing: Option<WinkColour>,
    pub finish_reason: Option<FinishReason>,
    /// Сколько осталось на момент построения DTO (и в Paused, и в MainTime).
    pub display_remaining_ms: Option<u64>,
}

/// Сформировать DTO на момент `now_ms`.
pub fn build_game_view(state: &WinksGameState, now_ms: TimestampMs) -> GameStateDto {
    let phase = state.phase_kind();
    GameStateDto {
        phase,
        phase_label: phase.label().to_string(),
        format: state.setup().format,
        label: state.setup().label.clone(),
        squidge_off_winner: state.squidge_off_winner(),
        time_remaining_ms: state.time_remaining_ms(),
        end_time_ms: state.end_time_ms(),
        current_round: state.current_round(),
        colour_playing: state.colour_playing(),
        finish_reason: state.finish_reason(),
        display_remaining_ms: state.remaining_ms(now_ms),
    }
}
