//! Движок матча: фазы, раунды, история.
//!
//! Высокоуровневый объект: `WinksGameState`
//! Основные операции:
//!   - `start` / `pause` – основное время
//!   - `time_expired` – переход в завершающие раунды
//!   - `shot_played` – ход в раундах (авто-переход в Finished)
//!   - `game_finished` – досрочное окончание

pub mod errors;
pub mod game_state;
pub mod history;
pub mod phase;

pub use errors::GameStateError;
pub use game_state::{WinksGameState, ROUND_LIMIT};
pub use history::{GameEvent, GameEventKind, GameHistory};
pub use phase::{FinishReason, GamePhase, PhaseKind};
