//! Движок часов матча по tiddlywinks ("winks").
//!
//! Здесь связываем:
//! - доменную модель (цвета, сетап матча);
//! - машину состояний матча (`engine::WinksGameState`);
//! - контроль времени (`time_ctrl`) и фасад `MatchController`;
//! - внешний API для UI/таймера (`api`);
//! - симуляцию матча для dev-CLI (`sim`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
#[cfg(not(target_arch = "wasm32"))]
pub mod sim;
pub mod time_ctrl;

pub use domain::{GameFormat, UnknownColourError, WinkColour, WinksGameSetup};
pub use engine::{FinishReason, GamePhase, GameStateError, PhaseKind, WinksGameState};
pub use time_ctrl::MatchController;
