//! Внешний API движка матча.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (старт, пауза, ход, конец матча);
//! - DTO (dto.rs) — плоская запись для табло;
//! - ошибки (errors.rs) — то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
