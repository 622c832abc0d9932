//! Доменная модель матча: цвета игроков и сетап.

pub mod colour;
pub mod setup;

/// Unix timestamp в миллисекундах.
pub type TimestampMs = u64;

pub use colour::*;
pub use setup::*;
