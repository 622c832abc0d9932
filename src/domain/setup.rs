// src/domain/setup.rs
//! Сетап матча: формат игры и лимит времени.
//!
//! Здесь только "правила" матча, без состояния. Сам сетап собирает внешний
//! UI (форма перед матчем), движок его только читает.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Формат матча.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameFormat {
    /// Один на один: каждый игрок ведёт два цвета.
    Singles,
    /// Пары: четыре игрока, у каждого свой цвет.
    Pairs,
}

/// Ошибки сетапа.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid game setup: {0}")]
    Invalid(String),

    #[error("Malformed game setup JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Сетап одного матча.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinksGameSetup {
    pub format: GameFormat,
    /// Лимит основного времени в миллисекундах.
    pub time_limit_ms: u64,
    /// Подпись для табло (название турнира, номер стола и т.п.).
    #[serde(default)]
    pub label: Option<String>,
}

impl WinksGameSetup {
    pub const MINUTE_MS: u64 = 60 * 1000;

    /// Строгий конструктор.
    pub const fn new(format: GameFormat, time_limit_ms: u64) -> Self {
        Self {
            format,
            time_limit_ms,
            label: None,
        }
    }

    /// Стандартный одиночный матч: 20 минут.
    pub const fn singles() -> Self {
        Self::new(GameFormat::Singles, 20 * Self::MINUTE_MS)
    }

    /// Стандартный парный матч: 25 минут.
    pub const fn pairs() -> Self {
        Self::new(GameFormat::Pairs, 25 * Self::MINUTE_MS)
    }

    /// Пресет по формату.
    pub const fn from_format(format: GameFormat) -> Self {
        match format {
            GameFormat::Singles => Self::singles(),
            GameFormat::Pairs => Self::pairs(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.time_limit_ms == 0 {
            return Err(SetupError::Invalid("time_limit_ms = 0".into()));
        }
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err(SetupError::Invalid("label is empty".into()));
            }
        }
        Ok(())
    }

    /// Разобрать сетап из JSON и сразу провалидировать.
    pub fn from_json(raw: &str) -> Result<Self, SetupError> {
        let setup: Self = serde_json::from_str(raw)?;
        setup.validate()?;
        Ok(setup)
    }
}
