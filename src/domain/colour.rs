// src/domain/colour.rs

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Цвет виньков (= игрок за столом).
///
/// Порядок ходов — один цикл из четырёх:
/// Yellow -> Blue -> Green -> Red -> Yellow.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WinkColour {
    Yellow,
    Blue,
    Green,
    Red,
}

/// Текст не является ни одним из четырёх канонических имён цвета.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown wink colour {0}")]
pub struct UnknownColourError(pub String);

impl WinkColour {
    /// Все цвета в порядке хода, начиная с жёлтого.
    pub const ALL: [WinkColour; 4] = [
        WinkColour::Yellow,
        WinkColour::Blue,
        WinkColour::Green,
        WinkColour::Red,
    ];

    /// Следующий по кругу цвет.
    pub const fn next(self) -> Self {
        match self {
            WinkColour::Yellow => WinkColour::Blue,
            WinkColour::Blue => WinkColour::Green,
            WinkColour::Green => WinkColour::Red,
            WinkColour::Red => WinkColour::Yellow,
        }
    }

    /// Каноническое имя (то, что уходит в JSON / хранилище / UI).
    pub const fn name(self) -> &'static str {
        match self {
            WinkColour::Yellow => "yellow",
            WinkColour::Blue => "blue",
            WinkColour::Green => "green",
            WinkColour::Red => "red",
        }
    }

    /// Обратное к `name()`. Регистр и пробелы не нормализуем.
    pub fn from_name(name: &str) -> Result<Self, UnknownColourError> {
        match name {
            "yellow" => Ok(WinkColour::Yellow),
            "blue" => Ok(WinkColour::Blue),
            "green" => Ok(WinkColour::Green),
            "red" => Ok(WinkColour::Red),
            other => Err(UnknownColourError(other.to_string())),
        }
    }

    /// Привести любое текстовое представление цвета к каноническому значению.
    ///
    /// Удобно, когда цвет прошёл через строку (localStorage, JSON, query-параметр)
    /// и дальше его нужно сравнивать обычным `==`.
    pub fn canonicalize(value: impl fmt::Display) -> Result<Self, UnknownColourError> {
        Self::from_name(&value.to_string())
    }
}

impl fmt::Display for WinkColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WinkColour {
    type Err = UnknownColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
