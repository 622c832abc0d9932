// src/time_ctrl/clock.rs
//! Источники "настенного" времени для матча.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::TimestampMs;

/// Откуда брать текущее время (Unix ms).
pub trait TimeSource {
    fn now_ms(&self) -> TimestampMs;
}

/// Реальные часы системы.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now_ms(&self) -> TimestampMs {
        // Часы до 1970 года считаем нулём.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| TimestampMs::try_from(d.as_millis()).unwrap_or(TimestampMs::MAX))
            .unwrap_or(0)
    }
}

/// Ручные часы для тестов и симуляции.
///
/// Клоны делят одно и то же время: тест держит у себя копию и двигает её,
/// а контроллер читает. Только для одного потока.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<TimestampMs>>,
}

impl ManualClock {
    pub fn new(start_ms: TimestampMs) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, now_ms: TimestampMs) {
        self.now_ms.set(now_ms);
    }

    /// Сдвинуть время вперёд на `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get().saturating_add(delta_ms));
    }
}

impl TimeSource for ManualClock {
    fn now_ms(&self) -> TimestampMs {
        self.now_ms.get()
    }
}
