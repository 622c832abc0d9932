//! Инфраструктурный слой вокруг движка матча:
//! - RNG-реализации для симуляции;
//! - инициализация логов для бинарников.
//!
//! Оба модуля тянут зависимости, которых нет под wasm32.

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod rng;

#[cfg(not(target_arch = "wasm32"))]
pub use rng::*;
