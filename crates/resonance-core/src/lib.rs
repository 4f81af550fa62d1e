//! # Resonance-Core
//!
//! Core types and utilities for the Resonance Engine, a set of
//! cooperating scalar calculators that classify an agent's activation
//! into resonance phases and drive the downstream stillness metrics
//! and harmony composition.

pub mod calendar;
pub mod phase;
pub mod types;

pub use calendar::*;
pub use phase::*;
pub use types::*;
