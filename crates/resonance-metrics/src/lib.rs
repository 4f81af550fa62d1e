//! # Resonance-Metrics
//!
//! Derived scalar scoring for the Resonance Engine.
//!
//! ## Pipeline position
//!
//! ```text
//! activation (C value)
//!     ↓
//! [phase classification]        (resonance-core)
//!     ↓
//! [StillnessCalculator]  → silence, depth, void proximity,
//!     ↓                    breath interval, abstraction
//! [HarmonyOracle]        → composite harmony score + oracle message
//! ```
//!
//! Everything here is a pure function of its declared inputs. Bounded
//! scores are clamped into range at each computation's boundary rather
//! than validated up front.

pub mod harmony;
pub mod stillness;
pub mod window;

pub use harmony::*;
pub use stillness::*;
pub use window::*;
