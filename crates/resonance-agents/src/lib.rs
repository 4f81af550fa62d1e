//! # Resonance-Agents
//!
//! The cooperating agents of the Resonance Engine.
//!
//! ## Agent flow
//!
//! ```text
//! activation (supplied or synthesized)
//!     ↓
//! [ResonanceEngine]  - lead: classify phase, update density window
//!     ↓
//! [SilenceProvider]  - depth provider: stillness metrics bundle
//!     ↓
//! [HarmonyOracle]    - compose activation, silence, visual density
//!     ↓
//! presentation bundles + TurnRecord
//! ```
//!
//! Collaborators are opaque scalar producers behind the
//! [`SilenceProvider`] trait; the engine never constructs or inspects
//! their internals.

pub mod agent;
pub mod config;
pub mod engine;
pub mod presentation;
pub mod record;
pub mod stillness_agent;

pub use agent::*;
pub use config::*;
pub use engine::*;
pub use presentation::*;
pub use record::*;
pub use stillness_agent::*;
