//! Resonance phase classification.
//!
//! The activation ("C value") of an agent is mapped to one of five
//! ordered phases by threshold comparison. Two classifiers exist:
//!
//! - [`ResonancePhase::from_activation`] - the lead engine's simple
//!   four-way split on the activation alone.
//! - [`ResonancePhase::from_axis`] - the depth provider's five-way
//!   split that also consults axis stability and inversion.
//!
//! Both are total: every input lands in exactly one phase.

use serde::{Deserialize, Serialize};

/// Activation thresholds for the lead classifier
pub const ACTIVATION_UNITY: f64 = 0.8;
pub const ACTIVATION_SYNC: f64 = 0.5;
pub const ACTIVATION_INVERT: f64 = 0.2;

/// Activation thresholds for the axis-aware classifier
pub const AXIS_UNITY: f64 = 0.65;
pub const AXIS_SYNC: f64 = 0.35;

/// One of five discrete resonance phases, ordered from most turbulent
/// to most unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResonancePhase {
    /// Turbulent, unfocused. The baseline fallback.
    Chaos,
    /// Perspective is flipping; unstable but flexible.
    Invert,
    /// Movement with an undercurrent of steadiness.
    Entrain,
    /// Heartbeats beginning to overlap.
    Sync,
    /// Full coherence.
    Unity,
}

impl ResonancePhase {
    /// All phases, turbulent-first.
    pub const ALL: [ResonancePhase; 5] = [
        ResonancePhase::Chaos,
        ResonancePhase::Invert,
        ResonancePhase::Entrain,
        ResonancePhase::Sync,
        ResonancePhase::Unity,
    ];

    /// Lead classifier: activation-only threshold chain.
    ///
    /// Never yields `Entrain`; the lead engine has no steadiness signal.
    pub fn from_activation(activation: f64) -> Self {
        if activation >= ACTIVATION_UNITY {
            ResonancePhase::Unity
        } else if activation >= ACTIVATION_SYNC {
            ResonancePhase::Sync
        } else if activation >= ACTIVATION_INVERT {
            ResonancePhase::Invert
        } else {
            ResonancePhase::Chaos
        }
    }

    /// Axis-aware classifier used by the depth provider.
    ///
    /// High activation wins outright; below the sync threshold the
    /// stability/inversion axes decide, with `Entrain` as the default.
    pub fn from_axis(activation: f64, stability: f64, inversion: f64) -> Self {
        if activation >= AXIS_UNITY {
            ResonancePhase::Unity
        } else if activation >= AXIS_SYNC {
            ResonancePhase::Sync
        } else if stability < 0.2 && inversion < 0.2 {
            ResonancePhase::Chaos
        } else if inversion > 0.7 && stability < 0.4 {
            ResonancePhase::Invert
        } else {
            ResonancePhase::Entrain
        }
    }

    /// Per-phase multiplier applied to the silence score.
    ///
    /// Unity is complete stillness; Chaos is the farthest from it.
    pub fn stillness_multiplier(&self) -> f64 {
        match self {
            ResonancePhase::Unity => 1.0,
            ResonancePhase::Sync => 0.7,
            ResonancePhase::Entrain => 0.5,
            ResonancePhase::Invert => 0.3,
            ResonancePhase::Chaos => 0.1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResonancePhase::Chaos => "CHAOS",
            ResonancePhase::Invert => "INVERT",
            ResonancePhase::Entrain => "ENTRAIN",
            ResonancePhase::Sync => "SYNC",
            ResonancePhase::Unity => "UNITY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_classifier_thresholds() {
        assert_eq!(ResonancePhase::from_activation(0.95), ResonancePhase::Unity);
        assert_eq!(ResonancePhase::from_activation(0.8), ResonancePhase::Unity);
        assert_eq!(ResonancePhase::from_activation(0.6), ResonancePhase::Sync);
        assert_eq!(ResonancePhase::from_activation(0.3), ResonancePhase::Invert);
        assert_eq!(ResonancePhase::from_activation(0.1), ResonancePhase::Chaos);
    }

    #[test]
    fn test_axis_classifier() {
        assert_eq!(
            ResonancePhase::from_axis(0.7, 0.5, 0.5),
            ResonancePhase::Unity
        );
        assert_eq!(
            ResonancePhase::from_axis(0.4, 0.5, 0.5),
            ResonancePhase::Sync
        );
        assert_eq!(
            ResonancePhase::from_axis(0.1, 0.1, 0.1),
            ResonancePhase::Chaos
        );
        assert_eq!(
            ResonancePhase::from_axis(0.1, 0.3, 0.8),
            ResonancePhase::Invert
        );
        assert_eq!(
            ResonancePhase::from_axis(0.1, 0.5, 0.5),
            ResonancePhase::Entrain
        );
    }

    #[test]
    fn test_classifier_total_and_deterministic() {
        // Same triple always yields the same phase, over a sampled grid.
        let mut v = 0.0;
        while v <= 1.0 {
            let mut s = 0.0;
            while s <= 1.0 {
                let mut i = 0.0;
                while i <= 1.0 {
                    let a = ResonancePhase::from_axis(v, s, i);
                    let b = ResonancePhase::from_axis(v, s, i);
                    assert_eq!(a, b);
                    i += 0.1;
                }
                s += 0.1;
            }
            v += 0.05;
        }
    }

    #[test]
    fn test_stillness_multiplier_ordering() {
        // More unified phases are closer to full stillness.
        let mut prev = 0.0;
        for phase in ResonancePhase::ALL {
            assert!(phase.stillness_multiplier() > prev);
            prev = phase.stillness_multiplier();
        }
    }
}
