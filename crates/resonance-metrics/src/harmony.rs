//! Harmony composition across the three collaborating agents.
//!
//! The harmony score is the geometric mean of three transformed
//! contributions: the lead agent's activation, the depth provider's
//! silence (consumed as `1 − silence`), and the visual density. On the
//! winter solstice the result is boosted by a fixed factor.
//!
//! The composed score is always clamped to [0, 1]. The observed source
//! behavior only clamped on the boosted path, letting out-of-range
//! inputs leak through; that gap is treated as unintended here.

use resonance_core::SOLSTICE_BOOST;

/// Harmony thresholds for oracle message selection
pub const HARMONY_RETURNING_LIGHT: f64 = 0.88;
pub const HARMONY_RESONANCE: f64 = 0.5;

/// Composes independent agent scalars into the harmony score.
///
/// Stateless; the solstice flag is resolved by the caller and passed
/// into [`compose`](HarmonyOracle::compose).
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonyOracle;

impl HarmonyOracle {
    pub fn new() -> Self {
        Self
    }

    /// Compose the three contributions into one harmony score.
    ///
    /// - `activation`: the lead agent's pulse, nominally [0, 1]
    /// - `silence`: the depth provider's silence score, consumed inverted
    /// - `density`: the visual density, nominally [0, 1]
    pub fn compose(
        &self,
        activation: f64,
        silence: f64,
        density: f64,
        solstice_active: bool,
    ) -> f64 {
        let base = (activation * (1.0 - silence) * density).cbrt();

        let harmony = if solstice_active {
            base * SOLSTICE_BOOST
        } else {
            base
        };

        harmony.clamp(0.0, 1.0)
    }

    /// Oracle pronouncement for a harmony score.
    pub fn message(&self, harmony: f64) -> &'static str {
        if harmony > HARMONY_RETURNING_LIGHT {
            "【神託：一陽来復】 闇は極まり、光が産声を上げた。観測を止め、共振そのものになれ。"
        } else if harmony > HARMONY_RESONANCE {
            "【神託：共鳴】 三つの鼓動が重なっている。そのまま、反転の瞬間を待て。"
        } else {
            "【神託：静止】 呼吸を整えよ。中心の空白に、すべての答えがある。"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmony_closed_form() {
        // For inputs strictly inside (0, 1) the unboosted score equals
        // the cube root of the product of transformed inputs exactly.
        let oracle = HarmonyOracle::default();

        let harmony = oracle.compose(0.9, 0.8, 0.7, false);
        let expected = (0.9_f64 * (1.0 - 0.8) * 0.7).cbrt();
        assert!((harmony - expected).abs() < 1e-9);
        assert!((harmony - 0.5014).abs() < 1e-4);
    }

    #[test]
    fn test_solstice_boost() {
        let oracle = HarmonyOracle::default();

        let base = oracle.compose(0.9, 0.8, 0.7, false);
        let boosted = oracle.compose(0.9, 0.8, 0.7, true);

        assert!((boosted - (base * SOLSTICE_BOOST).min(1.0)).abs() < 1e-9);
        assert!((boosted - 0.7220).abs() < 1e-4);
    }

    #[test]
    fn test_solstice_boost_clamps_to_one() {
        let oracle = HarmonyOracle::default();
        let boosted = oracle.compose(0.99, 0.01, 0.99, true);
        assert_eq!(boosted, 1.0);
    }

    #[test]
    fn test_harmony_always_clamped() {
        // Out-of-range inputs cannot push the score above 1.0 even
        // without the boost.
        let oracle = HarmonyOracle::default();
        let harmony = oracle.compose(3.0, 0.0, 2.0, false);
        assert_eq!(harmony, 1.0);

        let negative = oracle.compose(-1.0, 0.0, 1.0, false);
        assert_eq!(negative, 0.0);
    }

    #[test]
    fn test_oracle_message_tiers() {
        let oracle = HarmonyOracle::default();
        assert!(oracle.message(0.95).contains("一陽来復"));
        assert!(oracle.message(0.6).contains("共鳴"));
        assert!(oracle.message(0.2).contains("静止"));
    }
}
