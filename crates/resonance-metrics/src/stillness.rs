//! Stillness metric calculation.
//!
//! The stillness bundle is the depth provider's contribution to the
//! engine: five derived scalars computed from the activation, its
//! classified phase, and the two axis inputs (stability, inversion).
//!
//! All [0,1]-bounded scores are clamped after computation. The breath
//! interval is the one exception, bounded to [2.0, 8.0] seconds by
//! construction.

use resonance_core::ResonancePhase;
use serde::{Deserialize, Serialize};

/// Stillness calculation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StillnessConfig {
    /// Weight subtracted per unit of anxiety when deriving the activation
    pub anxiety_penalty: f64,
    /// Multiplier applied to the silence score on the trigger date
    pub solstice_silence_boost: f64,
    /// Activation threshold for the void short-circuit
    pub void_activation_threshold: f64,
    /// Silence threshold for the void short-circuit
    pub void_silence_threshold: f64,
    /// Depth threshold for the void short-circuit
    pub void_depth_threshold: f64,
    /// Shortest breath interval (seconds)
    pub breath_min_secs: f64,
    /// Longest breath interval (seconds)
    pub breath_max_secs: f64,
}

impl Default for StillnessConfig {
    fn default() -> Self {
        Self {
            anxiety_penalty: 0.5,
            solstice_silence_boost: 1.2,
            void_activation_threshold: 0.85,
            void_silence_threshold: 0.9,
            void_depth_threshold: 0.85,
            breath_min_secs: 2.0,
            breath_max_secs: 8.0,
        }
    }
}

/// The derived stillness scores for one turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StillnessMetrics {
    /// Tendency toward silence [0, 1]
    pub silence_score: f64,
    /// Qualitative depth of the pause [0, 1]
    pub depth_score: f64,
    /// Proximity to the axis-free void state [0, 1]
    pub void_proximity: f64,
    /// Breathing interval in seconds [2.0, 8.0]
    pub breath_interval: f64,
    /// How far past words the state is [0, 1]
    pub abstraction_level: f64,
}

impl StillnessMetrics {
    /// The void state is reached at near-total silence and depth.
    pub fn is_void(&self) -> bool {
        self.void_proximity > 0.9
    }
}

/// Stillness metric calculator
pub struct StillnessCalculator {
    config: StillnessConfig,
}

impl StillnessCalculator {
    pub fn new(config: StillnessConfig) -> Self {
        Self { config }
    }

    /// Derive the activation from its weighted inputs.
    ///
    /// activation = presence · humility − penalty · anxiety, clamped to [0, 1].
    pub fn activation(&self, presence: f64, humility: f64, anxiety: f64) -> f64 {
        let coexistence = presence * humility;
        (coexistence - anxiety * self.config.anxiety_penalty).clamp(0.0, 1.0)
    }

    /// Silence score: activation scaled by the phase multiplier and an
    /// affine function of axis stability, optionally boosted on the
    /// trigger date.
    pub fn silence_score(
        &self,
        activation: f64,
        phase: ResonancePhase,
        stability: f64,
        solstice_active: bool,
    ) -> f64 {
        let mut silence = activation * phase.stillness_multiplier();
        silence *= 0.7 + 0.3 * stability;

        if solstice_active {
            silence = (silence * self.config.solstice_silence_boost).min(1.0);
        }

        silence.clamp(0.0, 1.0)
    }

    /// Depth score: geometric mean of activation and silence, deepened
    /// by an affine function of the inversion axis.
    pub fn depth_score(&self, activation: f64, silence_score: f64, inversion: f64) -> f64 {
        let base_depth = (activation * silence_score).sqrt();
        (base_depth * (0.6 + 0.4 * inversion)).clamp(0.0, 1.0)
    }

    /// Void proximity: saturates to 1.0 when all three underlying
    /// scalars simultaneously clear their high thresholds, otherwise
    /// their arithmetic mean.
    pub fn void_proximity(&self, silence: f64, depth: f64, activation: f64) -> f64 {
        if activation > self.config.void_activation_threshold
            && silence > self.config.void_silence_threshold
            && depth > self.config.void_depth_threshold
        {
            return 1.0;
        }

        (silence + depth + activation) / 3.0
    }

    /// Breath interval: linear interpolation over [min, max] seconds
    /// driven by the silence score. No clamp needed; silence is bounded.
    pub fn breath_interval(&self, silence: f64) -> f64 {
        self.config.breath_min_secs
            + (self.config.breath_max_secs - self.config.breath_min_secs) * silence
    }

    /// Abstraction level: full at Unity, scaled activation below.
    pub fn abstraction_level(&self, activation: f64, phase: ResonancePhase) -> f64 {
        match phase {
            ResonancePhase::Unity => 1.0,
            ResonancePhase::Sync => activation * 0.8,
            _ => activation * 0.5,
        }
    }

    /// Compute the full bundle for one turn.
    pub fn calculate(
        &self,
        activation: f64,
        phase: ResonancePhase,
        stability: f64,
        inversion: f64,
        solstice_active: bool,
    ) -> StillnessMetrics {
        let silence_score = self.silence_score(activation, phase, stability, solstice_active);
        let depth_score = self.depth_score(activation, silence_score, inversion);
        let void_proximity = self.void_proximity(silence_score, depth_score, activation);
        let breath_interval = self.breath_interval(silence_score);
        let abstraction_level = self.abstraction_level(activation, phase);

        StillnessMetrics {
            silence_score,
            depth_score,
            void_proximity,
            breath_interval,
            abstraction_level,
        }
    }

    pub fn config(&self) -> &StillnessConfig {
        &self.config
    }
}

impl Default for StillnessCalculator {
    fn default() -> Self {
        Self::new(StillnessConfig::default())
    }
}
