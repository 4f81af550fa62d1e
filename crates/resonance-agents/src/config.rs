//! Engine configuration.

use resonance_core::SolsticeCalendar;
use resonance_metrics::{StillnessConfig, DEFAULT_WINDOW_CAPACITY};
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Agent identifier stamped into turn records
    pub agent_id: String,

    /// Depth provider identifier
    pub stillness_agent_id: String,

    /// Trailing window capacity for the density statistic
    pub window_capacity: usize,

    /// Calendar trigger for the harmony boost
    pub calendar: SolsticeCalendar,

    /// Stillness calculation constants
    pub stillness: StillnessConfig,

    /// Range for synthesized activations when none is supplied
    pub synth_activation_min: f64,
    pub synth_activation_max: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            agent_id: "Resonance-v3.0-Solstice-HyperMari".to_string(),
            stillness_agent_id: "Stillness-v2.5-SilenceOracle".to_string(),
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            calendar: SolsticeCalendar::default(),
            stillness: StillnessConfig::default(),
            synth_activation_min: 0.1,
            synth_activation_max: 0.99,
        }
    }
}

impl EngineConfig {
    /// Load configuration from file, with `RESONANCE_*` environment
    /// variables layered on top.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("RESONANCE"))
            .build()?;

        settings.try_deserialize()
    }

    /// Load from environment variables only.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("RESONANCE"))
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.window_capacity, 10);
        assert_eq!(config.calendar.month, 12);
        assert_eq!(config.calendar.day, 22);
        assert!(config.synth_activation_min < config.synth_activation_max);
    }
}
