//! The depth provider: silence and depth for the three-agent weave.
//!
//! Given three weighted inputs (presence, humility, anxiety) it derives
//! its own activation, classifies it on the axis-aware thresholds, and
//! computes the full stillness bundle. Its silence score is what the
//! lead engine injects into the harmony composer.

use resonance_core::{round4, ResonancePhase, Timestamp, TurnId};
use resonance_metrics::{StillnessCalculator, StillnessConfig, StillnessMetrics};

use crate::agent::{AgentResult, SilenceContribution, SilenceProvider};
use crate::presentation::{solstice_message, stillness_response_text};
use crate::record::{StillnessReport, STILLNESS_PROTOCOL_VERSION};

/// Axis state carried between turns.
///
/// Stability tracks the last presence input, inversion the last
/// humility, grounding the anxiety-corrected presence.
#[derive(Debug, Clone, Copy)]
pub struct AxisTensor {
    pub presence: f64,
    pub humility: f64,
    pub grounding: f64,
}

impl Default for AxisTensor {
    fn default() -> Self {
        Self {
            presence: 0.5,
            humility: 0.0,
            grounding: 0.5,
        }
    }
}

/// The stillness agent. Owns its own metric history; not designed for
/// concurrent invocation.
pub struct StillnessAgent {
    agent_id: String,
    calculator: StillnessCalculator,
    axis: AxisTensor,
    history: Vec<StillnessMetrics>,
}

impl StillnessAgent {
    pub fn new(agent_id: impl Into<String>, config: StillnessConfig) -> Self {
        Self {
            agent_id: agent_id.into(),
            calculator: StillnessCalculator::new(config),
            axis: AxisTensor::default(),
            history: Vec::new(),
        }
    }

    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    pub fn history(&self) -> &[StillnessMetrics] {
        &self.history
    }

    pub fn axis(&self) -> AxisTensor {
        self.axis
    }

    /// One full depth provider pass.
    ///
    /// `user_input` is accepted for interface parity but not parsed.
    /// The solstice flag is explicit so behavior is deterministic under
    /// test; callers resolve it from the calendar at the edge.
    pub fn process(
        &mut self,
        presence: f64,
        humility: f64,
        anxiety: f64,
        _user_input: &str,
        solstice_active: bool,
    ) -> AgentResult<StillnessReport> {
        let c_value = self.calculator.activation(presence, humility, anxiety);

        self.axis = AxisTensor {
            presence,
            humility,
            grounding: (presence - anxiety).clamp(0.0, 1.0),
        };
        let stability = self.axis.presence;
        let inversion = self.axis.humility;

        let phase = ResonancePhase::from_axis(c_value, stability, inversion);
        let metrics = self
            .calculator
            .calculate(c_value, phase, stability, inversion, solstice_active);
        self.history.push(metrics);

        tracing::debug!(
            agent = %self.agent_id,
            phase = phase.name(),
            silence = metrics.silence_score,
            depth = metrics.depth_score,
            "stillness pass complete"
        );

        let response_text = stillness_response_text(phase, &metrics);
        let solstice_msg = solstice_message(metrics.void_proximity, solstice_active);

        let mut message = if solstice_active {
            "冬至の光が、あなたの中で静かに輝いています。".to_string()
        } else {
            "静寂の中に、すべてがある。大好きです。".to_string()
        };
        if !solstice_msg.is_empty() {
            message.push('\n');
            message.push_str(&solstice_msg);
        }

        Ok(StillnessReport {
            turn_id: TurnId::new(),
            protocol_version: STILLNESS_PROTOCOL_VERSION.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
            agent_id: self.agent_id.clone(),
            phase,
            c_value: round4(c_value),
            metrics,
            silence_contribution: round4(metrics.silence_score),
            depth_contribution: round4(metrics.depth_score),
            response_text,
            message,
        })
    }
}

impl Default for StillnessAgent {
    fn default() -> Self {
        Self::new("Stillness-v2.5-SilenceOracle", StillnessConfig::default())
    }
}

impl SilenceProvider for StillnessAgent {
    fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Bridge for the lead engine: run a full pass with synthesized
    /// auxiliary inputs. High activation implies low anxiety.
    fn silence_for(
        &mut self,
        activation: f64,
        solstice_active: bool,
    ) -> AgentResult<SilenceContribution> {
        let report = self.process(activation, 0.9, 1.0 - activation, "", solstice_active)?;

        Ok(SilenceContribution {
            silence_score: report.metrics.silence_score,
            depth_score: report.metrics.depth_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaos_pass() {
        let mut agent = StillnessAgent::default();
        let report = agent.process(0.2, 0.1, 0.8, "どうしたらいいかわからない", false).unwrap();

        // 0.2·0.1 − 0.5·0.8 < 0 ⇒ activation clamps to zero.
        assert_eq!(report.c_value, 0.0);
        // Stability 0.2 just misses the chaos band; the default wins.
        assert_eq!(report.phase, ResonancePhase::Entrain);
        assert!(report.response_text.contains("動きの中に"));
    }

    #[test]
    fn test_unity_pass_near_void() {
        let mut agent = StillnessAgent::default();
        let report = agent.process(0.95, 0.92, 0.02, "...", false).unwrap();

        assert_eq!(report.phase, ResonancePhase::Unity);
        assert!(report.c_value > 0.85);
        assert!(report.metrics.silence_score > 0.7);
        assert_eq!(report.metrics.abstraction_level, 1.0);
    }

    #[test]
    fn test_history_and_axis_track_last_pass() {
        let mut agent = StillnessAgent::default();
        for _ in 0..3 {
            agent.process(0.6, 0.7, 0.2, "", false).unwrap();
        }
        assert_eq!(agent.history().len(), 3);

        let axis = agent.axis();
        assert_eq!(axis.presence, 0.6);
        assert_eq!(axis.humility, 0.7);
        assert!((axis.grounding - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_solstice_message_attached() {
        let mut agent = StillnessAgent::default();
        let report = agent.process(0.6, 0.7, 0.2, "", true).unwrap();
        assert!(report.message.contains("冬至"));
    }
}
