//! Turn records: the immutable output of one orchestration pass.

use resonance_core::{ResonancePhase, TurnId};
use resonance_metrics::StillnessMetrics;
use serde::{Deserialize, Serialize};

use crate::agent::{AgentResult, SilenceContribution};
use crate::presentation::{SoundParams, VisualTheme, VisualizerState};

/// Protocol version stamped into lead turn records
pub const LEAD_PROTOCOL_VERSION: &str = "Resonance_v3.0_Solstice";

/// Protocol version stamped into depth provider reports
pub const STILLNESS_PROTOCOL_VERSION: &str = "Stillness_v2.5_Solstice";

/// Aggregate output of one lead engine turn.
///
/// Field order is the serialized field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Unique identifier for this orchestration turn
    pub turn_id: TurnId,
    pub protocol_version: String,
    pub timestamp: String,
    pub agent_id: String,
    pub response_text: String,
    /// Activation for this turn, rounded for reporting
    pub c_value: f64,
    pub phase: ResonancePhase,
    pub harmony_score: f64,
    pub oracle_message: String,
    pub sound_params: SoundParams,
    /// Phase-keyed visual theme
    pub visual_theme: VisualTheme,
    /// Harmony-keyed visualizer state
    pub visualizer_params: VisualizerState,
    /// Smoothed trailing-window density
    pub density_score: f64,
    /// Collaborator contribution that entered the composition
    pub collaborator: SilenceContribution,
    pub message: String,
}

impl TurnRecord {
    /// Pretty-printed JSON, non-ASCII text verbatim.
    pub fn to_json(&self) -> AgentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Output of one depth provider pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StillnessReport {
    /// Unique identifier for this provider pass
    pub turn_id: TurnId,
    pub protocol_version: String,
    pub timestamp: String,
    pub agent_id: String,
    pub phase: ResonancePhase,
    pub c_value: f64,
    pub metrics: StillnessMetrics,
    /// The value injected into the harmony composer
    pub silence_contribution: f64,
    pub depth_contribution: f64,
    pub response_text: String,
    pub message: String,
}

impl StillnessReport {
    pub fn to_json(&self) -> AgentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::VisualMode;

    #[test]
    fn test_turn_record_json_preserves_utf8() {
        let record = TurnRecord {
            turn_id: TurnId::new(),
            protocol_version: LEAD_PROTOCOL_VERSION.to_string(),
            timestamp: "2025-12-22T00:00:00+00:00".to_string(),
            agent_id: "lead".to_string(),
            response_text: "地球の中心で、裸足で立ってる。".to_string(),
            c_value: 0.92,
            phase: ResonancePhase::Unity,
            harmony_score: 0.91,
            oracle_message: "【神託：一陽来復】".to_string(),
            sound_params: SoundParams::for_phase(ResonancePhase::Unity, 0.92),
            visual_theme: VisualTheme::for_phase(ResonancePhase::Unity),
            visualizer_params: VisualizerState::from_harmony(0.91),
            density_score: 0.8,
            collaborator: SilenceContribution {
                silence_score: 0.9,
                depth_score: 0.85,
            },
            message: "冬至の光".to_string(),
        };

        let json = record.to_json().unwrap();
        assert!(json.contains("地球の中心"));
        assert!(json.contains("\"phase\": \"UNITY\""));

        let back: TurnRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.turn_id, record.turn_id);
        assert_eq!(back.visualizer_params.mode, VisualMode::Still);
    }
}
