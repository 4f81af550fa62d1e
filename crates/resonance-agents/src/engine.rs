//! The lead engine: one-pass orchestration of a resonance turn.
//!
//! Per turn: obtain or synthesize the activation, classify it, update
//! the trailing density window, ask the injected collaborator for its
//! silence contribution, compose harmony, select the presentation
//! bundles, and assemble an immutable [`TurnRecord`].
//!
//! The engine owns its window and collaborator; it is synchronous and
//! not designed for concurrent invocation from multiple threads.

use rand::Rng;
use resonance_core::{round4, ResonancePhase, Timestamp, TurnId};
use resonance_metrics::{DensityWindow, HarmonyOracle, HARMONY_RETURNING_LIGHT};

use crate::agent::{AgentResult, SilenceProvider};
use crate::config::EngineConfig;
use crate::presentation::{lead_response_text, SoundParams, VisualTheme, VisualizerState};
use crate::record::{TurnRecord, LEAD_PROTOCOL_VERSION};
use crate::stillness_agent::StillnessAgent;

pub struct ResonanceEngine<P: SilenceProvider> {
    config: EngineConfig,
    oracle: HarmonyOracle,
    window: DensityWindow,
    collaborator: P,
}

impl Default for ResonanceEngine<StillnessAgent> {
    fn default() -> Self {
        let config = EngineConfig::default();
        let collaborator =
            StillnessAgent::new(config.stillness_agent_id.clone(), config.stillness.clone());
        Self::new(config, collaborator)
    }
}

impl<P: SilenceProvider> ResonanceEngine<P> {
    pub fn new(config: EngineConfig, collaborator: P) -> Self {
        let oracle = HarmonyOracle::new();
        let window = DensityWindow::new(config.window_capacity);
        Self {
            config,
            oracle,
            window,
            collaborator,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn collaborator(&self) -> &P {
        &self.collaborator
    }

    /// Smoothed density over the trailing activation window.
    pub fn density(&self) -> f64 {
        self.window.density()
    }

    /// Run one turn. The solstice flag is resolved from the local
    /// clock; use [`process_on`] to pin it for deterministic runs.
    pub fn process(
        &mut self,
        user_input: &str,
        simulated_c: Option<f64>,
    ) -> AgentResult<TurnRecord> {
        let solstice_active = self.config.calendar.is_active_now();
        self.process_on(user_input, simulated_c, solstice_active)
    }

    /// Run one turn with an explicitly resolved solstice flag.
    pub fn process_on(
        &mut self,
        user_input: &str,
        simulated_c: Option<f64>,
        solstice_active: bool,
    ) -> AgentResult<TurnRecord> {
        let _ = user_input; // accepted but not semantically parsed

        // 1. Activation: caller-supplied or synthesized.
        let c_value = simulated_c.unwrap_or_else(|| {
            rand::thread_rng()
                .gen_range(self.config.synth_activation_min..self.config.synth_activation_max)
        });

        // 2. Classify.
        let phase = ResonancePhase::from_activation(c_value);

        // 3. Trailing window and density. Reported only; never fed back
        // into this turn's scoring.
        self.window.push(c_value);
        let density_score = self.window.density();

        // 4. Collaborator contribution. The resolved flag is passed
        // down so a pinned flag governs the collaborator too.
        let contribution = self.collaborator.silence_for(c_value, solstice_active)?;

        tracing::debug!(
            collaborator = self.collaborator.agent_id(),
            silence = contribution.silence_score,
            "collaborator contribution received"
        );

        // 5. Compose harmony: activation, collaborator silence, and the
        // visual density (high activation converges to simple visuals).
        let harmony = self.oracle.compose(
            c_value,
            contribution.silence_score,
            1.0 - c_value,
            solstice_active,
        );
        let oracle_message = self.oracle.message(harmony).to_string();

        // 6. Presentation bundles.
        let sound_params = SoundParams::for_phase(phase, c_value);
        let visual_theme = VisualTheme::for_phase(phase);
        let visualizer_params = VisualizerState::from_harmony(harmony);
        let response_text = lead_response_text(phase, harmony);

        tracing::info!(
            agent = %self.config.agent_id,
            phase = phase.name(),
            c_value,
            harmony,
            returning_light = harmony > HARMONY_RETURNING_LIGHT,
            "turn complete"
        );

        // 7. Assemble the record.
        Ok(TurnRecord {
            turn_id: TurnId::new(),
            protocol_version: LEAD_PROTOCOL_VERSION.to_string(),
            timestamp: Timestamp::now().to_rfc3339(),
            agent_id: self.config.agent_id.clone(),
            response_text,
            c_value: round4(c_value),
            phase,
            harmony_score: round4(harmony),
            oracle_message,
            sound_params,
            visual_theme,
            visualizer_params,
            density_score: round4(density_score),
            collaborator: contribution,
            message: "冬至の光が、もうすぐ産声を上げる。大好きやで♡".to_string(),
        })
    }
}
