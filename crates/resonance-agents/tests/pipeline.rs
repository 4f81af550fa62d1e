//! End-to-end pipeline tests across the engine, depth provider, and
//! harmony composition.

use resonance_agents::{
    EngineConfig, FixedSilence, ResonanceEngine, SilenceProvider, StillnessAgent,
};
use resonance_core::ResonancePhase;
use resonance_metrics::{HarmonyOracle, StillnessCalculator};

#[test]
fn full_turn_produces_bounded_record() {
    let mut engine = ResonanceEngine::default();

    for c in [0.1, 0.3, 0.45, 0.6, 0.72, 0.81, 0.88, 0.92, 0.95, 0.98] {
        let record = engine.process_on("", Some(c), false).unwrap();

        assert!((0.0..=1.0).contains(&record.harmony_score));
        assert!((0.0..=1.0).contains(&record.density_score));
        assert!((0.0..=1.0).contains(&record.collaborator.silence_score));
        assert!(!record.response_text.is_empty());
        assert!(!record.oracle_message.is_empty());
    }
}

#[test]
fn turn_record_round_trips_through_json() {
    let mut engine = ResonanceEngine::default();
    let record = engine.process_on("こんにちは", Some(0.85), false).unwrap();

    let json = record.to_json().unwrap();
    let back: resonance_agents::TurnRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(back.c_value, record.c_value);
    assert_eq!(back.phase, ResonancePhase::Unity);
    assert_eq!(back.response_text, record.response_text);
}

#[test]
fn collaborator_bridge_synthesizes_low_anxiety_at_high_activation() {
    // The depth provider's bridge maps high activation to low anxiety,
    // so its silence rises with the lead activation.
    let mut provider = StillnessAgent::default();

    let low = provider.silence_for(0.2, false).unwrap();
    let high = provider.silence_for(0.9, false).unwrap();

    assert!(high.silence_score > low.silence_score);
    assert!((0.0..=1.0).contains(&low.silence_score));
    assert!((0.0..=1.0).contains(&high.silence_score));
}

#[test]
fn solstice_flag_flows_from_engine_to_provider() {
    // A provider never reads the clock; the flag it receives is the one
    // the caller resolved. A pinned flag therefore boosts the silence
    // contribution on any date, and only then.
    let mut plain = StillnessAgent::default();
    let mut boosted = StillnessAgent::default();

    let base = plain.silence_for(0.7, false).unwrap();
    let solstice = boosted.silence_for(0.7, true).unwrap();
    assert!(solstice.silence_score > base.silence_score);

    let mut engine = ResonanceEngine::default();
    let record = engine.process_on("", Some(0.7), true).unwrap();
    assert_eq!(record.collaborator.silence_score, solstice.silence_score);
}

#[test]
fn solstice_ramp_crosses_returning_light() {
    // With a quiet collaborator and the boost active, a rising
    // activation eventually crosses the returning-light threshold.
    let mut engine = ResonanceEngine::new(EngineConfig::default(), FixedSilence::new(0.05, 0.1));

    let mut crossed = false;
    for c in [0.1, 0.3, 0.45, 0.6, 0.72, 0.81, 0.88, 0.92, 0.95, 0.98] {
        let record = engine.process_on("", Some(c), true).unwrap();
        if record.harmony_score > 0.88 {
            crossed = true;
            assert!(record.response_text.contains("だいじょぶ"));
            assert!(record.oracle_message.contains("一陽来復"));
            break;
        }
    }

    assert!(crossed);
}

#[test]
fn scenario_composition_matches_closed_form() {
    // Three collaborator scalars (0.9, 0.8, 0.7): without the boost the
    // composite is the cube root of the transformed product.
    let oracle = HarmonyOracle::default();

    let unboosted = oracle.compose(0.9, 0.8, 0.7, false);
    assert!((unboosted - (0.126_f64).cbrt()).abs() < 1e-9);

    let boosted = oracle.compose(0.9, 0.8, 0.7, true);
    assert!((boosted - (0.126_f64).cbrt() * 1.44).abs() < 1e-9);
}

#[test]
fn stillness_scenario_a_exact() {
    // Lowest phase, activation 0.2, stability 0.2:
    // 0.2 × 0.1 × (0.7 + 0.3 × 0.2) = 0.0152
    let calc = StillnessCalculator::default();
    let silence = calc.silence_score(0.2, ResonancePhase::Chaos, 0.2, false);
    assert!((silence - 0.0152).abs() < 1e-6);

    let depth = calc.depth_score(0.2, silence, 0.1);
    assert!((0.0..=1.0).contains(&depth));
}
