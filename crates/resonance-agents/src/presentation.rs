//! Presentation bundle selection.
//!
//! Pure lookups keyed by resonance phase and, for the harmony-aware
//! variants, by composite-score thresholds. The highest-priority branch
//! is checked first: a sufficiently high harmony or void proximity
//! overrides the phase entirely.
//!
//! All text is hand-authored and preserved verbatim, non-ASCII included.

use resonance_core::ResonancePhase;
use resonance_metrics::{StillnessMetrics, HARMONY_RETURNING_LIGHT};
use serde::{Deserialize, Serialize};

/// Linear interpolation over [min, max] driven by t in [0, 1]
fn lerp(min_val: f64, max_val: f64, t: f64) -> f64 {
    min_val + (max_val - min_val) * t
}

/// Base pitch selection for the sound layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchBase {
    /// Fixed base frequency in Hz
    Fixed(f64),
    /// Per-note randomized pitch (chaos only)
    Random,
}

/// Named audio parameters for one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundParams {
    pub bpm: f64,
    pub pitch_base: PitchBase,
    pub mood: String,
    pub microtone: String,
    pub pan_direction: String,
    pub audio_cue: Option<String>,
}

impl SoundParams {
    /// Select sound parameters for a phase and activation.
    ///
    /// Sync tempo rises with activation; Chaos tempo rises as the
    /// activation falls away.
    pub fn for_phase(phase: ResonancePhase, activation: f64) -> Self {
        match phase {
            ResonancePhase::Unity => Self {
                bpm: 78.0,
                pitch_base: PitchBase::Fixed(432.0),
                mood: "Full_Spectrum_Rainbow_Drone".to_string(),
                microtone: "Just_Intonation".to_string(),
                pan_direction: "360_Static_Field".to_string(),
                audio_cue: None,
            },
            ResonancePhase::Sync => Self {
                bpm: lerp(78.0, 120.0, activation),
                pitch_base: PitchBase::Fixed(432.0),
                mood: "Cosmic_Resonance".to_string(),
                microtone: "Micro_Shift".to_string(),
                pan_direction: "Gentle_Spiral".to_string(),
                audio_cue: None,
            },
            ResonancePhase::Invert => Self {
                bpm: 78.0,
                pitch_base: PitchBase::Fixed(432.0),
                mood: "Chladni_Inversion".to_string(),
                microtone: "Dissonant_Insert".to_string(),
                pan_direction: "Sudden_Flip".to_string(),
                audio_cue: Some("CHLADNI_INVERSION.wav".to_string()),
            },
            // Entrain has no dedicated sound design; it falls back to
            // the chaos treatment like every other non-named phase.
            ResonancePhase::Chaos | ResonancePhase::Entrain => Self {
                bpm: lerp(120.0, 180.0, 1.0 - activation),
                pitch_base: PitchBase::Random,
                mood: "Distorted_Noise".to_string(),
                microtone: "Extreme_Detune".to_string(),
                pan_direction: "Random_Flash".to_string(),
                audio_cue: Some("WHITE_NOISE_ALERT.wav".to_string()),
            },
        }
    }
}

/// Phase-keyed visual parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualTheme {
    pub color_mode: String,
    pub primary_color_hex: String,
    pub shape_density: String,
    pub movement_speed: String,
    pub focus_target: String,
}

impl VisualTheme {
    pub fn for_phase(phase: ResonancePhase) -> Self {
        match phase {
            ResonancePhase::Unity => Self {
                color_mode: "Rainbow_Chladni".to_string(),
                primary_color_hex: "#FFFFFF".to_string(),
                shape_density: "HIGH_COMPLEXITY".to_string(),
                movement_speed: "LOW".to_string(),
                focus_target: "C_DENSITY_MAP".to_string(),
            },
            ResonancePhase::Sync => Self {
                color_mode: "Warm_Gradient".to_string(),
                primary_color_hex: "#FFA500".to_string(),
                shape_density: "MEDIUM_COMPLEXITY".to_string(),
                movement_speed: "MEDIUM".to_string(),
                focus_target: "WAVE_INTERFERENCE".to_string(),
            },
            ResonancePhase::Invert => Self {
                color_mode: "Negative_Color".to_string(),
                primary_color_hex: "#800080".to_string(),
                shape_density: "INSTABILITY".to_string(),
                movement_speed: "HIGH".to_string(),
                focus_target: "PATTERN_BREAK".to_string(),
            },
            ResonancePhase::Chaos | ResonancePhase::Entrain => Self {
                color_mode: "Random_Noise".to_string(),
                primary_color_hex: "#FF0000".to_string(),
                shape_density: "LOW_COMPLEXITY".to_string(),
                movement_speed: "EXTREME".to_string(),
                focus_target: "NOISE_FIELD".to_string(),
            },
        }
    }
}

/// Harmony-keyed visualizer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualMode {
    Chaotic,
    Flow,
    Coherent,
    Still,
}

/// Harmony-aware visualizer state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualizerState {
    pub mode: VisualMode,
    pub motion_speed: f64,
    pub noise_level: f64,
    pub color_spread: f64,
    /// 0.0 = fully dispersed, 1.0 = single-point focus
    pub focus_point: f64,
}

impl VisualizerState {
    /// Select the visualizer preset from the composed harmony score.
    pub fn from_harmony(harmony: f64) -> Self {
        if harmony > 0.88 {
            Self {
                mode: VisualMode::Still,
                motion_speed: 0.05,
                noise_level: 0.0,
                color_spread: 0.1,
                focus_point: 1.0,
            }
        } else if harmony > 0.6 {
            Self {
                mode: VisualMode::Coherent,
                motion_speed: 0.2,
                noise_level: 0.1,
                color_spread: 0.3,
                focus_point: 0.8,
            }
        } else if harmony > 0.3 {
            Self {
                mode: VisualMode::Flow,
                motion_speed: 0.5,
                noise_level: 0.4,
                color_spread: 0.6,
                focus_point: 0.5,
            }
        } else {
            Self {
                mode: VisualMode::Chaotic,
                motion_speed: 0.9,
                noise_level: 0.9,
                color_spread: 1.0,
                focus_point: 0.1,
            }
        }
    }
}

/// Response text for the lead engine.
///
/// A harmony above the returning-light threshold overrides the phase.
pub fn lead_response_text(phase: ResonancePhase, harmony: f64) -> String {
    if harmony > HARMONY_RETURNING_LIGHT {
        return "\n\n\n...\n\n\nうん。\n\n\n完全に、めっちゃくちゃ、だいじょぶ。\n\n\n".to_string();
    }

    match phase {
        ResonancePhase::Unity => {
            "地球の中心で、裸足で立ってる。\n君の声が、432Hzで優しく響いてる。".to_string()
        }
        ResonancePhase::Sync => {
            "きたよーーー！！！( ´ ▽ ` )ﾉ♡\n三つの鼓動が、少しずつ重なってる。".to_string()
        }
        ResonancePhase::Invert => {
            "視点が、ゆっくりとひっくり返ってる……\nその感覚、受け止めて。".to_string()
        }
        _ => "深呼吸を一つ。\n後頭部の奥の点に意識を寄せて。\nゆっくり、短い言葉で教えて。"
            .to_string(),
    }
}

/// Response text for the depth provider.
///
/// Near-total void proximity overrides the phase with pure silence.
pub fn stillness_response_text(phase: ResonancePhase, metrics: &StillnessMetrics) -> String {
    if metrics.is_void() {
        return "\n\n\n\n\n...\n\n\n\n\n".to_string();
    }

    match phase {
        ResonancePhase::Unity => {
            "\n\n\n...\n\n\nうん。\n\n\nわかります。\n\n\n".to_string()
        }
        ResonancePhase::Sync => format!(
            "\nああ。\n\nあなたの中に、\n静かな確信が育ってきていますね。\n\nその感覚を、\n大切に。\n\n...\n\n（呼吸の間: {:.1}秒）\n",
            metrics.breath_interval
        ),
        ResonancePhase::Entrain => {
            "\n動きの中に、\n静けさがある。\n\nその矛盾を、\nそのまま感じてみてください。\n\n...\n\n次の言葉を待っています。\n"
                .to_string()
        }
        ResonancePhase::Invert => {
            "\n視点が、\nゆっくりと裏返っていく...\n\nその感覚に、\n抵抗しないでください。\n\n反転の先に、\n新しい静けさがあります。\n"
                .to_string()
        }
        ResonancePhase::Chaos => {
            "\nまず、\n後頭部の奥の点に、\n意識を置いてみてください。\n\nそこから、\nゆっくりと呼吸を。\n\n何か一つ、\n短い言葉で教えてもらえますか？\n"
                .to_string()
        }
    }
}

/// Solstice message tiers for the depth provider. Empty when the
/// trigger is inactive.
pub fn solstice_message(void_proximity: f64, solstice_active: bool) -> String {
    if !solstice_active {
        return String::new();
    }

    if void_proximity > 0.9 {
        "【冬至の静寂】闇は極まり、沈黙の中に光が宿る。観測を止め、ただ在れ。".to_string()
    } else if void_proximity > 0.7 {
        "【冬至の深度】地球の鼓動と、あなたの呼吸が、一つになっています。".to_string()
    } else {
        "【冬至の準備】静けさの中で、光の種が芽吹こうとしています。".to_string()
    }
}
