//! Engine threshold configuration

use serde::{Deserialize, Serialize};

/// Severity thresholds for every check.
///
/// `Default` carries the normative constants; analyses run with defaults
/// are fully deterministic. Angle thresholds are in degrees, offset
/// thresholds in percent of the normalized frame scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shoulder line tilt: warning above this
    pub shoulder_warn_deg: f64,
    /// Shoulder line tilt: danger above this
    pub shoulder_danger_deg: f64,

    /// Hip line tilt: warning above this
    pub hip_warn_deg: f64,
    /// Hip line tilt: danger above this
    pub hip_danger_deg: f64,

    /// Ear line tilt: warning above this
    pub head_warn_deg: f64,
    /// Ear line tilt: danger above this
    pub head_danger_deg: f64,

    /// Shoulder-midline lateral offset: warning above this
    pub spine_warn_pct: f64,
    /// Shoulder-midline lateral offset: danger above this
    pub spine_danger_pct: f64,

    /// Knee height difference: warning above this (no danger tier)
    pub knee_warn_pct: f64,

    /// Ear-to-shoulder depth offset: warning above this
    pub head_forward_warn_pct: f64,
    /// Ear-to-shoulder depth offset: danger above this
    pub head_forward_danger_pct: f64,

    /// Shoulder-to-hip depth offset: warning above this
    pub shoulder_round_warn_pct: f64,
    /// Shoulder-to-hip depth offset: danger above this
    pub shoulder_round_danger_pct: f64,

    /// Torso-hip-knee deviation from straight: warning above this (no danger tier)
    pub pelvic_tilt_warn_deg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            shoulder_warn_deg: 2.5,
            shoulder_danger_deg: 5.0,
            hip_warn_deg: 2.0,
            hip_danger_deg: 4.0,
            head_warn_deg: 3.0,
            head_danger_deg: 6.0,
            spine_warn_pct: 2.5,
            spine_danger_pct: 5.0,
            knee_warn_pct: 4.0,
            head_forward_warn_pct: 4.0,
            head_forward_danger_pct: 8.0,
            shoulder_round_warn_pct: 5.0,
            shoulder_round_danger_pct: 10.0,
            pelvic_tilt_warn_deg: 20.0,
        }
    }
}
