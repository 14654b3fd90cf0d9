//! Assessment report types

use serde::{Deserialize, Serialize};

/// Outcome tier of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Normal,
    Warning,
    Danger,
}

/// Overall risk tier derived from the aggregate score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Good,
    Warning,
    Danger,
}

impl RiskLevel {
    /// Classify a clamped 0-100 score: good >= 85, warning >= 70, danger below.
    pub fn from_score(score: i32) -> Self {
        if score >= 85 {
            RiskLevel::Good
        } else if score >= 70 {
            RiskLevel::Warning
        } else {
            RiskLevel::Danger
        }
    }
}

/// Which anomaly a report item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Left-right shoulder height difference (frontal)
    ShoulderBalance,
    /// Left-right hip height difference (frontal)
    PelvicBalance,
    /// Left-right ear line tilt (frontal)
    HeadBalance,
    /// Lateral offset of the shoulder midline from the hip midline (frontal)
    SpineAlignment,
    /// Left-right knee height difference (frontal)
    KneeSymmetry,
    /// Head displaced forward of the shoulder line (lateral)
    ForwardHead,
    /// Shoulders displaced forward of the hip line (lateral)
    RoundedShoulders,
    /// Anterior/posterior pelvic tilt (lateral)
    PelvicTilt,
    /// Keypoint detection was too poor to assess
    DetectionQuality,
}

impl CheckKind {
    /// Human-readable name for rendering and storage
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::ShoulderBalance => "shoulder balance",
            CheckKind::PelvicBalance => "pelvic balance",
            CheckKind::HeadBalance => "head balance",
            CheckKind::SpineAlignment => "spinal alignment",
            CheckKind::KneeSymmetry => "knee symmetry",
            CheckKind::ForwardHead => "forward head posture",
            CheckKind::RoundedShoulders => "rounded shoulders",
            CheckKind::PelvicTilt => "pelvic tilt",
            CheckKind::DetectionQuality => "detection quality",
        }
    }
}

/// One line of the assessment report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub kind: CheckKind,
    pub status: ItemStatus,
    /// Severity on a 0-100 scale
    pub value: f64,
    pub description: String,
    /// Measured angle in degrees, for angle-based checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

/// Raw measurements carried alongside the scored items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMetrics {
    /// Shoulder line tilt (degrees)
    pub shoulder_tilt: f64,
    /// Hip line tilt (degrees)
    pub hip_tilt: f64,
    /// Ear line tilt (degrees)
    pub head_tilt: f64,
    /// Ear-to-shoulder depth offset (percent of frame depth scale)
    pub head_forward: f64,
    /// Shoulder-to-hip depth offset (percent of frame depth scale)
    pub shoulder_round: f64,
    /// Shoulder-midline lateral offset from hip midline (percent of frame width)
    pub spine_angle: f64,
}

/// Lateral-only raw measurements
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LateralMetrics {
    pub head_forward: f64,
    pub shoulder_round: f64,
}

/// Full posture report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureAnalysis {
    /// Aggregate health score, clamped to 0-100
    pub score: i32,
    pub status: RiskLevel,
    pub items: Vec<AssessmentItem>,
    pub suggestions: Vec<String>,
    pub raw: RawMetrics,
}

/// Lateral-view result.
///
/// `score` is a deduction (always <= 0) to be added onto a frontal base
/// score; there is no standalone lateral score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialAnalysis {
    pub score: i32,
    pub items: Vec<AssessmentItem>,
    pub suggestions: Vec<String>,
    pub raw: LateralMetrics,
}

/// Append a suggestion unless an identical one is already listed.
///
/// Linear scan keeps first-seen order deterministic; suggestion lists stay
/// in the single digits.
pub fn push_unique(list: &mut Vec<String>, text: &str) {
    if !list.iter().any(|s| s == text) {
        list.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_tiers() {
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Good);
        assert_eq!(RiskLevel::from_score(85), RiskLevel::Good);
        assert_eq!(RiskLevel::from_score(84), RiskLevel::Warning);
        assert_eq!(RiskLevel::from_score(70), RiskLevel::Warning);
        assert_eq!(RiskLevel::from_score(69), RiskLevel::Danger);
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Danger);
    }

    #[test]
    fn test_push_unique_keeps_order() {
        let mut list = Vec::new();
        push_unique(&mut list, "a");
        push_unique(&mut list, "b");
        push_unique(&mut list, "a");
        assert_eq!(list, vec!["a".to_string(), "b".to_string()]);
    }
}
