//! Lateral-view posture checks
//!
//! Scores forward head posture, rounded shoulders, and sagittal pelvic
//! tilt from one side-view landmark set. Produces a score deduction to be
//! applied to a frontal base score, never a standalone score.

use pose_landmarks::{Landmark, LandmarkIndex, LandmarkSet};
use tracing::debug;

use crate::config::EngineConfig;
use crate::frontal::grade;
use crate::geometry::vertex_angle;
use crate::report::{
    push_unique, AssessmentItem, CheckKind, ItemStatus, LateralMetrics, PartialAnalysis,
};

const FORWARD_HEAD_WARN_DEDUCTION: i32 = 8;
const FORWARD_HEAD_DANGER_DEDUCTION: i32 = 15;
const ROUNDED_WARN_DEDUCTION: i32 = 8;
const ROUNDED_DANGER_DEDUCTION: i32 = 15;
const PELVIC_TILT_DEDUCTION: i32 = 5;

/// Reference height above the hip used when no shoulder resolved.
/// Heuristic constant, not clinically derived.
const TORSO_FALLBACK_RISE: f64 = 0.2;

const FORWARD_HEAD_SUGGESTION: &str =
    "Do chin tucks daily and raise screens to eye level to bring the head back over the shoulders";
const ROUNDED_SUGGESTION: &str =
    "Stretch the chest and strengthen the mid-back with rowing movements to open the shoulders";
const ANTERIOR_TILT_SUGGESTION: &str =
    "Stretch the hip flexors and strengthen the glutes and abdominals";
const POSTERIOR_TILT_SUGGESTION: &str =
    "Stretch the hamstrings and strengthen the hip flexors and lower back";

/// Pick one side's landmark, preferring the left
fn side(set: &LandmarkSet, left: LandmarkIndex, right: LandmarkIndex) -> Option<Landmark> {
    set.get(left).or_else(|| set.get(right))
}

/// Run all lateral checks over one landmark set.
///
/// The returned `score` is `-deduction` (always <= 0); items and
/// suggestions accumulate independently of any frontal analysis.
pub fn analyze_lateral(set: &LandmarkSet, config: &EngineConfig) -> PartialAnalysis {
    let mut deduction = 0;
    let mut items = Vec::new();
    let mut suggestions = Vec::new();
    let mut raw = LateralMetrics::default();

    let ear = side(set, LandmarkIndex::LeftEar, LandmarkIndex::RightEar);
    let shoulder = side(
        set,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
    );
    let hip = side(set, LandmarkIndex::LeftHip, LandmarkIndex::RightHip);
    let knee = side(set, LandmarkIndex::LeftKnee, LandmarkIndex::RightKnee);
    let ankle = side(set, LandmarkIndex::LeftAnkle, LandmarkIndex::RightAnkle);

    // Forward head: ear depth versus shoulder depth
    if let (Some(ear), Some(shoulder)) = (ear, shoulder) {
        let offset = (ear.z - shoulder.z) * 100.0;
        if offset.is_finite() {
            raw.head_forward = offset;
            let magnitude = offset.abs();
            let status = grade(
                magnitude,
                config.head_forward_warn_pct,
                config.head_forward_danger_pct,
            );
            let (points, suggestion, description) = match status {
                ItemStatus::Danger => (
                    FORWARD_HEAD_DANGER_DEDUCTION,
                    Some(FORWARD_HEAD_SUGGESTION),
                    "Head is carried well forward of the shoulder line",
                ),
                ItemStatus::Warning => (
                    FORWARD_HEAD_WARN_DEDUCTION,
                    Some(FORWARD_HEAD_SUGGESTION),
                    "Head is carried slightly forward of the shoulder line",
                ),
                ItemStatus::Normal => (0, None, "Head is aligned over the shoulders"),
            };
            deduction += points;
            if let Some(text) = suggestion {
                push_unique(&mut suggestions, text);
            }
            items.push(AssessmentItem {
                kind: CheckKind::ForwardHead,
                status,
                value: (magnitude * 6.0).min(100.0),
                description: description.to_string(),
                angle: None,
            });
        }
    }

    // Rounded shoulders: shoulder depth versus hip depth
    if let (Some(shoulder), Some(hip)) = (shoulder, hip) {
        let offset = (shoulder.z - hip.z) * 100.0;
        if offset.is_finite() {
            raw.shoulder_round = offset;
            let magnitude = offset.abs();
            let status = grade(
                magnitude,
                config.shoulder_round_warn_pct,
                config.shoulder_round_danger_pct,
            );
            let (points, suggestion, description) = match status {
                ItemStatus::Danger => (
                    ROUNDED_DANGER_DEDUCTION,
                    Some(ROUNDED_SUGGESTION),
                    "Shoulders are rolled well forward of the hip line",
                ),
                ItemStatus::Warning => (
                    ROUNDED_WARN_DEDUCTION,
                    Some(ROUNDED_SUGGESTION),
                    "Shoulders are rolled slightly forward of the hip line",
                ),
                ItemStatus::Normal => (0, None, "Shoulders are aligned over the hips"),
            };
            deduction += points;
            if let Some(text) = suggestion {
                push_unique(&mut suggestions, text);
            }
            items.push(AssessmentItem {
                kind: CheckKind::RoundedShoulders,
                status,
                value: (magnitude * 5.0).min(100.0),
                description: description.to_string(),
                angle: None,
            });
        }
    }

    // Sagittal pelvic tilt: deviation of the torso-hip-knee chain from a
    // straight line. The ankle must have resolved even though it does not
    // enter the angle itself.
    if let (Some(hip), Some(knee), Some(_ankle)) = (hip, knee, ankle) {
        let torso = match shoulder {
            Some(s) => Landmark::new(s.x, s.y, hip.z),
            None => Landmark::new(hip.x, hip.y - TORSO_FALLBACK_RISE, hip.z),
        };
        let raw_angle = vertex_angle(torso, hip, knee);
        let deviation = 180.0 - raw_angle.abs();
        if deviation.is_finite() {
            let status = if deviation > config.pelvic_tilt_warn_deg {
                ItemStatus::Warning
            } else {
                ItemStatus::Normal
            };
            let (points, suggestion, description) = if status == ItemStatus::Warning {
                if raw_angle > 0.0 {
                    (
                        PELVIC_TILT_DEDUCTION,
                        Some(ANTERIOR_TILT_SUGGESTION),
                        "Pelvis appears tilted anteriorly",
                    )
                } else {
                    (
                        PELVIC_TILT_DEDUCTION,
                        Some(POSTERIOR_TILT_SUGGESTION),
                        "Pelvis appears tilted posteriorly",
                    )
                }
            } else {
                (0, None, "Pelvis is neutral front-to-back")
            };
            deduction += points;
            if let Some(text) = suggestion {
                push_unique(&mut suggestions, text);
            }
            items.push(AssessmentItem {
                kind: CheckKind::PelvicTilt,
                status,
                value: deviation.clamp(0.0, 100.0),
                description: description.to_string(),
                angle: Some(deviation),
            });
        }
    }

    debug!(
        "Lateral analysis complete: deduction={}, items={}",
        deduction,
        items.len()
    );

    PartialAnalysis {
        score: -deduction,
        items,
        suggestions,
        raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A side view with configurable ear and hip depth offsets
    fn side_view(ear_z: f64, shoulder_z: f64, hip_z: f64) -> LandmarkSet {
        LandmarkSet::empty()
            .with(LandmarkIndex::LeftEar, Landmark::new(0.5, 0.2, ear_z))
            .with(LandmarkIndex::LeftShoulder, Landmark::new(0.5, 0.35, shoulder_z))
            .with(LandmarkIndex::LeftHip, Landmark::new(0.5, 0.6, hip_z))
    }

    #[test]
    fn test_forward_head_and_rounded_shoulders_danger() {
        // ear 9 units forward of shoulder, shoulder 12 forward of hip
        let set = side_view(0.09, 0.0, -0.12);
        let partial = analyze_lateral(&set, &EngineConfig::default());
        assert_eq!(partial.score, -30);
        assert_eq!(partial.items.len(), 2);
        assert_eq!(partial.items[0].kind, CheckKind::ForwardHead);
        assert_eq!(partial.items[0].status, ItemStatus::Danger);
        assert!((partial.items[0].value - 54.0).abs() < 1e-9);
        assert_eq!(partial.items[1].kind, CheckKind::RoundedShoulders);
        assert_eq!(partial.items[1].status, ItemStatus::Danger);
        assert!((partial.items[1].value - 60.0).abs() < 1e-9);
        assert!((partial.raw.head_forward - 9.0).abs() < 1e-9);
        assert!((partial.raw.shoulder_round - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_warning_tier_deductions() {
        let set = side_view(0.05, 0.0, -0.06);
        let partial = analyze_lateral(&set, &EngineConfig::default());
        assert_eq!(partial.score, -16);
        assert!(partial
            .items
            .iter()
            .all(|i| i.status == ItemStatus::Warning));
    }

    #[test]
    fn test_aligned_side_view_deducts_nothing() {
        let set = side_view(0.0, 0.0, 0.0);
        let partial = analyze_lateral(&set, &EngineConfig::default());
        assert_eq!(partial.score, 0);
        assert_eq!(partial.items.len(), 2);
        assert!(partial.items.iter().all(|i| i.status == ItemStatus::Normal));
        assert!(partial.suggestions.is_empty());
    }

    #[test]
    fn test_right_side_fallback() {
        let set = LandmarkSet::empty()
            .with(LandmarkIndex::RightEar, Landmark::new(0.5, 0.2, 0.09))
            .with(LandmarkIndex::RightShoulder, Landmark::new(0.5, 0.35, 0.0));
        let partial = analyze_lateral(&set, &EngineConfig::default());
        assert_eq!(partial.items.len(), 1);
        assert_eq!(partial.items[0].kind, CheckKind::ForwardHead);
        assert_eq!(partial.score, -15);
    }

    #[test]
    fn test_left_side_preferred_over_right() {
        let set = LandmarkSet::empty()
            .with(LandmarkIndex::LeftEar, Landmark::new(0.5, 0.2, 0.0))
            .with(LandmarkIndex::RightEar, Landmark::new(0.5, 0.2, 0.5))
            .with(LandmarkIndex::LeftShoulder, Landmark::new(0.5, 0.35, 0.0));
        let partial = analyze_lateral(&set, &EngineConfig::default());
        // left ear offset of zero wins over the large right ear offset
        assert_eq!(partial.items[0].status, ItemStatus::Normal);
    }

    #[test]
    fn test_pelvic_tilt_neutral_chain() {
        let set = side_view(0.0, 0.0, 0.0)
            .with(LandmarkIndex::LeftKnee, Landmark::new(0.5, 0.78, 0.0))
            .with(LandmarkIndex::LeftAnkle, Landmark::new(0.5, 0.95, 0.0));
        let partial = analyze_lateral(&set, &EngineConfig::default());
        let pelvic = partial
            .items
            .iter()
            .find(|i| i.kind == CheckKind::PelvicTilt)
            .unwrap();
        assert_eq!(pelvic.status, ItemStatus::Normal);
        assert_eq!(partial.score, 0);
    }

    #[test]
    fn test_pelvic_tilt_warning_when_chain_bends() {
        let set = side_view(0.0, 0.0, 0.0)
            .with(LandmarkIndex::LeftKnee, Landmark::new(0.6, 0.78, 0.0))
            .with(LandmarkIndex::LeftAnkle, Landmark::new(0.6, 0.95, 0.0));
        let partial = analyze_lateral(&set, &EngineConfig::default());
        let pelvic = partial
            .items
            .iter()
            .find(|i| i.kind == CheckKind::PelvicTilt)
            .unwrap();
        assert_eq!(pelvic.status, ItemStatus::Warning);
        assert_eq!(partial.score, -5);
        assert!(pelvic.angle.unwrap() > 20.0);
    }

    #[test]
    fn test_pelvic_tilt_requires_ankle() {
        let set = side_view(0.0, 0.0, 0.0)
            .with(LandmarkIndex::LeftKnee, Landmark::new(0.6, 0.78, 0.0));
        let partial = analyze_lateral(&set, &EngineConfig::default());
        assert!(partial
            .items
            .iter()
            .all(|i| i.kind != CheckKind::PelvicTilt));
    }

    #[test]
    fn test_empty_set_produces_empty_partial() {
        let partial = analyze_lateral(&LandmarkSet::empty(), &EngineConfig::default());
        assert_eq!(partial.score, 0);
        assert!(partial.items.is_empty());
        assert!(partial.suggestions.is_empty());
    }
}
