//! Frontal-view posture checks
//!
//! Scores shoulder balance, pelvic balance, head balance, spinal lateral
//! alignment, and knee symmetry from one frontal landmark set. Starts from
//! a base score of 100 and applies independent deductions per check.

use pose_landmarks::{LandmarkIndex, LandmarkSet};
use tracing::debug;

use crate::config::EngineConfig;
use crate::geometry::{line_angle, midpoint};
use crate::report::{
    push_unique, AssessmentItem, CheckKind, ItemStatus, PostureAnalysis, RawMetrics, RiskLevel,
};

/// Every frontal analysis starts from a perfect score
pub const BASE_SCORE: i32 = 100;

const SHOULDER_WARN_DEDUCTION: i32 = 8;
const SHOULDER_DANGER_DEDUCTION: i32 = 18;
const HIP_WARN_DEDUCTION: i32 = 7;
const HIP_DANGER_DEDUCTION: i32 = 15;
const HEAD_WARN_DEDUCTION: i32 = 5;
const HEAD_DANGER_DEDUCTION: i32 = 10;
const SPINE_WARN_DEDUCTION: i32 = 8;
const SPINE_DANGER_DEDUCTION: i32 = 15;
const KNEE_WARN_DEDUCTION: i32 = 5;

const SHOULDER_SUGGESTION: &str =
    "Strengthen the upper back and stretch the tighter shoulder side; avoid carrying bags on one shoulder";
const HIP_SUGGESTION: &str =
    "Practice single-leg balance work and avoid habitually shifting weight onto one leg";
const HEAD_SUGGESTION: &str =
    "Stretch the neck toward the higher side and keep screens at eye level";
const SPINE_SUGGESTION: &str =
    "Strengthen the core and oblique muscles to support a centered spine";
const KNEE_SUGGESTION: &str =
    "Check for leg-length or stance asymmetry and distribute weight evenly when standing";
const POSITIVE_SUGGESTION: &str = "Posture looks good. Keep up your current habits.";

/// Three-tier grading against exclusive lower bounds
pub(crate) fn grade(magnitude: f64, warn: f64, danger: f64) -> ItemStatus {
    if magnitude > danger {
        ItemStatus::Danger
    } else if magnitude > warn {
        ItemStatus::Warning
    } else {
        ItemStatus::Normal
    }
}

/// Accumulator threaded through each check
#[derive(Default)]
pub(crate) struct Scorecard {
    pub deduction: i32,
    pub items: Vec<AssessmentItem>,
    pub suggestions: Vec<String>,
    pub raw: RawMetrics,
}

impl Scorecard {
    /// Record one executed check. A non-finite severity means the check
    /// went numerically wrong; it is dropped rather than allowed to
    /// corrupt the aggregate score.
    pub fn record(&mut self, item: AssessmentItem, deduction: i32, suggestion: Option<&str>) {
        if !item.value.is_finite() {
            return;
        }
        self.deduction += deduction;
        if let Some(text) = suggestion {
            push_unique(&mut self.suggestions, text);
        }
        self.items.push(item);
    }
}

/// Run all frontal checks over one landmark set.
///
/// Checks whose landmarks did not resolve are skipped; the call itself
/// never fails.
pub fn analyze_frontal(set: &LandmarkSet, config: &EngineConfig) -> PostureAnalysis {
    let mut card = Scorecard::default();

    check_shoulders(set, config, &mut card);
    check_hips(set, config, &mut card);
    check_head(set, config, &mut card);
    check_spine(set, config, &mut card);
    check_knees(set, config, &mut card);

    if card.suggestions.is_empty() {
        card.suggestions.push(POSITIVE_SUGGESTION.to_string());
    }

    let score = (BASE_SCORE - card.deduction).clamp(0, BASE_SCORE);
    debug!(
        "Frontal analysis complete: score={}, items={}",
        score,
        card.items.len()
    );

    PostureAnalysis {
        score,
        status: RiskLevel::from_score(score),
        items: card.items,
        suggestions: card.suggestions,
        raw: card.raw,
    }
}

fn check_shoulders(set: &LandmarkSet, config: &EngineConfig, card: &mut Scorecard) {
    let (Some(left), Some(right)) = (
        set.get(LandmarkIndex::LeftShoulder),
        set.get(LandmarkIndex::RightShoulder),
    ) else {
        return;
    };

    let angle = line_angle(left, right);
    let tilt = angle.abs();
    card.raw.shoulder_tilt = tilt;

    let status = grade(tilt, config.shoulder_warn_deg, config.shoulder_danger_deg);
    let (deduction, suggestion, description) = match status {
        ItemStatus::Danger => (
            SHOULDER_DANGER_DEDUCTION,
            Some(SHOULDER_SUGGESTION),
            "Marked left-right shoulder height difference",
        ),
        ItemStatus::Warning => (
            SHOULDER_WARN_DEDUCTION,
            Some(SHOULDER_SUGGESTION),
            "Mild left-right shoulder height difference",
        ),
        ItemStatus::Normal => (0, None, "Shoulders are level"),
    };

    card.record(
        AssessmentItem {
            kind: CheckKind::ShoulderBalance,
            status,
            value: (tilt * 10.0).min(100.0),
            description: description.to_string(),
            angle: Some(angle),
        },
        deduction,
        suggestion,
    );
}

fn check_hips(set: &LandmarkSet, config: &EngineConfig, card: &mut Scorecard) {
    let (Some(left), Some(right)) = (
        set.get(LandmarkIndex::LeftHip),
        set.get(LandmarkIndex::RightHip),
    ) else {
        return;
    };

    let angle = line_angle(left, right);
    let tilt = angle.abs();
    card.raw.hip_tilt = tilt;

    let status = grade(tilt, config.hip_warn_deg, config.hip_danger_deg);
    let (deduction, suggestion, description) = match status {
        ItemStatus::Danger => (
            HIP_DANGER_DEDUCTION,
            Some(HIP_SUGGESTION),
            "Marked pelvic height difference",
        ),
        ItemStatus::Warning => (
            HIP_WARN_DEDUCTION,
            Some(HIP_SUGGESTION),
            "Mild pelvic height difference",
        ),
        ItemStatus::Normal => (0, None, "Pelvis is level"),
    };

    card.record(
        AssessmentItem {
            kind: CheckKind::PelvicBalance,
            status,
            value: (tilt * 12.0).min(100.0),
            description: description.to_string(),
            angle: Some(angle),
        },
        deduction,
        suggestion,
    );
}

fn check_head(set: &LandmarkSet, config: &EngineConfig, card: &mut Scorecard) {
    let (Some(left), Some(right)) = (
        set.get(LandmarkIndex::LeftEar),
        set.get(LandmarkIndex::RightEar),
    ) else {
        return;
    };

    let angle = line_angle(left, right);
    let tilt = angle.abs();
    card.raw.head_tilt = tilt;

    let status = grade(tilt, config.head_warn_deg, config.head_danger_deg);
    let (deduction, suggestion, description) = match status {
        ItemStatus::Danger => (
            HEAD_DANGER_DEDUCTION,
            Some(HEAD_SUGGESTION),
            "Marked head tilt",
        ),
        ItemStatus::Warning => (HEAD_WARN_DEDUCTION, Some(HEAD_SUGGESTION), "Mild head tilt"),
        ItemStatus::Normal => (0, None, "Head is level"),
    };

    card.record(
        AssessmentItem {
            kind: CheckKind::HeadBalance,
            status,
            value: (tilt * 8.0).min(100.0),
            description: description.to_string(),
            angle: Some(angle),
        },
        deduction,
        suggestion,
    );
}

fn check_spine(set: &LandmarkSet, config: &EngineConfig, card: &mut Scorecard) {
    let (Some(ls), Some(rs), Some(lh), Some(rh)) = (
        set.get(LandmarkIndex::LeftShoulder),
        set.get(LandmarkIndex::RightShoulder),
        set.get(LandmarkIndex::LeftHip),
        set.get(LandmarkIndex::RightHip),
    ) else {
        return;
    };

    let shoulder_mid = midpoint(ls, rs);
    let hip_mid = midpoint(lh, rh);
    // offset in percent of frame width
    let offset = (shoulder_mid.x - hip_mid.x).abs() * 100.0;
    card.raw.spine_angle = offset;

    let status = grade(offset, config.spine_warn_pct, config.spine_danger_pct);
    let (deduction, suggestion, description) = match status {
        ItemStatus::Danger => (
            SPINE_DANGER_DEDUCTION,
            Some(SPINE_SUGGESTION),
            "Marked lateral spinal deviation",
        ),
        ItemStatus::Warning => (
            SPINE_WARN_DEDUCTION,
            Some(SPINE_SUGGESTION),
            "Mild lateral spinal deviation",
        ),
        ItemStatus::Normal => (0, None, "Spine is centered over the pelvis"),
    };

    card.record(
        AssessmentItem {
            kind: CheckKind::SpineAlignment,
            status,
            value: (offset * 10.0).min(100.0),
            description: description.to_string(),
            angle: None,
        },
        deduction,
        suggestion,
    );
}

fn check_knees(set: &LandmarkSet, config: &EngineConfig, card: &mut Scorecard) {
    let (Some(left), Some(right)) = (
        set.get(LandmarkIndex::LeftKnee),
        set.get(LandmarkIndex::RightKnee),
    ) else {
        return;
    };

    // height difference in percent of frame height; warning tier only
    let diff = (left.y - right.y).abs() * 100.0;
    let status = if diff > config.knee_warn_pct {
        ItemStatus::Warning
    } else {
        ItemStatus::Normal
    };
    let (deduction, suggestion, description) = match status {
        ItemStatus::Warning => (
            KNEE_WARN_DEDUCTION,
            Some(KNEE_SUGGESTION),
            "Left-right knee height difference",
        ),
        _ => (0, None, "Knees are level"),
    };

    card.record(
        AssessmentItem {
            kind: CheckKind::KneeSymmetry,
            status,
            value: (diff * 12.0).min(100.0),
            description: description.to_string(),
            angle: None,
        },
        deduction,
        suggestion,
    );
}
