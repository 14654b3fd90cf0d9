//! Report Fusion
//!
//! Merges the frontal assessment with an optional lateral partial
//! assessment, and routes degraded input to the fallback report. The
//! top-level [`assess`] entry point takes zero, one, or two already
//! resolved landmark sets and always returns one complete report.

use pose_landmarks::LandmarkSet;
use posture_engine::frontal::BASE_SCORE;
use posture_engine::report::push_unique;
use posture_engine::{
    analyze_frontal, analyze_lateral, EngineConfig, PartialAnalysis, PostureAnalysis, RawMetrics,
    RiskLevel,
};
use tracing::debug;

/// Upper bound on suggestions in a fused report
pub const MAX_SUGGESTIONS: usize = 6;

/// Frontal baseline used when only the lateral view resolved: a perfect
/// score with nothing flagged and nothing suggested, so the fused report
/// carries lateral findings only. Running the frontal analyzer on an
/// empty set would instead append its reinforcement suggestion, which
/// has no place in a report built from deductions.
fn clean_baseline() -> PostureAnalysis {
    PostureAnalysis {
        score: BASE_SCORE,
        status: RiskLevel::from_score(BASE_SCORE),
        items: Vec::new(),
        suggestions: Vec::new(),
        raw: RawMetrics::default(),
    }
}

/// Merge a frontal report with an optional lateral partial report.
///
/// With no lateral report this is the identity. Otherwise items are
/// concatenated frontal-then-lateral, suggestions deduplicated in
/// first-seen order and capped at [`MAX_SUGGESTIONS`], the lateral
/// deduction is applied to the frontal score with the result clamped to
/// 0-100, lateral raw metrics overwrite only their own fields, and the
/// risk tier is recomputed from the combined score.
pub fn combine(frontal: PostureAnalysis, lateral: Option<PartialAnalysis>) -> PostureAnalysis {
    let Some(lateral) = lateral else {
        return frontal;
    };

    let mut items = frontal.items;
    items.extend(lateral.items);

    let mut suggestions = frontal.suggestions;
    for text in &lateral.suggestions {
        push_unique(&mut suggestions, text);
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    let score = (frontal.score + lateral.score).clamp(0, 100);

    let mut raw = frontal.raw;
    raw.head_forward = lateral.raw.head_forward;
    raw.shoulder_round = lateral.raw.shoulder_round;

    PostureAnalysis {
        score,
        status: RiskLevel::from_score(score),
        items,
        suggestions,
        raw,
    }
}

/// Assess posture from whatever views resolved.
///
/// - Neither view carries a usable landmark: the fixed fallback report.
/// - Frontal only: the frontal analysis as-is.
/// - Both views: frontal analysis fused with the lateral partial.
/// - Lateral only: the lateral partial applied to a clean frontal
///   baseline, so side-view findings still surface.
///
/// Synchronous and stateless; inputs are never mutated and the call never
/// fails.
pub fn assess(
    frontal: Option<&LandmarkSet>,
    lateral: Option<&LandmarkSet>,
    config: &EngineConfig,
) -> PostureAnalysis {
    let frontal_usable = frontal.is_some_and(LandmarkSet::has_any);
    let lateral_usable = lateral.is_some_and(LandmarkSet::has_any);

    if !frontal_usable && !lateral_usable {
        debug!("No usable landmarks in either view, emitting fallback report");
        return fallback::degraded_report();
    }

    let base = match frontal {
        Some(set) if frontal_usable => analyze_frontal(set, config),
        _ => clean_baseline(),
    };
    let side = match lateral {
        Some(set) if lateral_usable => Some(analyze_lateral(set, config)),
        _ => None,
    };

    combine(base, side)
}
