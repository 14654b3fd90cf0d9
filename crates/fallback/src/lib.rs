//! Degraded-Input Fallback
//!
//! When the upstream detector produced no usable landmarks in either view,
//! the caller substitutes this fixed low-confidence report instead of
//! computing geometry on absent data.

use posture_engine::{
    AssessmentItem, CheckKind, ItemStatus, PostureAnalysis, RawMetrics, RiskLevel,
};

/// Score reported when detection failed; inside the warning band so the
/// report reads as "inconclusive", never as a clean bill.
pub const FALLBACK_SCORE: i32 = 72;

/// Build the fixed degraded-input report.
///
/// Fully deterministic: same output on every call.
pub fn degraded_report() -> PostureAnalysis {
    PostureAnalysis {
        score: FALLBACK_SCORE,
        status: RiskLevel::from_score(FALLBACK_SCORE),
        items: vec![AssessmentItem {
            kind: CheckKind::DetectionQuality,
            status: ItemStatus::Warning,
            value: 50.0,
            description: "Keypoint detection was unreliable; this score is a low-confidence estimate"
                .to_string(),
            angle: None,
        }],
        suggestions: vec![
            "Retake the photo in brighter, more even lighting".to_string(),
            "Make sure the full body is visible in the frame".to_string(),
            "Wear fitted clothing so body contours are visible".to_string(),
        ],
        raw: RawMetrics::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_warning_band() {
        let report = degraded_report();
        assert!((70..=75).contains(&report.score));
        assert_eq!(report.status, RiskLevel::Warning);
    }

    #[test]
    fn test_fallback_shape() {
        let report = degraded_report();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].kind, CheckKind::DetectionQuality);
        assert_eq!(report.suggestions.len(), 3);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(degraded_report(), degraded_report());
    }
}
