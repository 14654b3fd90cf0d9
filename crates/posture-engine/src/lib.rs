//! Postural Assessment Engine
//!
//! Pure geometric scoring of body posture from detected landmarks:
//! - Frontal-view checks (shoulder balance, pelvic balance, head balance,
//!   spinal alignment, knee symmetry)
//! - Lateral-view checks (forward head, rounded shoulders, pelvic tilt)
//! - Normalized per-check severity and a three-tier risk classification
//!
//! Every analysis call is stateless and synchronous; missing or malformed
//! landmarks skip their checks instead of failing the call.

pub mod config;
pub mod frontal;
pub mod geometry;
pub mod lateral;
pub mod report;

pub use config::EngineConfig;
pub use frontal::analyze_frontal;
pub use lateral::analyze_lateral;
pub use report::{
    AssessmentItem, CheckKind, ItemStatus, LateralMetrics, PartialAnalysis, PostureAnalysis,
    RawMetrics, RiskLevel,
};
