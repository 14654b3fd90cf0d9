//! Body Keypoint Data Model
//!
//! Types for anatomical landmarks as delivered by an external pose
//! detector: a fixed 33-point scheme where any point may be unresolved.

mod landmark;
mod set;

pub use landmark::Landmark;
pub use set::{LandmarkIndex, LandmarkSet, LANDMARK_COUNT};

use thiserror::Error;

/// Errors constructing landmark data from raw detector output
#[derive(Debug, Clone, Error)]
pub enum LandmarkError {
    /// Detector delivered the wrong number of points
    #[error("landmark set has {actual} points, expected {LANDMARK_COUNT}")]
    WrongCount { actual: usize },
}
