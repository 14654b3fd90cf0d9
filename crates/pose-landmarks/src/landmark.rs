//! Single anatomical keypoint

use serde::{Deserialize, Serialize};

/// A single detected body keypoint.
///
/// Coordinates are normalized to the source frame (x, y roughly 0..1).
/// `z` is a relative depth estimate, comparable only against another
/// landmark from the same detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Detector confidence (0-1), if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    /// Create a landmark without a visibility estimate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    /// Attach a visibility estimate
    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Whether every coordinate is a finite number
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_landmark() {
        assert!(Landmark::new(0.5, 0.5, 0.0).is_finite());
    }

    #[test]
    fn test_non_finite_landmark() {
        assert!(!Landmark::new(f64::NAN, 0.5, 0.0).is_finite());
        assert!(!Landmark::new(0.5, f64::INFINITY, 0.0).is_finite());
        assert!(!Landmark::new(0.5, 0.5, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_visibility_builder() {
        let lm = Landmark::new(0.1, 0.2, 0.3).with_visibility(0.9);
        assert_eq!(lm.visibility, Some(0.9));
    }
}
