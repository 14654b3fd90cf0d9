//! The 33-point landmark set

use crate::{Landmark, LandmarkError};
use serde::{Deserialize, Serialize};

/// Number of points in the anatomical scheme
pub const LANDMARK_COUNT: usize = 33;

/// Fixed anatomical landmark indices (BlazePose ordering)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

/// One detected body pose: 33 slots, any of which may be unresolved.
///
/// Accessors treat a point with non-finite coordinates as unresolved, so
/// malformed detector output degrades to a skipped check rather than
/// corrupting downstream arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: Vec<Option<Landmark>>,
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl LandmarkSet {
    /// A set with every slot unresolved
    pub fn empty() -> Self {
        Self {
            points: vec![None; LANDMARK_COUNT],
        }
    }

    /// Build a set from raw detector output
    pub fn from_points(points: Vec<Option<Landmark>>) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount {
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Resolve one slot
    pub fn insert(&mut self, index: LandmarkIndex, landmark: Landmark) {
        self.points[index as usize] = Some(landmark);
    }

    /// Builder-style `insert`
    pub fn with(mut self, index: LandmarkIndex, landmark: Landmark) -> Self {
        self.insert(index, landmark);
        self
    }

    /// Get a landmark if it resolved with finite coordinates
    pub fn get(&self, index: LandmarkIndex) -> Option<Landmark> {
        self.points[index as usize].filter(Landmark::is_finite)
    }

    /// Number of resolved, finite landmarks
    pub fn resolved_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.map_or(false, |lm| lm.is_finite()))
            .count()
    }

    /// Whether any landmark resolved at all
    pub fn has_any(&self) -> bool {
        self.resolved_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set() {
        let set = LandmarkSet::empty();
        assert!(!set.has_any());
        assert_eq!(set.resolved_count(), 0);
        assert!(set.get(LandmarkIndex::Nose).is_none());
    }

    #[test]
    fn test_insert_and_get() {
        let set = LandmarkSet::empty().with(LandmarkIndex::LeftShoulder, Landmark::new(0.4, 0.5, 0.0));
        assert!(set.has_any());
        assert_eq!(set.resolved_count(), 1);
        let lm = set.get(LandmarkIndex::LeftShoulder).unwrap();
        assert_eq!(lm.x, 0.4);
        assert!(set.get(LandmarkIndex::RightShoulder).is_none());
    }

    #[test]
    fn test_non_finite_reads_as_missing() {
        let set = LandmarkSet::empty().with(LandmarkIndex::LeftHip, Landmark::new(f64::NAN, 0.5, 0.0));
        assert!(set.get(LandmarkIndex::LeftHip).is_none());
        assert_eq!(set.resolved_count(), 0);
    }

    #[test]
    fn test_from_points_length_check() {
        assert!(LandmarkSet::from_points(vec![None; LANDMARK_COUNT]).is_ok());
        let err = LandmarkSet::from_points(vec![None; 17]).unwrap_err();
        assert!(matches!(err, LandmarkError::WrongCount { actual: 17 }));
    }
}
