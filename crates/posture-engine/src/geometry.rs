//! Angle and offset primitives over landmark coordinates
//!
//! Pure functions; callers only invoke them once the required landmarks
//! are known to be present.

use pose_landmarks::Landmark;

/// Angle of the segment p1 -> p2 against the horizontal axis, in degrees.
///
/// Range (-180, 180]. Magnitude measures tilt of a body segment versus a
/// level horizon; the sign is kept for directional checks.
pub fn line_angle(p1: Landmark, p2: Landmark) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Signed angle at vertex p2 between rays p2 -> p1 and p2 -> p3, in degrees.
///
/// Range (-180, 180], positive counter-clockwise in image coordinates.
pub fn vertex_angle(p1: Landmark, p2: Landmark, p3: Landmark) -> f64 {
    let (ux, uy) = (p1.x - p2.x, p1.y - p2.y);
    let (vx, vy) = (p3.x - p2.x, p3.y - p2.y);
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    cross.atan2(dot).to_degrees()
}

/// Midpoint of two landmarks
pub fn midpoint(a: Landmark, b: Landmark) -> Landmark {
    Landmark::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, (a.z + b.z) / 2.0)
}
