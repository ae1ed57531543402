//! Joint angle calculation from three landmarks
//!
//! The angle at vertex `b` is the absolute difference between the
//! directions of rays b→c and b→a, measured in the image plane.

use crate::bridge::Landmark;

/// Calculate the planar angle at `b` in degrees
///
/// `|atan2(c - b) - atan2(a - b)|`, not folded into 0-180°, so a
/// reflex configuration can report up to 360°. Coincident points give
/// whatever `atan2(0, 0)` gives; that case is not special-cased.
///
/// Typical readings:
/// - 180° = limb fully straight
/// - 90° = right-angle bend
pub fn calculate_joint_angle(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let to_c = (c.y - b.y).atan2(c.x - b.x);
    let to_a = (a.y - b.y).atan2(a.x - b.x);
    (to_c - to_a).to_degrees().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32) -> Landmark {
        Landmark::new(x, y, 0.0, 1.0)
    }

    #[test]
    fn test_straight_limb() {
        let angle = calculate_joint_angle(&point(0.0, 0.0), &point(0.5, 0.0), &point(1.0, 0.0));
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle() {
        let angle = calculate_joint_angle(&point(0.0, 0.0), &point(0.5, 0.0), &point(0.5, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_not_folded_past_180() {
        // a at 170°, c at -170° around b: raw difference is 340°
        let b = point(0.5, 0.5);
        let a = point(0.5 + 170f32.to_radians().cos(), 0.5 + 170f32.to_radians().sin());
        let c = point(0.5 + (-170f32).to_radians().cos(), 0.5 + (-170f32).to_radians().sin());
        let angle = calculate_joint_angle(&a, &b, &c);
        assert!((angle - 340.0).abs() < 0.05);
    }

    #[test]
    fn test_degenerate_is_deterministic() {
        let p = point(0.3, 0.3);
        let first = calculate_joint_angle(&p, &p, &p);
        let second = calculate_joint_angle(&p, &p, &p);
        assert_eq!(first, second);
        assert!(first.is_finite());
    }
}
