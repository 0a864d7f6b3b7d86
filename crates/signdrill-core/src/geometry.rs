//! Distance and joint-angle math over 2-D landmarks.

use crate::landmarks::Point;

/// Cosine magnitudes below this are treated as a zero-length ray.
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Euclidean distance between two points. A missing point counts as the origin.
pub fn distance(p: impl Into<Option<Point>>, q: impl Into<Option<Point>>) -> f64 {
    let p = p.into().unwrap_or(Point::ORIGIN);
    let q = q.into().unwrap_or(Point::ORIGIN);
    (p.x - q.x).hypot(p.y - q.y)
}

/// Angle in degrees at vertex `b` between the rays `b→a` and `b→c`.
///
/// Uses cos(θ) = (v1 · v2) / (|v1| × |v2|) with the cosine clamped to
/// [-1, 1]. Returns `0.0` when either ray has zero length.
///
/// - 180° = the three points are collinear (straight joint)
/// - 90° = right-angle bend
pub fn angle_at(a: Point, b: Point, c: Point) -> f64 {
    let v1 = (a.x - b.x, a.y - b.y);
    let v2 = (c.x - b.x, c.y - b.y);

    let mag1 = v1.0.hypot(v1.1);
    let mag2 = v2.0.hypot(v2.1);
    if mag1 < DEGENERATE_EPSILON || mag2 < DEGENERATE_EPSILON {
        return 0.0;
    }

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basic() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn distance_missing_point_is_origin() {
        assert!((distance(None, Point::new(6.0, 8.0)) - 10.0).abs() < 1e-9);
        assert_eq!(distance(None, None), 0.0);
    }

    #[test]
    fn straight_joint() {
        let angle = angle_at(Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(1.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-6);
    }

    #[test]
    fn right_angle_joint() {
        let angle = angle_at(Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(0.5, 0.5));
        assert!((angle - 90.0).abs() < 1e-6);
    }

    #[test]
    fn folded_back_joint() {
        let angle = angle_at(Point::new(1.0, 0.0), Point::new(0.0, 0.0), Point::new(2.0, 0.0));
        assert!(angle.abs() < 1e-6);
    }

    #[test]
    fn coincident_points_yield_zero() {
        let p = Point::new(3.0, 3.0);
        assert_eq!(angle_at(p, p, Point::new(4.0, 4.0)), 0.0);
        assert_eq!(angle_at(Point::new(4.0, 4.0), p, p), 0.0);
    }

    #[test]
    fn nearly_collinear_does_not_produce_nan() {
        let angle = angle_at(
            Point::new(0.0, 0.0),
            Point::new(1e-3, 1e-12),
            Point::new(2e-3, 0.0),
        );
        assert!(angle.is_finite());
    }
}
