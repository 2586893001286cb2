use super::{Point3, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point3,
    d1: &Vector2,
    p2: &Point3,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection of the infinite lines through segments `a0-a1` and `b0-b1`.
///
/// Returns `(point, t, u)` where `t` is the parameter along `a` (0 at `a0`,
/// 1 at `a1`) and `u` the parameter along `b`. The parameters are not
/// clamped: callers decide how far outside `[0, 1]` they still accept.
/// Parallel and collinear segments yield `None`.
#[must_use]
pub fn segment_lines_intersect_2d(
    a0: &Point3,
    a1: &Point3,
    b0: &Point3,
    b1: &Point3,
) -> Option<(Point3, f64, f64)> {
    let da = Vector2::new(a1.x - a0.x, a1.y - a0.y);
    let db = Vector2::new(b1.x - b0.x, b1.y - b0.y);
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;
    Some((point_at(a0, &da, t), t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point3, dir: &Vector2, t: f64) -> Point3 {
    Point3::new(origin.x + dir.x * t, origin.y + dir.y * t, origin.z)
}

/// Converts a line parameter into a distance from the segment start.
///
/// Returns `None` when the distance lies outside `[-tol, length + tol]`, i.e.
/// the crossing is too far beyond either end to concern this segment.
#[must_use]
pub fn distance_along(t: f64, length: f64, tol: f64) -> Option<f64> {
    let dist = t * length;
    if dist < -tol || dist > length + tol {
        return None;
    }
    Some(dist)
}

/// 2D length of the segment `a-b`, ignoring `z`.
#[must_use]
pub fn segment_length_2d(a: &Point3, b: &Point3) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::pattern_point;
    use approx::assert_relative_eq;

    #[test]
    fn crossing_diagonals_meet_at_center() {
        let (pt, t, u) = segment_lines_intersect_2d(
            &pattern_point(0.0, 0.0),
            &pattern_point(10.0, 10.0),
            &pattern_point(0.0, 10.0),
            &pattern_point(10.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(pt.x, 5.0);
        assert_relative_eq!(pt.y, 5.0);
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(u, 0.5);
    }

    #[test]
    fn parameters_are_not_clamped() {
        let (pt, t, u) = segment_lines_intersect_2d(
            &pattern_point(0.0, 0.0),
            &pattern_point(1.0, 0.0),
            &pattern_point(3.0, -1.0),
            &pattern_point(3.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(pt.x, 3.0);
        assert_relative_eq!(t, 3.0);
        assert_relative_eq!(u, 0.5);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let hit = segment_lines_intersect_2d(
            &pattern_point(0.0, 0.0),
            &pattern_point(10.0, 0.0),
            &pattern_point(0.0, 5.0),
            &pattern_point(10.0, 5.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn collinear_segments_have_no_intersection() {
        let hit = segment_lines_intersect_2d(
            &pattern_point(0.0, 0.0),
            &pattern_point(10.0, 0.0),
            &pattern_point(5.0, 0.0),
            &pattern_point(15.0, 0.0),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn distance_along_accepts_tolerance_band() {
        assert_relative_eq!(distance_along(0.5, 10.0, 3.0).unwrap(), 5.0);
        assert_relative_eq!(distance_along(-0.2, 10.0, 3.0).unwrap(), -2.0);
        assert_relative_eq!(distance_along(1.25, 10.0, 3.0).unwrap(), 12.5);
        assert!(distance_along(-0.5, 10.0, 3.0).is_none());
        assert!(distance_along(1.5, 10.0, 3.0).is_none());
    }

    #[test]
    fn length_ignores_z() {
        let a = Point3::new(0.0, 0.0, 7.0);
        let b = Point3::new(3.0, 4.0, -2.0);
        assert_relative_eq!(segment_length_2d(&a, &b), 5.0);
    }
}
