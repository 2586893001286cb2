use std::cmp::Ordering;

use super::{Point3, TOLERANCE};

/// Computes twice the signed area of a polygon in the XY plane (shoelace
/// formula, no halving).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn twice_signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum
}

/// Sum of the absolute shoelace terms of a polygon.
///
/// Bounds the rounding error of [`twice_signed_area_2d`]: an area whose
/// magnitude is a tiny fraction of this scale is indistinguishable from 0.
#[must_use]
pub fn shoelace_scale_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            (points[i].x * points[j].y).abs() + (points[j].x * points[i].y).abs()
        })
        .sum()
}

/// Polar angle of `to - from` in `(-pi, pi]`.
///
/// Coincident points (a zero vector) have angle 0.
#[must_use]
pub fn polar_angle_2d(from: &Point3, to: &Point3) -> f64 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx * dx + dy * dy < TOLERANCE {
        return 0.0;
    }
    dy.atan2(dx)
}

/// Lexicographic `(x, y, z)` ordering, consistent with exact point equality.
///
/// Coordinates are expected to be finite; NaN compares equal to everything.
#[must_use]
pub fn compare_points(a: &Point3, b: &Point3) -> Ordering {
    cmp_f64(a.x, b.x)
        .then_with(|| cmp_f64(a.y, b.y))
        .then_with(|| cmp_f64(a.z, b.z))
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Rotates a closed loop of indices so it starts at its smallest element.
/// Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(loop_ids: &[usize]) -> Vec<usize> {
    let Some((best, _)) = loop_ids.iter().enumerate().min_by_key(|&(_, id)| *id) else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(loop_ids.len());
    rotated.extend_from_slice(&loop_ids[best..]);
    rotated.extend_from_slice(&loop_ids[..best]);
    rotated
}
