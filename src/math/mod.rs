pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type. Pattern-space points always carry `z == 0`.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default vertex merge tolerance, in drawing units.
///
/// Governs both how far apart two points may be and still be merged into one
/// vertex, and how close a crossing must be to a segment endpoint to count as
/// touching that endpoint instead of crossing the segment's interior.
pub const DEFAULT_VERTEX_MERGE_TOLERANCE: f64 = 3.0;

/// Smallest vertex merge tolerance the planarizer works with.
///
/// Recomputed crossings between split halves land a rounding error away from
/// their shared endpoint; the endpoint band must be wide enough to absorb it.
pub const MIN_VERTEX_MERGE_TOLERANCE: f64 = 1e-6;

/// Creates a pattern-space point (`z = 0`).
#[must_use]
pub fn pattern_point(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}
