use std::cmp::Ordering;

use crate::math::polygon_2d::compare_points;
use crate::math::Point3;
use crate::topology::Segment;

/// Sorts vertices lexicographically and removes exact duplicates.
pub fn dedup_vertices(vertices: &mut Vec<Point3>) {
    vertices.sort_by(compare_points);
    vertices.dedup();
}

/// Removes duplicate segments.
///
/// Endpoints are put in canonical order first, so `(a, b)` and `(b, a)` of
/// the same kind collapse into one; the first occurrence (and its fold
/// angle) wins. Zero-length segments are dropped.
pub fn dedup_segments(segments: &mut Vec<Segment>) {
    let before = segments.len();
    segments.retain(|s| !s.is_degenerate());
    let degenerate = before - segments.len();
    if degenerate > 0 {
        tracing::debug!(degenerate, "dropped zero-length segments");
    }

    for seg in segments.iter_mut() {
        *seg = seg.canonical();
    }
    segments.sort_by(compare_segments);
    segments.dedup_by(|a, b| a.same_crease(b));
}

/// Deduplicates vertices and segments together.
pub fn dedup(vertices: &mut Vec<Point3>, segments: &mut Vec<Segment>) {
    let (vertices_in, segments_in) = (vertices.len(), segments.len());
    dedup_vertices(vertices);
    dedup_segments(segments);
    tracing::debug!(
        vertices_in,
        vertices_out = vertices.len(),
        segments_in,
        segments_out = segments.len(),
        "deduplicated"
    );
}

fn compare_segments(a: &Segment, b: &Segment) -> Ordering {
    compare_points(&a.start, &b.start)
        .then_with(|| compare_points(&a.end, &b.end))
        .then_with(|| a.kind.cmp(&b.kind))
}
