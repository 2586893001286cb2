use std::collections::VecDeque;

use slotmap::SlotMap;

use crate::math::intersect_2d::{distance_along, segment_lines_intersect_2d};
use crate::math::{Point3, MIN_VERTEX_MERGE_TOLERANCE};
use crate::topology::Segment;

slotmap::new_key_type! {
    /// Handle to a live segment in the planarizer's work arena.
    struct SegmentKey;
}

/// How two segments cross, and which of them must be split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Where the split happens: the computed intersection when both segments
    /// are crossed in their interior, otherwise the touching endpoint of the
    /// segment that is not split.
    pub point: Point3,
    pub split_a: bool,
    pub split_b: bool,
}

/// Classifies the intersection of `a` and `b` under tolerance `tol`.
///
/// Returns `None` when the segments are parallel, when the crossing of their
/// supporting lines lies more than `tol` beyond either segment, or when it
/// lies within `tol` of an endpoint on both segments.
#[must_use]
pub fn classify_crossing(a: &Segment, b: &Segment, tol: f64) -> Option<Crossing> {
    let (point, t, u) = segment_lines_intersect_2d(&a.start, &a.end, &b.start, &b.end)?;

    let len_a = a.length();
    let len_b = b.length();
    let d_a = distance_along(t, len_a, tol)?;
    let d_b = distance_along(u, len_b, tol)?;

    let split_a = d_a > tol && d_a < len_a - tol;
    let split_b = d_b > tol && d_b < len_b - tol;

    let point = match (split_a, split_b) {
        (false, false) => return None,
        (true, true) => point,
        (true, false) => nearer_endpoint(b, d_b),
        (false, true) => nearer_endpoint(a, d_a),
    };
    Some(Crossing {
        point,
        split_a,
        split_b,
    })
}

fn nearer_endpoint(seg: &Segment, dist: f64) -> Point3 {
    if dist <= seg.length() - dist {
        seg.start
    } else {
        seg.end
    }
}

/// Counters describing one planarization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanarizeReport {
    /// Number of segments replaced by two halves.
    pub splits: usize,
    /// Number of new vertices created at interior-interior crossings.
    pub vertices_added: usize,
    /// Number of segment pairs classified.
    pub pairs_tested: usize,
}

/// Output of [`Planarize::execute`].
#[derive(Debug, Clone)]
pub struct Planarized {
    /// Segments that meet only at their endpoints.
    pub segments: Vec<Segment>,
    /// Crossing points introduced by the pass, to be merged into the vertex set.
    pub new_vertices: Vec<Point3>,
    /// What the pass did.
    pub report: PlanarizeReport,
}

/// Splits segments at their crossings until no two segments cross in their
/// interiors.
///
/// Segments live in an arena; a split retires the parent and queues both
/// halves, so indices of unrelated segments never move. A segment becomes
/// settled only after it has been tested against every settled segment, and
/// a settled segment that gets split is withdrawn and its halves re-queued.
/// When the queue drains every remaining pair has been tested against its
/// final geometry.
#[derive(Debug)]
pub struct Planarize {
    tolerance: f64,
}

impl Planarize {
    /// Creates a new planarization pass with the given vertex merge tolerance,
    /// raised to at least [`MIN_VERTEX_MERGE_TOLERANCE`].
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.max(MIN_VERTEX_MERGE_TOLERANCE),
        }
    }

    /// Executes the pass.
    #[must_use]
    pub fn execute(&self, segments: Vec<Segment>) -> Planarized {
        let mut arena: SlotMap<SegmentKey, Segment> = SlotMap::with_key();
        let mut pending: VecDeque<SegmentKey> =
            segments.into_iter().map(|s| arena.insert(s)).collect();
        let mut settled: Vec<SegmentKey> = Vec::with_capacity(pending.len());
        let mut new_vertices = Vec::new();
        let mut report = PlanarizeReport::default();

        while let Some(key) = pending.pop_front() {
            let Some(&seg) = arena.get(key) else {
                continue;
            };

            let mut hit = None;
            for (pos, &other_key) in settled.iter().enumerate() {
                report.pairs_tested += 1;
                if let Some(crossing) = classify_crossing(&seg, &arena[other_key], self.tolerance) {
                    hit = Some((pos, other_key, crossing));
                    break;
                }
            }

            let Some((pos, other_key, crossing)) = hit else {
                settled.push(key);
                continue;
            };

            if crossing.split_a && crossing.split_b {
                new_vertices.push(crossing.point);
                report.vertices_added += 1;
            }

            if crossing.split_b {
                settled.remove(pos);
                if let Some(other) = arena.remove(other_key) {
                    tracing::trace!(?other, point = ?crossing.point, "split settled segment");
                    for half in other.split_at(crossing.point) {
                        if !half.is_degenerate() {
                            pending.push_back(arena.insert(half));
                        }
                    }
                    report.splits += 1;
                }
            }

            if crossing.split_a {
                arena.remove(key);
                tracing::trace!(?seg, point = ?crossing.point, "split segment");
                for half in seg.split_at(crossing.point).into_iter().rev() {
                    if !half.is_degenerate() {
                        pending.push_front(arena.insert(half));
                    }
                }
                report.splits += 1;
            } else {
                pending.push_front(key);
            }
        }

        tracing::debug!(
            segments = settled.len(),
            splits = report.splits,
            vertices_added = report.vertices_added,
            "planarized"
        );

        let segments = settled.into_iter().filter_map(|k| arena.remove(k)).collect();
        Planarized {
            segments,
            new_vertices,
            report,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{pattern_point, DEFAULT_VERTEX_MERGE_TOLERANCE};
    use crate::topology::FoldKind;
    use approx::assert_relative_eq;

    const TOL: f64 = DEFAULT_VERTEX_MERGE_TOLERANCE;

    fn seg(a: (f64, f64), b: (f64, f64), kind: FoldKind) -> Segment {
        Segment::new(pattern_point(a.0, a.1), pattern_point(b.0, b.1), kind, 0.0)
    }

    #[test]
    fn crossing_diagonals_split_both() {
        let a = seg((0.0, 0.0), (10.0, 10.0), FoldKind::Mountain);
        let b = seg((0.0, 10.0), (10.0, 0.0), FoldKind::Valley);
        let c = classify_crossing(&a, &b, TOL).unwrap();
        assert!(c.split_a && c.split_b);
        assert_relative_eq!(c.point.x, 5.0);
        assert_relative_eq!(c.point.y, 5.0);
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        let a = seg((0.0, 0.0), (10.0, 0.0), FoldKind::Border);
        let b = seg((0.0, 0.0), (0.0, 10.0), FoldKind::Border);
        assert!(classify_crossing(&a, &b, TOL).is_none());
    }

    #[test]
    fn far_crossing_is_ignored() {
        let a = seg((0.0, 0.0), (10.0, 0.0), FoldKind::Border);
        let b = seg((20.0, -5.0), (20.0, 5.0), FoldKind::Border);
        assert!(classify_crossing(&a, &b, TOL).is_none());
    }

    #[test]
    fn t_junction_splits_only_the_bar() {
        let bar = seg((0.0, 0.0), (20.0, 0.0), FoldKind::Border);
        let stem = seg((10.0, 0.0), (10.0, 10.0), FoldKind::Valley);
        let c = classify_crossing(&bar, &stem, TOL).unwrap();
        assert!(c.split_a && !c.split_b);
        assert_eq!(c.point, pattern_point(10.0, 0.0));

        let c = classify_crossing(&stem, &bar, TOL).unwrap();
        assert!(!c.split_a && c.split_b);
        assert_eq!(c.point, pattern_point(10.0, 0.0));
    }

    #[test]
    fn near_miss_snaps_to_stem_endpoint() {
        // The stem stops 1 unit short of the bar, inside the tolerance band.
        let bar = seg((0.0, 0.0), (20.0, 0.0), FoldKind::Border);
        let stem = seg((10.0, 10.0), (10.0, 1.0), FoldKind::Mountain);
        let out = Planarize::new(TOL).execute(vec![bar, stem]);
        assert_eq!(out.report.splits, 1);
        assert_eq!(out.report.vertices_added, 0);
        assert_eq!(out.segments.len(), 3);
        let snapped = pattern_point(10.0, 1.0);
        let touching = out
            .segments
            .iter()
            .filter(|s| s.start == snapped || s.end == snapped)
            .count();
        assert_eq!(touching, 3);
    }

    #[test]
    fn collinear_overlap_is_left_alone() {
        let a = seg((0.0, 0.0), (10.0, 0.0), FoldKind::Border);
        let b = seg((5.0, 0.0), (15.0, 0.0), FoldKind::Border);
        let out = Planarize::new(TOL).execute(vec![a, b]);
        assert_eq!(out.report.splits, 0);
        assert_eq!(out.segments.len(), 2);
    }

    #[test]
    fn split_halves_keep_kind_angle_and_length() {
        let a = Segment::new(
            pattern_point(0.0, 0.0),
            pattern_point(10.0, 10.0),
            FoldKind::Mountain,
            -1.5,
        );
        let b = seg((0.0, 10.0), (10.0, 0.0), FoldKind::Triangulation);
        let out = Planarize::new(TOL).execute(vec![a, b]);
        assert_eq!(out.segments.len(), 4);
        assert_eq!(out.new_vertices, vec![pattern_point(5.0, 5.0)]);

        let mountains: Vec<_> = out
            .segments
            .iter()
            .filter(|s| s.kind == FoldKind::Mountain)
            .collect();
        assert_eq!(mountains.len(), 2);
        let total: f64 = mountains.iter().map(|s| s.length()).sum();
        assert_relative_eq!(total, a.length(), epsilon = 1e-9);
        assert!(mountains.iter().all(|s| (s.fold_angle + 1.5).abs() < 1e-12));
    }

    #[test]
    fn zero_tolerance_is_raised_to_the_minimum() {
        // Three lines crossing pairwise at three distinct interior points.
        let segments = vec![
            seg((0.0, 0.0), (10.0, 10.0), FoldKind::Mountain),
            seg((0.0, 10.0), (10.0, 0.0), FoldKind::Valley),
            seg((0.0, 3.0), (10.0, 4.0), FoldKind::Cut),
        ];
        let out = Planarize::new(0.0).execute(segments);
        assert_eq!(out.report.splits, 6);
        assert_eq!(out.report.vertices_added, 3);
        assert_eq!(out.segments.len(), 9);
    }

    #[test]
    fn grid_of_lines_is_fully_planarized() {
        // Three horizontals and three verticals crossing in nine points.
        let mut segments = Vec::new();
        for k in [10.0, 20.0, 30.0] {
            segments.push(seg((0.0, k), (40.0, k), FoldKind::Valley));
            segments.push(seg((k, 0.0), (k, 40.0), FoldKind::Mountain));
        }
        let out = Planarize::new(TOL).execute(segments);
        assert_eq!(out.new_vertices.len(), 9);
        // Each line ends up in four pieces.
        assert_eq!(out.segments.len(), 24);
        for (i, a) in out.segments.iter().enumerate() {
            for b in &out.segments[i + 1..] {
                assert!(classify_crossing(a, b, TOL).is_none());
            }
        }
    }
}
