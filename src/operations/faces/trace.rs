use std::collections::{HashMap, HashSet};

use crate::error::{Result, TopologyError};
use crate::math::polygon_2d::{rotate_to_canonical_start, shoelace_scale_2d, twice_signed_area_2d};
use crate::math::{Point3, TOLERANCE};
use crate::topology::{Face, Vertex};

/// A directed edge `(from, to)` between vertex ids.
pub type DirectedEdge = (usize, usize);

/// The face-tracing successor of every directed edge.
///
/// Arriving at `v` from `u`, the walk leaves toward the neighbour just
/// before `u` in `v`'s angularly sorted list (wrapping around).
#[derive(Debug, Clone, Default)]
pub struct NextMap {
    next: HashMap<DirectedEdge, usize>,
    order: Vec<DirectedEdge>,
}

impl NextMap {
    /// Builds the successor table from angularly sorted adjacency lists.
    #[must_use]
    pub fn build(adjacency: &[Vec<usize>]) -> Self {
        let mut map = Self::default();
        for (v, neighbors) in adjacency.iter().enumerate() {
            let n = neighbors.len();
            for (j, &u) in neighbors.iter().enumerate() {
                let w = neighbors[(j + n - 1) % n];
                map.next.insert((u, v), w);
                map.order.push((u, v));
            }
        }
        map
    }

    /// The vertex the walk continues to after traversing `from -> to`.
    #[must_use]
    pub fn next(&self, from: usize, to: usize) -> Option<usize> {
        self.next.get(&(from, to)).copied()
    }

    /// All directed edges, grouped by their head vertex in id order.
    #[must_use]
    pub fn directed_edges(&self) -> &[DirectedEdge] {
        &self.order
    }

    /// Number of directed edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Result of tracing every face boundary.
#[derive(Debug, Clone, Default)]
pub struct TracedFaces {
    /// Bounded faces (negative orientation).
    pub bounded: Vec<Face>,
    /// Number of walks discarded as outer boundaries.
    pub discarded: usize,
}

/// Traces every closed walk of the graph and keeps the bounded faces.
///
/// Each directed edge is consumed by exactly one walk. Walks with negative
/// twice-signed area are bounded faces; the rest (one outer boundary per
/// connected component, plus zero-area walks around dangling trees) are
/// discarded. An area within rounding error of 0, relative to the walk's
/// shoelace scale, counts as zero.
///
/// # Errors
///
/// Returns `TopologyError::UnresolvedFaceWalk` if a walk runs into an edge
/// already consumed before closing, and `TopologyError::MissingTraversal` if
/// a walk reaches a directed edge with no successor.
pub fn trace_faces(vertices: &[Vertex], next: &NextMap) -> Result<TracedFaces> {
    let mut consumed: HashSet<DirectedEdge> = HashSet::with_capacity(next.len());
    let mut traced = TracedFaces::default();

    for &start in next.directed_edges() {
        if consumed.contains(&start) {
            continue;
        }
        let walk = walk_face(start, next, &mut consumed)?;
        let points: Vec<Point3> = walk.iter().map(|&id| vertices[id].point).collect();
        let area = twice_signed_area_2d(&points);
        if area < -TOLERANCE * shoelace_scale_2d(&points) {
            traced
                .bounded
                .push(Face::new(rotate_to_canonical_start(&walk), area));
        } else {
            tracing::trace!(?walk, area, "discarding outer walk");
            traced.discarded += 1;
        }
    }

    tracing::debug!(
        bounded = traced.bounded.len(),
        discarded = traced.discarded,
        "traced faces"
    );
    Ok(traced)
}

/// Follows successors from `start` until the walk returns to `start`,
/// returning the visited vertices in order.
fn walk_face(
    start: DirectedEdge,
    next: &NextMap,
    consumed: &mut HashSet<DirectedEdge>,
) -> Result<Vec<usize>> {
    let mut face = vec![start.0];
    let (mut u, mut v) = start;
    loop {
        if !consumed.insert((u, v)) {
            return Err(TopologyError::UnresolvedFaceWalk {
                from: start.0,
                to: start.1,
                walked: face.len(),
            }
            .into());
        }
        let w = next
            .next(u, v)
            .ok_or(TopologyError::MissingTraversal { from: u, to: v })?;
        if (v, w) == start {
            return Ok(face);
        }
        face.push(v);
        u = v;
        v = w;
    }
}
