use crate::error::{Result, TopologyError};
use crate::math::polygon_2d::compare_points;
use crate::math::Point3;
use crate::topology::{Edge, Segment, Vertex};

/// Numbers a deduplicated, lexicographically sorted point set.
///
/// The id of each vertex is its index, so ids are dense and follow the
/// `(x, y, z)` order of the points.
#[must_use]
pub fn number_vertices(points: &[Point3]) -> Vec<Vertex> {
    points
        .iter()
        .enumerate()
        .map(|(id, &point)| Vertex::new(id, point))
        .collect()
}

/// Looks up the id of the vertex at exactly `point`.
///
/// # Errors
///
/// Returns `TopologyError::UnknownVertex` if no vertex sits at `point`.
pub fn vertex_id(vertices: &[Vertex], point: &Point3) -> Result<usize> {
    vertices
        .binary_search_by(|v| compare_points(&v.point, point))
        .map_err(|_| TopologyError::UnknownVertex(point.x, point.y).into())
}

/// Replaces segment endpoints with vertex ids.
///
/// # Errors
///
/// Returns `TopologyError::UnknownVertex` if an endpoint is missing from the
/// vertex set.
pub fn resolve_edges(vertices: &[Vertex], segments: &[Segment]) -> Result<Vec<Edge>> {
    segments
        .iter()
        .map(|s| {
            Ok(Edge {
                v1: vertex_id(vertices, &s.start)?,
                v2: vertex_id(vertices, &s.end)?,
                kind: s.kind,
                fold_angle: s.fold_angle,
            })
        })
        .collect()
}

/// Neighbour lists of a planar graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    /// One neighbour list per vertex id.
    pub lists: Vec<Vec<usize>>,
    /// Indices into the edge slice of edges that got no neighbour entry of
    /// their own: self-loops and edges joining an already connected pair.
    pub collapsed: Vec<usize>,
}

/// Builds symmetric adjacency lists, one per vertex id.
///
/// A second edge between an already connected pair (same endpoints, another
/// kind) is reported and contributes no extra neighbour entry.
#[must_use]
pub fn build_adjacency(vertex_count: usize, edges: &[Edge]) -> Adjacency {
    let mut adjacency = Adjacency {
        lists: vec![Vec::new(); vertex_count],
        collapsed: Vec::new(),
    };
    for (index, edge) in edges.iter().enumerate() {
        if edge.v1 == edge.v2 {
            tracing::warn!(vertex = edge.v1, kind = %edge.kind, "ignoring self-loop edge");
            adjacency.collapsed.push(index);
            continue;
        }
        if adjacency.lists[edge.v1].contains(&edge.v2) {
            tracing::warn!(
                v1 = edge.v1,
                v2 = edge.v2,
                kind = %edge.kind,
                "multiple edges join the same vertices; keeping one"
            );
            adjacency.collapsed.push(index);
            continue;
        }
        adjacency.lists[edge.v1].push(edge.v2);
        adjacency.lists[edge.v2].push(edge.v1);
    }
    adjacency
}
