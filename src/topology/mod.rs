pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{Edge, FoldKind, Segment};
pub use face::Face;
pub use vertex::Vertex;

use crate::math::Point3;
use crate::operations::planarize::PlanarizeReport;

/// The frozen result of processing one crease pattern.
///
/// Vertex ids index directly into [`PlanarGraph::vertices`]; edges, adjacency
/// lists and faces all refer to vertices by id.
#[derive(Debug, Clone)]
pub struct PlanarGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
    collapsed_edges: Vec<usize>,
    faces: Vec<Face>,
    report: PlanarizeReport,
}

impl PlanarGraph {
    pub(crate) fn new(
        vertices: Vec<Vertex>,
        edges: Vec<Edge>,
        adjacency: Vec<Vec<usize>>,
        collapsed_edges: Vec<usize>,
        faces: Vec<Face>,
        report: PlanarizeReport,
    ) -> Self {
        Self {
            vertices,
            edges,
            adjacency,
            collapsed_edges,
            faces,
            report,
        }
    }

    /// All vertices, ordered by id.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, id: usize) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// All edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges of a single kind (e.g. all mountain folds).
    pub fn edges_of_kind(&self, kind: FoldKind) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// Neighbours of a vertex in descending polar angle order.
    #[must_use]
    pub fn neighbors(&self, id: usize) -> &[usize] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// The angularly sorted adjacency lists, indexed by vertex id.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Indices into [`PlanarGraph::edges`] of edges left out of the
    /// adjacency: self-loops and extra edges between an already joined pair.
    #[must_use]
    pub fn collapsed_edges(&self) -> &[usize] {
        &self.collapsed_edges
    }

    /// The bounded faces.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Boundary positions of a face, in walk order.
    #[must_use]
    pub fn face_points(&self, face: &Face) -> Vec<Point3> {
        face.vertices
            .iter()
            .filter_map(|&id| self.vertex(id).map(|v| v.point))
            .collect()
    }

    /// What the planarizer did to the input.
    #[must_use]
    pub fn planarize_report(&self) -> &PlanarizeReport {
        &self.report
    }
}
