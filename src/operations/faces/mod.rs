//! Face enumeration over a planar straight-line graph: adjacency, angular
//! ordering and boundary walks.

pub mod adjacency;
pub mod angular_sort;
pub mod trace;

pub use adjacency::{build_adjacency, number_vertices, resolve_edges, vertex_id, Adjacency};
pub use angular_sort::sort_by_angle;
pub use trace::{trace_faces, DirectedEdge, NextMap, TracedFaces};
