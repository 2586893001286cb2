use std::fmt;

use crate::math::Point3;

/// A numbered vertex of the planar graph.
///
/// Ids are dense (`0..n`) and assigned once, after the final deduplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub id: usize,
    /// Pattern-space position; `z` is always 0 at this stage.
    pub point: Point3,
}

impl Vertex {
    /// Creates a new vertex.
    #[must_use]
    pub fn new(id: usize, point: Point3) -> Self {
        Self { id, point }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "v{} ({}, {}, {})",
            self.id, self.point.x, self.point.y, self.point.z
        )
    }
}
