use std::fmt;

/// A bounded face: a closed cycle of vertex ids.
///
/// The boundary closes implicitly from the last vertex back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<usize>,
    /// Twice the signed area of the boundary. Always negative for faces
    /// produced by the face tracer.
    pub twice_signed_area: f64,
}

impl Face {
    /// Creates a new face.
    #[must_use]
    pub fn new(vertices: Vec<usize>, twice_signed_area: f64) -> Self {
        Self {
            vertices,
            twice_signed_area,
        }
    }

    /// Number of boundary vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the face has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Unsigned area of the face.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.twice_signed_area.abs() * 0.5
    }

    /// Directed boundary edges `(from, to)`, including the closing edge.
    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.vertices.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_edges_close_the_loop() {
        let face = Face::new(vec![0, 2, 3, 1], -200.0);
        let edges: Vec<_> = face.directed_edges().collect();
        assert_eq!(edges, vec![(0, 2), (2, 3), (3, 1), (1, 0)]);
        assert!((face.area() - 100.0).abs() < 1e-12);
        assert_eq!(face.to_string(), "[0, 2, 3, 1]");
    }
}
