use crate::math::polygon_2d::polar_angle_2d;
use crate::topology::Vertex;

/// Sorts every adjacency list by descending polar angle around its vertex.
///
/// The comparator captures the centre vertex explicitly, so each list is
/// sorted independently of the others. Coincident neighbours sort at angle 0.
pub fn sort_by_angle(vertices: &[Vertex], adjacency: &mut [Vec<usize>]) {
    for (center, neighbors) in vertices.iter().zip(adjacency.iter_mut()) {
        sort_neighbors(center, vertices, neighbors);
    }
}

/// Sorts one vertex's neighbours by descending polar angle.
pub fn sort_neighbors(center: &Vertex, vertices: &[Vertex], neighbors: &mut [usize]) {
    let origin = center.point;
    neighbors.sort_by(|&a, &b| {
        let angle_a = polar_angle_2d(&origin, &vertices[a].point);
        let angle_b = polar_angle_2d(&origin, &vertices[b].point);
        angle_b.total_cmp(&angle_a)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::pattern_point;

    #[test]
    fn neighbors_run_clockwise_from_pi() {
        let vertices = vec![
            Vertex::new(0, pattern_point(0.0, 0.0)),
            Vertex::new(1, pattern_point(5.0, 0.0)),
            Vertex::new(2, pattern_point(0.0, 5.0)),
            Vertex::new(3, pattern_point(-5.0, 0.0)),
            Vertex::new(4, pattern_point(0.0, -5.0)),
        ];
        let mut adjacency = vec![vec![1, 2, 3, 4], vec![0], vec![0], vec![0], vec![0]];
        sort_by_angle(&vertices, &mut adjacency);
        // pi, pi/2, 0, -pi/2
        assert_eq!(adjacency[0], vec![3, 2, 1, 4]);
    }

    #[test]
    fn coincident_neighbor_sorts_at_zero() {
        let vertices = vec![
            Vertex::new(0, pattern_point(0.0, 0.0)),
            Vertex::new(1, pattern_point(0.0, 0.0)),
            Vertex::new(2, pattern_point(0.0, 3.0)),
            Vertex::new(3, pattern_point(0.0, -3.0)),
        ];
        let mut neighbors = vec![3, 1, 2];
        sort_neighbors(&vertices[0], &vertices, &mut neighbors);
        assert_eq!(neighbors, vec![2, 1, 3]);
    }
}
