use super::Projection;
use crate::math::vec2::Vec2;

/// A convex polygon borrowed from a slice of world-space vertices.
///
/// Vertex order only needs to be consistent. Two vertices are accepted and
/// treat the polygon as a line segment, which is how ray casts are tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<'a> {
    pub vertices: &'a [Vec2],
}

impl<'a> Polygon<'a> {
    pub fn new(vertices: &'a [Vec2]) -> Self {
        Self { vertices }
    }

    /// Arithmetic mean of the vertices.
    pub fn centroid(&self) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for v in self.vertices {
            sum += *v;
        }
        sum / self.vertices.len() as f64
    }

    /// Normalized left perpendicular `(-e.y, e.x)` of every edge, wrapping from the
    /// last vertex back to the first.
    pub fn edge_axes(&self) -> impl Iterator<Item = Vec2> + 'a {
        let vertices = self.vertices;
        (0..vertices.len()).map(move |i| {
            let edge = vertices[(i + 1) % vertices.len()] - vertices[i];
            Vec2::new(-edge.y, edge.x).normalize()
        })
    }

    pub fn project(&self, axis: Vec2) -> Projection {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for v in self.vertices {
            let p = v.dot(axis);
            if p < min {
                min = p;
            }
            if p > max {
                max = p;
            }
        }
        Projection { min, max }
    }

    /// Vertex nearest to `point`. The first vertex wins a tie.
    pub fn closest_vertex(&self, point: Vec2) -> Option<Vec2> {
        let mut closest = None;
        let mut min_distance = f64::MAX;
        for v in self.vertices {
            let distance = v.distance(point);
            if distance < min_distance {
                min_distance = distance;
                closest = Some(*v);
            }
        }
        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn square(half: f64) -> [Vec2; 4] {
        [
            Vec2::new(-half, half),
            Vec2::new(half, half),
            Vec2::new(half, -half),
            Vec2::new(-half, -half),
        ]
    }

    #[test]
    fn test_polygon_centroid_is_vertex_mean() {
        let verts = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)];
        let c = Polygon::new(&verts).centroid();
        assert!((c.x - 1.0).abs() < EPSILON);
        assert!((c.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_edge_axes_are_unit_left_perpendiculars() {
        let verts = square(1.0);
        let axes: Vec<Vec2> = Polygon::new(&verts).edge_axes().collect();
        assert_eq!(axes.len(), 4);
        // first edge runs (-1, 1) -> (1, 1), direction (2, 0)
        assert!((axes[0].x - 0.0).abs() < EPSILON);
        assert!((axes[0].y - 1.0).abs() < EPSILON);
        for axis in axes {
            assert!((axis.length() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_polygon_segment_has_two_axes() {
        let seg = [Vec2::ZERO, Vec2::new(5.0, 0.0)];
        let axes: Vec<Vec2> = Polygon::new(&seg).edge_axes().collect();
        assert_eq!(axes.len(), 2);
        assert!((axes[0].y - 1.0).abs() < EPSILON);
        assert!((axes[1].y - -1.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_projection() {
        let verts = square(2.0);
        let p = Polygon::new(&verts).project(Vec2::RIGHT);
        assert_eq!(p.min, -2.0);
        assert_eq!(p.max, 2.0);
    }

    #[test]
    fn test_polygon_closest_vertex_first_wins_tie() {
        let verts = square(1.0);
        let poly = Polygon::new(&verts);
        assert_eq!(poly.closest_vertex(Vec2::new(5.0, 5.0)), Some(verts[1]));
        // equidistant from all four corners
        assert_eq!(poly.closest_vertex(Vec2::ZERO), Some(verts[0]));
        assert_eq!(Polygon::new(&[]).closest_vertex(Vec2::ZERO), None);
    }
}
