pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use serde::{Deserialize, Serialize};

/// Geometry a collider tests with. Both variants take their extent from the
/// owning entity's transform: a box uses the four world vertices, a circle
/// uses the position as center and half the width as radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColliderShape {
    #[default]
    Box,
    Circle,
}

/// Interval covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// True when the two intervals leave a gap (touching counts as a gap).
    pub fn separated(&self, other: &Projection) -> bool {
        self.min >= other.max || other.min >= self.max
    }

    /// Overlap length, assuming the intervals are not separated.
    pub fn overlap(&self, other: &Projection) -> f64 {
        (other.max - self.min).min(self.max - other.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_touching_is_separated() {
        let a = Projection { min: 0.0, max: 1.0 };
        let b = Projection { min: 1.0, max: 2.0 };
        assert!(a.separated(&b));
        assert!(b.separated(&a));
    }

    #[test]
    fn test_projection_overlap() {
        let a = Projection { min: 0.0, max: 3.0 };
        let b = Projection { min: 2.0, max: 10.0 };
        assert!(!a.separated(&b));
        assert_eq!(a.overlap(&b), 1.0);
        assert_eq!(b.overlap(&a), 1.0);
    }
}
