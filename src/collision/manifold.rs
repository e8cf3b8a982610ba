use crate::math::vec2::Vec2;

/// Penetration data for an overlapping pair of shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionManifold {
    /// Unit direction pointing from shape A towards shape B.
    pub normal: Vec2,
    /// How far the shapes overlap along `normal`.
    pub depth: f64,
}

impl CollisionManifold {
    pub fn new(normal: Vec2, depth: f64) -> Self {
        Self { normal, depth }
    }

    /// The same contact seen from the other shape.
    pub fn reversed(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}
