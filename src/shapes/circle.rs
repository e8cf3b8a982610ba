use super::Projection;
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Vec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Projects the circle onto `axis` (expected to be unit length).
    pub fn project(&self, axis: Vec2) -> Projection {
        let offset = axis * self.radius;
        let mut min = (self.center - offset).dot(axis);
        let mut max = (self.center + offset).dot(axis);
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Projection { min, max }
    }
}
