use super::vec2::Vec2;
use crate::collision::AABB;
use serde::{Deserialize, Serialize};

/// Placement of an entity: position, rotation in degrees, size and pivot.
///
/// The four corner vertices are cached in local space (offset by the pivot) and in
/// world space (rotated, then translated). Every setter refreshes both, so the
/// world vertices are never stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "TransformDesc", into = "TransformDesc")]
pub struct Transform {
    position: Vec2,
    rotation: f64,
    size: Vec2,
    pivot: Vec2,
    vertices: [Vec2; 4],
    world_vertices: [Vec2; 4],
}

/// Serialized form of a [`Transform`]; the vertex caches are rebuilt on load.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformDesc {
    pub position: Vec2,
    pub rotation: f64,
    pub size: Vec2,
    pub pivot: Vec2,
}

impl Default for TransformDesc {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ONE,
            pivot: Transform::CENTER_PIVOT,
        }
    }
}

impl From<TransformDesc> for Transform {
    fn from(desc: TransformDesc) -> Self {
        let mut t = Transform::new(desc.position, desc.size, desc.rotation);
        t.set_pivot(desc.pivot);
        t
    }
}

impl From<Transform> for TransformDesc {
    fn from(t: Transform) -> Self {
        Self {
            position: t.position,
            rotation: t.rotation,
            size: t.size,
            pivot: t.pivot,
        }
    }
}

impl Transform {
    pub const CENTER_PIVOT: Vec2 = Vec2 { x: 0.5, y: 0.5 };

    /// Creates a transform with a centered pivot.
    pub fn new(position: Vec2, size: Vec2, rotation: f64) -> Self {
        let mut t = Self {
            position,
            rotation,
            size,
            pivot: Self::CENTER_PIVOT,
            vertices: [Vec2::ZERO; 4],
            world_vertices: [Vec2::ZERO; 4],
        };
        t.update_vertices();
        t
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    /// Corner vertices relative to the position, before rotation.
    /// Order: top left, top right, bottom right, bottom left.
    pub fn vertices(&self) -> &[Vec2; 4] {
        &self.vertices
    }

    /// Corner vertices in world space.
    pub fn world_vertices(&self) -> &[Vec2; 4] {
        &self.world_vertices
    }

    /// Radius used when this transform backs a circle collider.
    pub fn radius(&self) -> f64 {
        self.size.x / 2.0
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_world_vertices();
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
        self.update_world_vertices();
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.update_vertices();
    }

    /// Sets the normalized anchor, `(0, 0)` top left to `(1, 1)` bottom right.
    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
        self.update_vertices();
    }

    /// Unit vector along the local x axis.
    pub fn right(&self) -> Vec2 {
        Vec2::new(1.0, 0.0).rotate(self.rotation)
    }

    /// Unit vector along the local y axis.
    pub fn up(&self) -> Vec2 {
        Vec2::new(0.0, 1.0).rotate(self.rotation)
    }

    /// Axis-aligned bounds of the world vertices.
    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.world_vertices)
            .unwrap_or_else(|| AABB::new(self.position, self.position))
    }

    fn update_vertices(&mut self) {
        let top_left = Vec2::new(-self.pivot.x * self.size.x, self.pivot.y * self.size.y);
        self.vertices = [
            top_left,
            Vec2::new(top_left.x + self.size.x, top_left.y),
            Vec2::new(top_left.x + self.size.x, top_left.y - self.size.y),
            Vec2::new(top_left.x, top_left.y - self.size.y),
        ];
        self.update_world_vertices();
    }

    fn update_world_vertices(&mut self) {
        let position = self.position;
        let rotation = self.rotation;
        for (world, local) in self.world_vertices.iter_mut().zip(self.vertices.iter()) {
            *world = position + local.rotate(rotation);
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        TransformDesc::default().into()
    }
}
