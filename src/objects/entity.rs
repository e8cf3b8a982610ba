use super::collider::Collider;
use super::rigid_body::RigidBody;
use crate::math::{Transform, Vec2};

use thunderdome as td;

/// Key type to look up an entity stored in a [`PhysicsWorld`][crate::world::PhysicsWorld].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityKey(pub(crate) td::Index);

impl EntityKey {
    /// Get the underlying [`thunderdome::Index`] of this key.
    #[inline]
    pub fn index(&self) -> td::Index {
        self.0
    }
}

pub const DEFAULT_TAG: &str = "Default";

/// A placed object that may carry a collider and a rigid body.
///
/// The transform is only writable through the world, so that every position
/// change of a body runs the out-of-bounds check.
#[derive(Debug)]
pub struct Entity {
    pub(crate) transform: Transform,
    pub tag: String,
    /// Read by the render snapshot only.
    pub visible: bool,
    pub(crate) collider: Option<Collider>,
    pub(crate) body: Option<RigidBody>,
    pub(crate) destroyed: bool,
    pub(crate) out_of_bounds: bool,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self::from_transform(Transform::new(position, size, 0.0))
    }

    pub fn from_transform(transform: Transform) -> Self {
        Self {
            transform,
            tag: DEFAULT_TAG.to_string(),
            visible: true,
            collider: None,
            body: None,
            destroyed: false,
            out_of_bounds: false,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.transform.set_rotation(degrees);
        self
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.transform.set_pivot(pivot);
        self
    }

    /// Collider registered when the entity is spawned.
    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    /// Body registered when the entity is spawned.
    pub fn with_body(mut self, body: RigidBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    pub fn rotation(&self) -> f64 {
        self.transform.rotation()
    }

    pub fn size(&self) -> Vec2 {
        self.transform.size()
    }

    pub fn world_vertices(&self) -> &[Vec2; 4] {
        self.transform.world_vertices()
    }

    pub fn right(&self) -> Vec2 {
        self.transform.right()
    }

    pub fn up(&self) -> Vec2 {
        self.transform.up()
    }

    pub fn collider(&self) -> Option<&Collider> {
        self.collider.as_ref()
    }

    pub fn collider_mut(&mut self) -> Option<&mut Collider> {
        self.collider.as_mut()
    }

    pub fn body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Set only while the out-of-bounds check runs; always false afterwards.
    pub fn is_out_of_bounds(&self) -> bool {
        self.out_of_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_defaults() {
        let e = Entity::new(Vec2::new(1.0, 2.0), Vec2::splat(4.0));
        assert_eq!(e.tag, DEFAULT_TAG);
        assert!(e.visible);
        assert!(e.collider().is_none());
        assert!(!e.has_body());
        assert!(!e.is_destroyed());
        assert_eq!(e.position(), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_entity_builders_refresh_vertices() {
        let e = Entity::new(Vec2::ZERO, Vec2::splat(2.0))
            .with_tag("Player")
            .with_pivot(Vec2::ZERO);
        assert_eq!(e.tag, "Player");
        assert_eq!(e.world_vertices()[0], Vec2::ZERO);
        assert_eq!(e.world_vertices()[2], Vec2::new(2.0, -2.0));
    }
}
