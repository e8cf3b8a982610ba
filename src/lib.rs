//! 2D rigid-body physics and collision for small arcade games.
//!
//! A [`PhysicsWorld`] owns entities carrying an optional [`Collider`] and
//! [`RigidBody`]. Each [`PhysicsWorld::step`] integrates the bodies in fixed
//! substeps, tests every collider pair with the separating axis theorem,
//! separates and impulses overlapping bodies and reports enter, stay and exit
//! events to collider listeners.

pub mod collision;
pub mod common;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionManifold, AABB};
pub use common::{OutOfBoundsPolicy, PhysicsError, QueryConfig, Random, Result, WorldConfig};
pub use math::{Transform, Vec2};
pub use objects::{Collider, ColliderEvent, Entity, EntityKey, ListenerId, RigidBody};
pub use shapes::ColliderShape;
pub use world::{CastFilter, PhysicsWorld, PointerInput, Ray, RenderSnapshot, SnapshotBuffer, TagFilter};
