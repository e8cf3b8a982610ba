pub mod collider;
pub mod entity;
pub mod listeners;
pub mod rigid_body;

pub use collider::{Collider, ColliderEvent, PairTransition};
pub use entity::{Entity, EntityKey, DEFAULT_TAG};
pub use listeners::{ListenerId, Listeners};
pub use rigid_body::RigidBody;
