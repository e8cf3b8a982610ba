pub mod physics_world;
pub mod pointer;
pub mod queries;
pub mod response;
pub mod snapshot;

pub use physics_world::PhysicsWorld;
pub use pointer::PointerInput;
pub use queries::{CastFilter, Ray, TagFilter, PROBE_RADIUS};
pub use snapshot::{RenderEntity, RenderSnapshot, SnapshotBuffer};
