use super::physics_world::PhysicsWorld;
use crate::math::vec2::Vec2;
use crate::objects::EntityKey;
use parking_lot::Mutex;
use std::sync::Arc;

/// What a renderer needs to draw one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEntity {
    pub key: EntityKey,
    pub tag: String,
    pub position: Vec2,
    pub rotation: f64,
    pub world_vertices: [Vec2; 4],
    pub visible: bool,
    pub destroyed: bool,
}

/// Read-only copy of the world taken at a frame boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSnapshot {
    /// Number of completed steps when the snapshot was taken.
    pub frame: u64,
    pub entities: Vec<RenderEntity>,
}

/// Hands snapshots from the simulation thread to a render thread.
///
/// The writer swaps in a new snapshot once per frame, readers clone the `Arc`
/// and never hold the lock while drawing.
#[derive(Debug, Default)]
pub struct SnapshotBuffer {
    latest: Mutex<Arc<RenderSnapshot>>,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: RenderSnapshot) {
        *self.latest.lock() = Arc::new(snapshot);
    }

    pub fn latest(&self) -> Arc<RenderSnapshot> {
        Arc::clone(&self.latest.lock())
    }
}

impl PhysicsWorld {
    /// Captures every entity, tombstones included.
    pub fn snapshot(&self) -> RenderSnapshot {
        let entities = self
            .entities
            .iter()
            .map(|(index, entity)| RenderEntity {
                key: EntityKey(index),
                tag: entity.tag.clone(),
                position: entity.position(),
                rotation: entity.rotation(),
                world_vertices: *entity.world_vertices(),
                visible: entity.visible,
                destroyed: entity.is_destroyed(),
            })
            .collect();
        RenderSnapshot {
            frame: self.frame(),
            entities,
        }
    }

    pub fn publish_snapshot(&self, buffer: &SnapshotBuffer) {
        buffer.publish(self.snapshot());
    }
}
