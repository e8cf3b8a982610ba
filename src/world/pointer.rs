use super::physics_world::{overlaps_circle, PhysicsWorld};
use super::queries::PROBE_RADIUS;
use crate::math::vec2::Vec2;
use crate::objects::{ColliderEvent, EntityKey};
use crate::shapes::Circle;
use tracing::trace;

/// Pointer state for one frame, supplied by the host's input layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    pub position: Vec2,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
}

/// Which colliders the pointer is over and which it pressed on.
#[derive(Debug, Default)]
pub(crate) struct PointerState {
    hovered: Vec<EntityKey>,
    pressed_on: Vec<EntityKey>,
}

impl PointerState {
    fn track(&mut self, key: EntityKey, inside: bool, input: &PointerInput) -> Vec<ColliderEvent> {
        let mut events = Vec::new();
        let hovered = self.hovered.iter().position(|k| *k == key);

        match (inside, hovered) {
            (true, Some(_)) => events.push(ColliderEvent::PointerStay),
            (true, None) => {
                self.hovered.push(key);
                events.push(ColliderEvent::PointerEnter);
            }
            (false, Some(pos)) => {
                self.hovered.remove(pos);
                events.push(ColliderEvent::PointerExit);
            }
            (false, None) => {}
        }

        if inside && input.pressed {
            events.push(ColliderEvent::PointerDown);
            if !self.pressed_on.contains(&key) {
                self.pressed_on.push(key);
            }
        } else if inside && input.released {
            events.push(ColliderEvent::PointerUp);
        }

        if inside && input.released && self.pressed_on.contains(&key) {
            events.push(ColliderEvent::PointerClick);
        }
        events
    }

    pub(crate) fn forget(&mut self, key: EntityKey) {
        self.hovered.retain(|k| *k != key);
        self.pressed_on.retain(|k| *k != key);
    }
}

impl PhysicsWorld {
    /// Fires pointer events on every interactable collider. Call once per frame,
    /// independently of [`PhysicsWorld::step`].
    pub fn update_pointer(&mut self, input: PointerInput) {
        let probe = Circle::new(input.position, PROBE_RADIUS);
        let keys = self.colliders.clone();

        for key in keys {
            let Some(entity) = self.entities.get_mut(key.0) else {
                continue;
            };
            if !entity.collider().map_or(false, |c| c.interactable) {
                // re-enabling later starts from a fresh Enter
                self.pointer.forget(key);
                continue;
            }
            let inside = overlaps_circle(entity, &probe);
            let events = self.pointer.track(key, inside, &input);
            if let Some(collider) = entity.collider.as_mut() {
                for event in events {
                    trace!(?key, ?event, "pointer event");
                    collider.emit(event, key);
                }
            }
        }

        if input.released {
            self.pointer.pressed_on.clear();
        }
    }
}
