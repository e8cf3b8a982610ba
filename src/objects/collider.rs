use super::entity::EntityKey;
use super::listeners::{ListenerId, Listeners};
use crate::shapes::ColliderShape;

/// Events a collider reports to its listeners.
///
/// Collision events pass the other entity's key. Pointer events pass the
/// key of the entity owning the collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderEvent {
    CollisionEnter,
    CollisionStay,
    CollisionExit,
    PointerEnter,
    PointerStay,
    PointerExit,
    PointerDown,
    PointerUp,
    PointerClick,
}

impl ColliderEvent {
    const COUNT: usize = 9;

    fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of [`Collider::register_pair_result`] for an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairTransition {
    /// The pair started overlapping this step.
    Enter,
    /// The pair was already overlapping.
    Stay,
    /// The pair does not overlap this step.
    Apart,
}

#[derive(Debug)]
pub struct Collider {
    pub shape: ColliderShape,
    /// Reports events but is never pushed apart or impulsed.
    pub is_trigger: bool,
    /// Skipped by the automatic pair scan, still found by queries.
    pub manual_detect_only: bool,
    /// Receives pointer events. Turning it off drops the hover and press state.
    pub interactable: bool,
    friction: f64,
    has_physics: bool,

    colliding: Vec<EntityKey>,
    not_colliding: Vec<EntityKey>,
    previously_colliding: Vec<EntityKey>,

    listeners: [Listeners; ColliderEvent::COUNT],
}

impl Collider {
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            is_trigger: false,
            manual_detect_only: false,
            interactable: false,
            friction: 0.0,
            has_physics: false,
            colliding: Vec::new(),
            not_colliding: Vec::new(),
            previously_colliding: Vec::new(),
            listeners: Default::default(),
        }
    }

    pub fn new_box() -> Self {
        Self::new(ColliderShape::Box)
    }

    pub fn new_circle() -> Self {
        Self::new(ColliderShape::Circle)
    }

    pub fn trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.set_friction(friction);
        self
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Negative values are raised to zero.
    pub fn set_friction(&mut self, friction: f64) {
        self.friction = friction.max(0.0);
    }

    /// True while the owning entity also has a rigid body.
    pub fn has_physics(&self) -> bool {
        self.has_physics
    }

    pub(crate) fn set_has_physics(&mut self, has_physics: bool) {
        self.has_physics = has_physics;
    }

    /// Entities overlapped in the current step.
    pub fn colliding(&self) -> &[EntityKey] {
        &self.colliding
    }

    /// Entities tested and found apart in the current step.
    pub fn not_colliding(&self) -> &[EntityKey] {
        &self.not_colliding
    }

    /// Entities overlapping as of the last reconciled step.
    pub fn previously_colliding(&self) -> &[EntityKey] {
        &self.previously_colliding
    }

    /// Empties the per-step sets. `previously_colliding` is kept so the next
    /// step can tell a new overlap from a continuing one.
    pub fn clear_collisions(&mut self) {
        self.colliding.clear();
        self.not_colliding.clear();
    }

    /// Records the result of testing this collider against `other`.
    ///
    /// Does not fire listeners: the world fires them on both colliders once it
    /// knows the transition.
    pub fn register_pair_result(&mut self, other: EntityKey, overlapping: bool) -> PairTransition {
        if !overlapping {
            push_unique(&mut self.not_colliding, other);
            return PairTransition::Apart;
        }
        push_unique(&mut self.colliding, other);
        if self.previously_colliding.contains(&other) {
            PairTransition::Stay
        } else {
            self.previously_colliding.push(other);
            PairTransition::Enter
        }
    }

    /// Drops every entity that was overlapping before and is apart now, returning them
    /// in the order they were found apart.
    pub fn reconcile_exits(&mut self) -> Vec<EntityKey> {
        let mut exited = Vec::new();
        for other in &self.not_colliding {
            if let Some(pos) = self.previously_colliding.iter().position(|k| k == other) {
                self.previously_colliding.remove(pos);
                exited.push(*other);
            }
        }
        exited
    }

    /// Forgets an entity entirely, used when it leaves the world.
    pub(crate) fn forget(&mut self, other: EntityKey) {
        self.colliding.retain(|k| *k != other);
        self.not_colliding.retain(|k| *k != other);
        self.previously_colliding.retain(|k| *k != other);
    }

    pub fn add_listener(
        &mut self,
        event: ColliderEvent,
        callback: impl FnMut(EntityKey) + Send + 'static,
    ) -> ListenerId {
        self.listeners[event.index()].add(callback)
    }

    pub fn remove_listener(&mut self, event: ColliderEvent, id: ListenerId) -> bool {
        self.listeners[event.index()].remove(id)
    }

    pub fn clear_listeners(&mut self, event: ColliderEvent) {
        self.listeners[event.index()].clear();
    }

    pub fn listeners(&self, event: ColliderEvent) -> &Listeners {
        &self.listeners[event.index()]
    }

    /// Invokes the listeners of `event` with `key`.
    pub fn emit(&mut self, event: ColliderEvent, key: EntityKey) {
        self.listeners[event.index()].invoke(key);
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::new_box()
    }
}

fn push_unique(set: &mut Vec<EntityKey>, key: EntityKey) {
    if !set.contains(&key) {
        set.push(key);
    }
}
