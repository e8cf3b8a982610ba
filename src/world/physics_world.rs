use super::pointer::PointerState;
use super::response::{resolve_collision, resolve_friction};
use crate::collision::{self, CollisionManifold, AABB};
use crate::common::{OutOfBoundsPolicy, PhysicsError, QueryConfig, Random, Result, WorldConfig};
use crate::integration::integrator;
use crate::math::vec2::Vec2;
use crate::objects::{Collider, ColliderEvent, Entity, EntityKey, PairTransition, RigidBody};
use crate::shapes::{Circle, ColliderShape, Polygon};

use std::ops::ControlFlow;
use thunderdome as td;
use tracing::{debug, trace, warn};

/// Owns every entity plus the collider and body registries, and runs the
/// fixed-substep simulation over them.
///
/// Registries keep insertion order and hold each entity at most once. The pair
/// scan and the queries visit colliders in that order.
pub struct PhysicsWorld {
    pub(crate) entities: td::Arena<Entity>,
    pub(crate) colliders: Vec<EntityKey>,
    pub(crate) bodies: Vec<EntityKey>,
    pub(crate) config: WorldConfig,
    pub(crate) random: Random,
    pub(crate) pointer: PointerState,
    frame: u64,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::with_valid_config(WorldConfig::default())
    }
}

impl PhysicsWorld {
    /// Creates an empty world after validating `config`.
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: WorldConfig) -> Self {
        Self {
            entities: td::Arena::new(),
            colliders: Vec::new(),
            bodies: Vec::new(),
            random: Random::new(config.seed),
            config,
            pointer: PointerState::default(),
            frame: 0,
        }
    }

    // --- Configuration --- //

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn set_world_bounds(&mut self, bounds: AABB) -> Result<()> {
        if bounds.min.x > bounds.max.x || bounds.min.y > bounds.max.y {
            warn!(?bounds, "rejected inverted world bounds");
            return Err(PhysicsError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            });
        }
        self.config.world_bounds = bounds;
        Ok(())
    }

    pub fn set_out_of_bounds_policy(&mut self, policy: OutOfBoundsPolicy) {
        self.config.out_of_bounds = policy;
    }

    pub fn set_physics_iterations(&mut self, iterations: u32) {
        self.config.physics_iterations = iterations;
    }

    pub fn set_tile_size(&mut self, tile_size: Vec2) -> Result<()> {
        if !(tile_size.x > 0.0 && tile_size.y > 0.0) {
            warn!(%tile_size, "rejected tile size");
            return Err(PhysicsError::InvalidTileSize);
        }
        self.config.tile_size = tile_size;
        Ok(())
    }

    pub fn set_query_config(&mut self, queries: QueryConfig) {
        self.config.queries = queries;
    }

    pub fn random_mut(&mut self) -> &mut Random {
        &mut self.random
    }

    /// Number of completed calls to [`PhysicsWorld::step`].
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // --- Entities --- //

    /// Inserts an entity and registers any collider or body it was built with.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityKey {
        let has_body = entity.body.is_some();
        if let Some(collider) = entity.collider.as_mut() {
            collider.set_has_physics(has_body);
        }
        let has_collider = entity.collider.is_some();
        entity.destroyed = false;
        entity.out_of_bounds = false;

        let key = EntityKey(self.entities.insert(entity));
        if has_collider {
            self.colliders.push(key);
        }
        if has_body {
            self.bodies.push(key);
        }
        trace!(?key, has_collider, has_body, "spawned entity");
        key
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key.0)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &Entity)> + '_ {
        self.entities.iter().map(|(index, entity)| (EntityKey(index), entity))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Registered colliders in registration order.
    pub fn colliders(&self) -> &[EntityKey] {
        &self.colliders
    }

    /// Registered bodies in registration order.
    pub fn bodies(&self) -> &[EntityKey] {
        &self.bodies
    }

    fn live_entity_mut(&mut self, key: EntityKey) -> Result<&mut Entity> {
        match self.entities.get_mut(key.0) {
            None => Err(PhysicsError::UnknownEntity),
            Some(entity) if entity.destroyed => {
                warn!(?key, "operation on destroyed entity");
                Err(PhysicsError::EntityDestroyed)
            }
            Some(entity) => Ok(entity),
        }
    }

    /// Removes the entity's components, deregisters it and marks it destroyed.
    /// The tombstone stays readable until [`PhysicsWorld::remove_entity`].
    pub fn destroy(&mut self, key: EntityKey) -> Result<()> {
        if self.entities.get(key.0).is_none() {
            return Err(PhysicsError::UnknownEntity);
        }
        self.destroy_entity(key);
        Ok(())
    }

    /// Destroys the entity if needed and frees its slot.
    pub fn remove_entity(&mut self, key: EntityKey) -> Option<Entity> {
        self.destroy_entity(key);
        self.entities.remove(key.0)
    }

    fn destroy_entity(&mut self, key: EntityKey) {
        let Some(entity) = self.entities.get_mut(key.0) else {
            return;
        };
        if entity.destroyed {
            return;
        }
        entity.collider = None;
        entity.body = None;
        entity.destroyed = true;

        self.colliders.retain(|k| *k != key);
        self.bodies.retain(|k| *k != key);
        self.forget_collider(key);
        debug!(?key, "entity destroyed");
    }

    fn forget_collider(&mut self, key: EntityKey) {
        self.pointer.forget(key);
        for other in &self.colliders {
            if let Some(collider) = self.entities.get_mut(other.0).and_then(|e| e.collider.as_mut()) {
                collider.forget(key);
            }
        }
    }

    // --- Components --- //

    /// Attaches (or replaces) the entity's collider and registers it.
    pub fn attach_collider(&mut self, key: EntityKey, mut collider: Collider) -> Result<()> {
        let entity = self.live_entity_mut(key)?;
        collider.set_has_physics(entity.body.is_some());
        entity.collider = Some(collider);
        if !self.colliders.contains(&key) {
            self.colliders.push(key);
        }
        Ok(())
    }

    /// Takes the collider off the entity. Absent colliders are a no-op.
    pub fn detach_collider(&mut self, key: EntityKey) -> Option<Collider> {
        let collider = self.entities.get_mut(key.0)?.collider.take();
        self.colliders.retain(|k| *k != key);
        self.forget_collider(key);
        collider
    }

    /// Attaches (or replaces) the entity's body and registers it.
    pub fn attach_body(&mut self, key: EntityKey, body: RigidBody) -> Result<()> {
        let entity = self.live_entity_mut(key)?;
        entity.body = Some(body);
        if let Some(collider) = entity.collider.as_mut() {
            collider.set_has_physics(true);
        }
        if !self.bodies.contains(&key) {
            self.bodies.push(key);
        }
        Ok(())
    }

    /// Takes the body off the entity. Absent bodies are a no-op.
    pub fn detach_body(&mut self, key: EntityKey) -> Option<RigidBody> {
        let entity = self.entities.get_mut(key.0)?;
        let body = entity.body.take();
        if let Some(collider) = entity.collider.as_mut() {
            collider.set_has_physics(false);
        }
        self.bodies.retain(|k| *k != key);
        body
    }

    // --- Transforms --- //

    /// Moves the entity. Entities with a body then get the out-of-bounds check.
    pub fn set_position(&mut self, key: EntityKey, position: Vec2) -> Result<()> {
        self.live_entity_mut(key)?;
        self.move_entity(key, position);
        Ok(())
    }

    pub fn translate(&mut self, key: EntityKey, offset: Vec2) -> Result<()> {
        let position = self.live_entity_mut(key)?.position() + offset;
        self.move_entity(key, position);
        Ok(())
    }

    pub fn set_rotation(&mut self, key: EntityKey, degrees: f64) -> Result<()> {
        self.live_entity_mut(key)?.transform.set_rotation(degrees);
        Ok(())
    }

    pub fn set_size(&mut self, key: EntityKey, size: Vec2) -> Result<()> {
        self.live_entity_mut(key)?.transform.set_size(size);
        Ok(())
    }

    pub fn set_pivot(&mut self, key: EntityKey, pivot: Vec2) -> Result<()> {
        self.live_entity_mut(key)?.transform.set_pivot(pivot);
        Ok(())
    }

    fn move_entity(&mut self, key: EntityKey, position: Vec2) {
        if let Some(entity) = self.entities.get_mut(key.0) {
            entity.transform.set_position(position);
            self.enforce_bounds(key);
        }
    }

    fn translate_entity(&mut self, key: EntityKey, offset: Vec2) {
        if let Some(position) = self.entities.get(key.0).map(Entity::position) {
            self.move_entity(key, position + offset);
        }
    }

    /// Applies the out-of-bounds policy to a body outside the world bounds.
    /// The flag is raised while the policy runs and cleared again afterwards.
    fn enforce_bounds(&mut self, key: EntityKey) {
        let AABB { min, max } = self.config.world_bounds;
        let policy = self.config.out_of_bounds;
        let Some(entity) = self.entities.get_mut(key.0) else {
            return;
        };
        if entity.body.is_none() {
            return;
        }

        let position = entity.position();
        if !self.config.world_bounds.contains(position) {
            entity.out_of_bounds = true;
            debug!(?key, ?policy, x = position.x, y = position.y, "entity out of bounds");
            match policy {
                OutOfBoundsPolicy::Destroy => self.destroy_entity(key),
                OutOfBoundsPolicy::Wrap => {
                    let mut wrapped = position;
                    if position.x < min.x {
                        wrapped.x = max.x;
                    } else if position.x > max.x {
                        wrapped.x = min.x;
                    }
                    if position.y < min.y {
                        wrapped.y = max.y;
                    } else if position.y > max.y {
                        wrapped.y = min.y;
                    }
                    entity.transform.set_position(wrapped);
                }
                OutOfBoundsPolicy::Freeze => {}
            }
        }

        if let Some(entity) = self.entities.get_mut(key.0) {
            entity.out_of_bounds = false;
        }
    }

    // --- Simulation --- //

    /// Advances the simulation by one frame of `frame_dt` seconds.
    ///
    /// Runs `physics_iterations` substeps (at least one), each integrating every
    /// body and then scanning every collider pair. A substep lasts
    /// `frame_dt / iterations / 10` seconds.
    pub fn step(&mut self, frame_dt: f64) {
        let iterations = self.config.physics_iterations.max(1);
        let dt = frame_dt / f64::from(iterations) / 10.0;
        debug!(
            bodies = self.bodies.len(),
            colliders = self.colliders.len(),
            iterations,
            dt,
            "step"
        );

        for _ in 0..iterations {
            self.integrate_bodies(dt);
            self.check_collisions();
        }
        self.frame += 1;
    }

    fn integrate_bodies(&mut self, dt: f64) {
        let keys = self.bodies.clone();
        for key in keys {
            let Some(entity) = self.entities.get_mut(key.0) else {
                continue;
            };
            if entity.out_of_bounds || entity.destroyed {
                continue;
            }
            let Some(body) = entity.body.as_mut() else {
                continue;
            };
            let motion = integrator::integrate(body, dt);
            let rotation = entity.rotation() + motion.rotation;
            let position = entity.position() + motion.translation;
            entity.transform.set_rotation(rotation);
            self.move_entity(key, position);
        }
    }

    /// Tests every pair of registered colliders once and resolves the overlaps.
    ///
    /// Manual-only colliders and out-of-bounds entities sit the scan out. Two
    /// bodies sharing an exact position are pushed apart in a random direction,
    /// and that ends the scan for this call.
    pub fn check_collisions(&mut self) {
        let keys = self.colliders.clone();

        for (i, &key_a) in keys.iter().enumerate() {
            if !self.in_pair_scan(key_a) {
                continue;
            }
            if let Some(collider) = self.collider_mut(key_a) {
                collider.clear_collisions();
            }

            for &key_b in &keys[i + 1..] {
                if !self.in_pair_scan(key_a) {
                    break;
                }
                if !self.in_pair_scan(key_b) {
                    continue;
                }
                if let Some(collider) = self.collider_mut(key_b) {
                    collider.clear_collisions();
                }
                if self.check_pair(key_a, key_b).is_break() {
                    return;
                }
            }

            let Some(collider) = self.collider_mut(key_a) else {
                continue;
            };
            for other in collider.reconcile_exits() {
                trace!(?key_a, ?other, "collision exit");
                match self.entities.get2_mut(key_a.0, other.0) {
                    (Some(a), Some(b)) => emit_both(key_a, a, other, b, ColliderEvent::CollisionExit),
                    (Some(a), None) => emit(a, other, ColliderEvent::CollisionExit),
                    _ => {}
                }
            }
        }
    }

    fn in_pair_scan(&self, key: EntityKey) -> bool {
        self.entities.get(key.0).map_or(false, |entity| {
            !entity.destroyed
                && !entity.out_of_bounds
                && entity.collider().map_or(false, |c| !c.manual_detect_only)
        })
    }

    fn collider_mut(&mut self, key: EntityKey) -> Option<&mut Collider> {
        self.entities.get_mut(key.0)?.collider.as_mut()
    }

    fn check_pair(&mut self, key_a: EntityKey, key_b: EntityKey) -> ControlFlow<()> {
        let (Some(a), Some(b)) = self.entities.get2_mut(key_a.0, key_b.0) else {
            return ControlFlow::Continue(());
        };

        if a.has_body() && b.has_body() && a.position() == b.position() {
            self.separate_coincident(key_a, key_b);
            return ControlFlow::Break(());
        }

        let (Some(collider_a), Some(collider_b)) = (a.collider(), b.collider()) else {
            return ControlFlow::Continue(());
        };
        let contact = detect(a, collider_a.shape, b, collider_b.shape);
        let any_trigger = collider_a.is_trigger || collider_b.is_trigger;

        let transition = match a.collider.as_mut() {
            Some(collider) => collider.register_pair_result(key_b, contact.is_some()),
            None => return ControlFlow::Continue(()),
        };
        match transition {
            PairTransition::Enter => {
                trace!(?key_a, ?key_b, "collision enter");
                emit_both(key_a, a, key_b, b, ColliderEvent::CollisionEnter);
            }
            PairTransition::Stay => emit_both(key_a, a, key_b, b, ColliderEvent::CollisionStay),
            PairTransition::Apart => {}
        }

        let Some(contact) = contact else {
            return ControlFlow::Continue(());
        };
        if any_trigger {
            return ControlFlow::Continue(());
        }
        trace!(?key_a, ?key_b, normal = %contact.normal, depth = contact.depth, "contact");

        let CollisionManifold { normal, depth } = contact;
        match (a.has_body(), b.has_body()) {
            (true, true) => {
                self.translate_entity(key_a, -normal * (depth / 2.0));
                self.translate_entity(key_b, normal * (depth / 2.0));
            }
            (true, false) => self.translate_entity(key_a, -normal * depth),
            (false, true) => self.translate_entity(key_b, normal * depth),
            (false, false) => return ControlFlow::Continue(()),
        }

        let (Some(a), Some(b)) = self.entities.get2_mut(key_a.0, key_b.0) else {
            return ControlFlow::Continue(());
        };
        if a.destroyed || b.destroyed {
            return ControlFlow::Continue(());
        }
        let friction_a = a.collider().map(Collider::friction);
        let friction_b = b.collider().map(Collider::friction);
        resolve_collision(a.body.as_mut(), b.body.as_mut(), normal);
        resolve_friction(a.body.as_mut(), b.body.as_mut(), friction_a, friction_b);
        ControlFlow::Continue(())
    }

    /// Pushes two bodies at the same position apart along a random direction,
    /// each by half a tile.
    fn separate_coincident(&mut self, key_a: EntityKey, key_b: EntityKey) {
        let angle = f64::from(self.random.range_i32(0, 359));
        let normal = Vec2::DOWN.rotate(angle);
        let depth = self.config.tile_size.y;
        debug!(?key_a, ?key_b, angle, "separating coincident bodies");
        self.translate_entity(key_a, -normal * (depth / 2.0));
        self.translate_entity(key_b, normal * (depth / 2.0));
    }
}

/// Fires `event` on `b` (about `a`) and then on `a` (about `b`).
fn emit_both(key_a: EntityKey, a: &mut Entity, key_b: EntityKey, b: &mut Entity, event: ColliderEvent) {
    emit(b, key_a, event);
    emit(a, key_b, event);
}

fn emit(entity: &mut Entity, other: EntityKey, event: ColliderEvent) {
    if let Some(collider) = entity.collider.as_mut() {
        collider.emit(event, other);
    }
}

fn circle_of(entity: &Entity) -> Circle {
    Circle::new(entity.position(), entity.transform.radius())
}

/// Narrow-phase dispatch for a pair of collider shapes. The normal points from `a` to `b`.
pub(crate) fn detect(
    a: &Entity,
    shape_a: ColliderShape,
    b: &Entity,
    shape_b: ColliderShape,
) -> Option<CollisionManifold> {
    match (shape_a, shape_b) {
        (ColliderShape::Box, ColliderShape::Box) => collision::intersect_polygons(
            &Polygon::new(a.world_vertices()),
            &Polygon::new(b.world_vertices()),
        ),
        (ColliderShape::Circle, ColliderShape::Circle) => {
            collision::intersect_circles(&circle_of(a), &circle_of(b))
        }
        (ColliderShape::Circle, ColliderShape::Box) => {
            collision::intersect_circle_polygon(&circle_of(a), &Polygon::new(b.world_vertices()))
        }
        (ColliderShape::Box, ColliderShape::Circle) => {
            collision::intersect_circle_polygon(&circle_of(b), &Polygon::new(a.world_vertices()))
                .map(CollisionManifold::reversed)
        }
    }
}

/// True if the entity's collider overlaps `polygon`. Entities without a collider never do.
pub(crate) fn overlaps_polygon(entity: &Entity, polygon: &Polygon) -> bool {
    match entity.collider().map(|c| c.shape) {
        Some(ColliderShape::Box) => {
            collision::polygons_overlap(&Polygon::new(entity.world_vertices()), polygon)
        }
        Some(ColliderShape::Circle) => collision::circle_polygon_overlap(&circle_of(entity), polygon),
        None => false,
    }
}

/// True if the entity's collider overlaps `circle`.
pub(crate) fn overlaps_circle(entity: &Entity, circle: &Circle) -> bool {
    match entity.collider().map(|c| c.shape) {
        Some(ColliderShape::Box) => {
            collision::circle_polygon_overlap(circle, &Polygon::new(entity.world_vertices()))
        }
        Some(ColliderShape::Circle) => collision::circles_overlap(circle, &circle_of(entity)),
        None => false,
    }
}
