//! Ray casts and point casts against every registered collider.
//!
//! Queries ignore `manual_detect_only`, it only opts a collider out of the
//! automatic pair scan.

use super::physics_world::{overlaps_circle, overlaps_polygon, PhysicsWorld};
use crate::math::vec2::Vec2;
use crate::objects::{Entity, EntityKey};
use crate::shapes::{Circle, Polygon};
use tracing::warn;

/// Radius of the circle used for point casts and pointer hit tests.
pub const PROBE_RADIUS: f64 = 0.01;

/// A finite ray, tested as the segment from `origin` to `origin + unit(direction) * length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
    pub length: f64,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2, length: f64) -> Self {
        Self {
            origin,
            direction,
            length,
        }
    }

    /// Ray from `from` to `to`.
    pub fn between(from: Vec2, to: Vec2) -> Self {
        Self::new(from, to - from, from.distance(to))
    }

    pub fn segment(&self) -> [Vec2; 2] {
        [self.origin, self.origin + self.direction.normalize() * self.length]
    }
}

/// Which entity tags a query considers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    Any,
    /// Only entities with this tag.
    Only(String),
    /// Everything except entities with this tag.
    Exclude(String),
    /// Everything except entities with any of these tags. Only honored when
    /// [`QueryConfig::tag_list_exclusion`][crate::common::QueryConfig] is set,
    /// otherwise it behaves like [`TagFilter::Any`].
    ExcludeAny(Vec<String>),
}

impl TagFilter {
    pub fn admits(&self, tag: &str, honor_lists: bool) -> bool {
        match self {
            TagFilter::Any => true,
            TagFilter::Only(only) => tag == only,
            TagFilter::Exclude(excluded) => tag != excluded,
            TagFilter::ExcludeAny(list) => !honor_lists || !list.iter().any(|t| t == tag),
        }
    }
}

/// Options for [`PhysicsWorld::collision_cast`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastFilter {
    pub include_triggers: bool,
    pub tags: TagFilter,
}

impl Default for CastFilter {
    fn default() -> Self {
        Self {
            include_triggers: true,
            tags: TagFilter::Any,
        }
    }
}

impl CastFilter {
    pub fn without_triggers(mut self) -> Self {
        self.include_triggers = false;
        self
    }

    pub fn with_tags(mut self, tags: TagFilter) -> Self {
        self.tags = tags;
        self
    }
}

impl PhysicsWorld {
    /// True if the ray touches any collider.
    pub fn raycast(&self, ray: &Ray) -> bool {
        self.raycast_hit(ray).is_some()
    }

    /// First collider hit, in registration order.
    pub fn raycast_hit(&self, ray: &Ray) -> Option<EntityKey> {
        self.raycast_filtered(ray, &TagFilter::Any)
    }

    pub fn raycast_filtered(&self, ray: &Ray, filter: &TagFilter) -> Option<EntityKey> {
        self.ray_hits(ray, filter).next()
    }

    /// Every collider hit, in registration order.
    pub fn raycast_all(&self, ray: &Ray, filter: &TagFilter) -> Vec<EntityKey> {
        self.ray_hits(ray, filter).collect()
    }

    /// First collider containing `point`.
    pub fn collision_cast(&self, point: Vec2, filter: &CastFilter) -> Option<EntityKey> {
        self.point_hits(point, filter).next()
    }

    /// Every collider containing `point`, in registration order.
    pub fn collision_cast_all(&self, point: Vec2, filter: &CastFilter) -> Vec<EntityKey> {
        self.point_hits(point, filter).collect()
    }

    fn ray_hits<'a>(
        &'a self,
        ray: &Ray,
        filter: &'a TagFilter,
    ) -> impl Iterator<Item = EntityKey> + 'a {
        let segment = ray.segment();
        let valid = !segment[1].is_nan();
        if !valid {
            warn!(?ray, "ray without a direction hits nothing");
        }
        let honor_lists = self.config.queries.tag_list_exclusion;
        self.registered_colliders()
            .filter(move |_| valid)
            .filter(move |(_, entity)| filter.admits(&entity.tag, honor_lists))
            .filter(move |(_, entity)| overlaps_polygon(entity, &Polygon::new(&segment)))
            .map(|(key, _)| key)
    }

    fn point_hits<'a>(
        &'a self,
        point: Vec2,
        filter: &'a CastFilter,
    ) -> impl Iterator<Item = EntityKey> + 'a {
        let probe = Circle::new(point, PROBE_RADIUS);
        let honor_lists = self.config.queries.tag_list_exclusion;
        self.registered_colliders()
            .filter(move |(_, entity)| {
                filter.include_triggers || entity.collider().map_or(false, |c| !c.is_trigger)
            })
            .filter(move |(_, entity)| filter.tags.admits(&entity.tag, honor_lists))
            .filter(move |(_, entity)| overlaps_circle(entity, &probe))
            .map(|(key, _)| key)
    }

    fn registered_colliders(&self) -> impl Iterator<Item = (EntityKey, &Entity)> + '_ {
        self.colliders.iter().filter_map(move |key| {
            self.entities
                .get(key.0)
                .filter(|entity| entity.collider.is_some())
                .map(|entity| (*key, entity))
        })
    }
}
