//! Velocity response for an overlapping pair. A missing body counts as a
//! stationary, immovable participant.

use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;
use tracing::trace;

fn relative_velocity(a: Option<&RigidBody>, b: Option<&RigidBody>) -> Vec2 {
    let va = a.map_or(Vec2::ZERO, |body| body.velocity);
    let vb = b.map_or(Vec2::ZERO, |body| body.velocity);
    vb - va
}

/// Applies a single restitution impulse along `normal` (pointing from A to B).
///
/// Does nothing when neither side has a body or the pair is already separating.
pub fn resolve_collision(mut a: Option<&mut RigidBody>, mut b: Option<&mut RigidBody>, normal: Vec2) {
    let restitution = match (a.as_deref(), b.as_deref()) {
        (Some(a), Some(b)) => a.bounciness.min(b.bounciness),
        (Some(body), None) | (None, Some(body)) => body.bounciness,
        (None, None) => return,
    };

    let rel = relative_velocity(a.as_deref(), b.as_deref());
    let closing = rel.dot(normal);
    if closing >= 0.0 {
        return;
    }

    let inv_mass_sum = a.as_deref().map_or(0.0, RigidBody::inv_mass)
        + b.as_deref().map_or(0.0, RigidBody::inv_mass);
    let j = -(1.0 + restitution) * closing / inv_mass_sum;
    trace!(j, restitution, "impulse");

    if let Some(body) = a.as_deref_mut() {
        if body.resolve_collisions {
            body.velocity -= normal * (j * body.inv_mass());
        }
    }
    if let Some(body) = b.as_deref_mut() {
        if body.resolve_collisions {
            body.velocity += normal * (j * body.inv_mass());
        }
    }
}

/// Nudges both bodies along their relative velocity, A towards B's motion and
/// B against it, scaled by the combined friction and each body's gravity.
///
/// Skipped when the relative velocity is zero or not a number.
pub fn resolve_friction(
    mut a: Option<&mut RigidBody>,
    mut b: Option<&mut RigidBody>,
    friction_a: Option<f64>,
    friction_b: Option<f64>,
) {
    let rel = relative_velocity(a.as_deref(), b.as_deref());
    if rel == Vec2::ZERO || rel.is_nan() {
        return;
    }

    let friction = match (friction_a, friction_b) {
        (Some(fa), Some(fb)) => (fa + fb) / 2.0,
        (Some(f), None) | (None, Some(f)) => f,
        (None, None) => return,
    };
    let direction = rel.normalize();

    if let Some(body) = a.as_deref_mut() {
        if body.resolve_collisions {
            body.velocity += direction * (body.gravity.length().max(1.0) * friction);
        }
    }
    if let Some(body) = b.as_deref_mut() {
        if body.resolve_collisions {
            body.velocity -= direction * (body.gravity.length().max(1.0) * friction);
        }
    }
}
