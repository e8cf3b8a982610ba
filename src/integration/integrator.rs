use crate::math::vec2::Vec2;
use crate::objects::rigid_body::RigidBody;

/// Position and rotation change produced by one substep.
///
/// The caller applies it to the entity transform, so that position changes go
/// through the world's out-of-bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Displacement {
    pub translation: Vec2,
    pub rotation: f64,
}

/// Advances the body's velocity by one substep and returns how far it moved.
///
/// Forces, gravity and drag are applied per substep, not scaled by `dt`; only
/// the final position and rotation deltas use it. Drag is a fixed subtraction
/// along the direction of travel and can overshoot into reverse at low speed.
pub fn integrate(body: &mut RigidBody, dt: f64) -> Displacement {
    // --- Linear Motion --- //
    let acceleration = body.force() / body.mass();
    body.velocity += acceleration + body.gravity;

    if body.velocity != Vec2::ZERO {
        body.velocity += (-body.velocity).normalize() * body.linear_drag;
    }

    // --- Angular Motion --- //
    // Nudged towards zero by the linear drag, angular_drag is not used
    if body.angular_velocity < 0.0 {
        body.angular_velocity += body.linear_drag;
    } else if body.angular_velocity > 0.0 {
        body.angular_velocity -= body.linear_drag;
    }

    if body.lock_x {
        body.velocity.x = 0.0;
    }
    if body.lock_y {
        body.velocity.y = 0.0;
    }
    if body.lock_rotation {
        body.angular_velocity = 0.0;
    }

    body.clear_force();

    Displacement {
        translation: body.velocity * dt,
        rotation: body.angular_velocity * dt,
    }
}
