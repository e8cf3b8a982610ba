use crate::common::{PhysicsError, Result};
use crate::math::vec2::Vec2;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Primary state
    pub velocity: Vec2,
    pub angular_velocity: f64, // Degrees per second

    // Accumulated external force, consumed by the next substep
    force: Vec2,

    mass: f64,
    /// Restitution in `[0, 1]`; a collision uses the smaller of the two.
    pub bounciness: f64,
    /// Subtracted along the direction of travel every substep. Also slows rotation.
    pub linear_drag: f64,
    /// Stored for completeness, integration does not read it.
    pub angular_drag: f64,
    /// Added to the velocity every substep.
    pub gravity: Vec2,

    pub lock_x: bool,
    pub lock_y: bool,
    pub lock_rotation: bool,
    /// When false the body is still detected but never pushed by impulses or friction.
    pub resolve_collisions: bool,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            mass: 1.0,
            bounciness: 0.5,
            linear_drag: 2.0,
            angular_drag: 2.0,
            gravity: Vec2::ZERO,
            lock_x: false,
            lock_y: false,
            lock_rotation: false,
            resolve_collisions: true,
        }
    }
}

impl RigidBody {
    /// Creates a body with default settings and unit mass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a body with the given mass, which must be positive.
    pub fn with_mass(mass: f64) -> Result<Self> {
        let mut body = Self::default();
        body.set_mass(mass)?;
        Ok(body)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets bounciness, clamped to `[0, 1]`.
    pub fn with_bounciness(mut self, bounciness: f64) -> Self {
        self.bounciness = bounciness.clamp(0.0, 1.0);
        self
    }

    pub fn with_drag(mut self, linear_drag: f64) -> Self {
        self.linear_drag = linear_drag;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        1.0 / self.mass
    }

    /// Rejects zero, negative and NaN masses and leaves the body unchanged.
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if !(mass > 0.0) {
            warn!(mass, "rejected non-positive mass");
            return Err(PhysicsError::NonPositiveMass(mass));
        }
        self.mass = mass;
        Ok(())
    }

    /// Force accumulated since the last substep.
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Adds a force to be applied at the next substep.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rigidbody_defaults() {
        let rb = RigidBody::new();
        assert_eq!(rb.mass(), 1.0);
        assert_eq!(rb.bounciness, 0.5);
        assert_eq!(rb.linear_drag, 2.0);
        assert_eq!(rb.angular_drag, 2.0);
        assert_eq!(rb.gravity, Vec2::ZERO);
        assert!(rb.resolve_collisions);
        assert!(!rb.lock_x && !rb.lock_y && !rb.lock_rotation);
    }

    #[test]
    fn test_rigidbody_rejects_non_positive_mass() {
        assert!(matches!(
            RigidBody::with_mass(0.0),
            Err(PhysicsError::NonPositiveMass(m)) if m == 0.0
        ));
        assert!(RigidBody::with_mass(-2.0).is_err());
        assert!(RigidBody::with_mass(f64::NAN).is_err());

        let mut rb = RigidBody::with_mass(4.0).unwrap();
        assert!(rb.set_mass(-1.0).is_err());
        assert_eq!(rb.mass(), 4.0);
        assert_eq!(rb.inv_mass(), 0.25);
    }

    #[test]
    fn test_apply_and_clear_force() {
        let mut rb = RigidBody::new();
        rb.apply_force(Vec2::new(1.0, 2.0));
        rb.apply_force(Vec2::new(3.0, -1.0));
        assert_eq!(rb.force(), Vec2::new(4.0, 1.0));
        rb.clear_force();
        assert_eq!(rb.force(), Vec2::ZERO);
    }

    #[test]
    fn test_builder_clamps_bounciness() {
        let rb = RigidBody::new().with_bounciness(3.0).with_drag(0.0);
        assert_eq!(rb.bounciness, 1.0);
        assert_eq!(rb.linear_drag, 0.0);
    }
}
