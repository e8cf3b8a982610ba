use crate::math::vec2::Vec2;
use thiserror::Error;

/// Errors returned when an operation would break a physics precondition.
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// Bodies need a strictly positive mass, impulses divide by it.
    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f64),
    /// The key does not name an entity in this world.
    #[error("unknown entity")]
    UnknownEntity,
    /// The entity was destroyed and only its tombstone remains.
    #[error("entity has been destroyed")]
    EntityDestroyed,
    /// World bounds with a minimum corner past the maximum corner.
    #[error("invalid world bounds: min {min} exceeds max {max}")]
    InvalidBounds { min: Vec2, max: Vec2 },
    #[error("tile size must be positive on both axes")]
    InvalidTileSize,
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
