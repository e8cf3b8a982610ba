pub mod config;
pub mod error;
pub mod random;

pub use config::{OutOfBoundsPolicy, QueryConfig, WorldConfig};
pub use error::{PhysicsError, Result};
pub use random::Random;
