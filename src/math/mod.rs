pub mod transform;
pub mod vec2;

pub use transform::{Transform, TransformDesc};
pub use vec2::Vec2;
