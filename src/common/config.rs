//! World configuration, loadable from JSON.

use super::error::{PhysicsError, Result};
use crate::collision::AABB;
use crate::math::vec2::Vec2;
use serde::{Deserialize, Serialize};

/// What happens to a body that leaves the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// Remove the entity's components and mark it destroyed.
    Destroy,
    /// Teleport to the opposite bound on each violated axis.
    Wrap,
    /// Flag only, the position is left alone.
    #[default]
    Freeze,
}

/// Knobs for the query family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Honor multi-tag exclusion lists in ray and point casts. Off by default,
    /// in which case a list never excludes anything.
    pub tag_list_exclusion: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub world_bounds: AABB,
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Substeps per frame, values below 1 run a single substep.
    pub physics_iterations: u32,
    /// Grid unit. The same-position tie break pushes entities apart by its height.
    pub tile_size: Vec2,
    /// Seed for the tie-break RNG, `None` seeds from entropy.
    pub seed: Option<u64>,
    pub queries: QueryConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_bounds: AABB {
                min: Vec2::ZERO,
                max: Vec2::new(600.0, 400.0),
            },
            out_of_bounds: OutOfBoundsPolicy::default(),
            physics_iterations: 2,
            tile_size: Vec2::new(64.0, 64.0),
            seed: None,
            queries: QueryConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let AABB { min, max } = self.world_bounds;
        if min.x > max.x || min.y > max.y {
            return Err(PhysicsError::InvalidBounds { min, max });
        }
        if !(self.tile_size.x > 0.0 && self.tile_size.y > 0.0) {
            return Err(PhysicsError::InvalidTileSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.world_bounds.max, Vec2::new(600.0, 400.0));
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Freeze);
        assert_eq!(config.physics_iterations, 2);
        assert!(!config.queries.tag_list_exclusion);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_json_partial() {
        let json = r#"{
            "world_bounds": {"min": {"x": -100.0, "y": -100.0}, "max": {"x": 100.0, "y": 100.0}},
            "out_of_bounds": "wrap",
            "seed": 7
        }"#;
        let config = WorldConfig::from_json(json).unwrap();
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Wrap);
        assert_eq!(config.world_bounds.min, Vec2::splat(-100.0));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tile_size, Vec2::new(64.0, 64.0));
    }

    #[test]
    fn test_config_rejects_inverted_bounds() {
        let json = r#"{"world_bounds": {"min": {"x": 10.0, "y": 0.0}, "max": {"x": 0.0, "y": 10.0}}}"#;
        let err = WorldConfig::from_json(json).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidBounds { .. }));
    }

    #[test]
    fn test_config_rejects_bad_tile_size_and_json() {
        let config = WorldConfig {
            tile_size: Vec2::new(0.0, 64.0),
            ..WorldConfig::default()
        };
        assert!(matches!(config.validate(), Err(PhysicsError::InvalidTileSize)));
        assert!(matches!(
            WorldConfig::from_json("{not json"),
            Err(PhysicsError::Config(_))
        ));
    }
}
