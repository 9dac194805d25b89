//! Generation configuration
//!
//! Every knob has the default the layouts were tuned with; a JSON file only
//! needs to name the fields it changes.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "std")]
use std::path::Path;

use crate::consts::{
    CORRIDOR_TRAP_CHANCE, EXTRA_DOOR_CHANCE, MAP_HEIGHT, MAP_WIDTH, MAX_MAP_DIMENSION,
    MAX_ROOM_SIZE, MIN_MAP_DIMENSION, MIN_ROOM_SIZE, PLACEMENT_ATTEMPTS, PRUNE_ITERATIONS, ROOM_TRAP_CHANCE,
    SECRET_ROOM_CHANCE,
};

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("map {axis} must be odd, got {value}")]
    EvenDimension { axis: &'static str, value: usize },

    #[error("map {axis} must be at least {min}, got {value}")]
    DimensionTooSmall {
        axis: &'static str,
        value: usize,
        min: usize,
    },

    #[error("map {axis} must be at most {max}, got {value}")]
    DimensionTooLarge {
        axis: &'static str,
        value: usize,
        max: usize,
    },

    #[error("{which} room size must be odd, got {value}")]
    EvenRoomSize { which: &'static str, value: usize },

    #[error("min room size {min} exceeds max room size {max}")]
    RoomSizeRange { min: usize, max: usize },

    #[error("max room size {max} plus walls does not fit a {width}x{height} map")]
    RoomTooLarge {
        max: usize,
        width: usize,
        height: usize,
    },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Dungeon generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Grid width (odd)
    pub width: usize,
    /// Grid height (odd)
    pub height: usize,
    /// Smallest room interior side (odd)
    pub min_room_size: usize,
    /// Largest room interior side (odd)
    pub max_room_size: usize,
    /// Room placement draws before giving up
    pub placement_attempts: u32,
    /// Chance for each extra connector to become a door
    pub extra_door_chance: f64,
    /// Chance for a single-door room to be hidden
    pub secret_room_chance: f64,
    /// Per-tile trap chance in corridors
    pub corridor_trap_chance: f64,
    /// Per-room trap chance
    pub room_trap_chance: f64,
    /// Cap on dead-end pruning passes
    pub prune_iterations: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            min_room_size: MIN_ROOM_SIZE,
            max_room_size: MAX_ROOM_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
            extra_door_chance: EXTRA_DOOR_CHANCE,
            secret_room_chance: SECRET_ROOM_CHANCE,
            corridor_trap_chance: CORRIDOR_TRAP_CHANCE,
            room_trap_chance: ROOM_TRAP_CHANCE,
            prune_iterations: PRUNE_ITERATIONS,
        }
    }
}

impl DungeonConfig {
    /// Check the lattice and probability constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.width), ("height", self.height)] {
            if value < MIN_MAP_DIMENSION {
                return Err(ConfigError::DimensionTooSmall {
                    axis,
                    value,
                    min: MIN_MAP_DIMENSION,
                });
            }
            if value > MAX_MAP_DIMENSION {
                return Err(ConfigError::DimensionTooLarge {
                    axis,
                    value,
                    max: MAX_MAP_DIMENSION,
                });
            }
            if value % 2 == 0 {
                return Err(ConfigError::EvenDimension { axis, value });
            }
        }

        for (which, value) in [("min", self.min_room_size), ("max", self.max_room_size)] {
            if value % 2 == 0 {
                return Err(ConfigError::EvenRoomSize { which, value });
            }
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        let walled = self.max_room_size.saturating_add(2);
        if walled > self.width || walled > self.height {
            return Err(ConfigError::RoomTooLarge {
                max: self.max_room_size,
                width: self.width,
                height: self.height,
            });
        }

        let probabilities = [
            ("extra_door_chance", self.extra_door_chance),
            ("secret_room_chance", self.secret_room_chance),
            ("corridor_trap_chance", self.corridor_trap_chance),
            ("room_trap_chance", self.room_trap_chance),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Probability { name, value });
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON config
    #[cfg(feature = "std")]
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "std")]
    /// Load a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DungeonConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.width, 51);
        assert_eq!(config.min_room_size, 5);
        assert_eq!(config.max_room_size, 11);
    }

    #[test]
    fn test_even_dimension_rejected() {
        let config = DungeonConfig {
            height: 40,
            ..DungeonConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EvenDimension {
                axis: "height",
                value: 40
            })
        );
    }

    #[test]
    fn test_tiny_map_rejected() {
        let config = DungeonConfig {
            width: 3,
            min_room_size: 1,
            max_room_size: 1,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionTooSmall { axis: "width", .. })
        ));
    }

    #[test]
    fn test_huge_map_rejected() {
        let wide = DungeonConfig {
            width: i32::MAX as usize + 2,
            ..DungeonConfig::default()
        };
        assert_eq!(
            wide.validate(),
            Err(ConfigError::DimensionTooLarge {
                axis: "width",
                value: i32::MAX as usize + 2,
                max: i32::MAX as usize,
            })
        );

        let tall = DungeonConfig::from_json(r#"{ "height": 4294967297 }"#);
        assert!(matches!(
            tall,
            Err(ConfigError::DimensionTooLarge { axis: "height", .. })
        ));

        let huge_room = DungeonConfig {
            max_room_size: usize::MAX,
            ..DungeonConfig::default()
        };
        assert!(matches!(huge_room.validate(), Err(ConfigError::RoomTooLarge { .. })));
    }

    #[test]
    fn test_room_sizes_checked() {
        let even = DungeonConfig {
            min_room_size: 4,
            ..DungeonConfig::default()
        };
        assert!(matches!(even.validate(), Err(ConfigError::EvenRoomSize { .. })));

        let inverted = DungeonConfig {
            min_room_size: 9,
            max_room_size: 7,
            ..DungeonConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(ConfigError::RoomSizeRange { .. })));

        let too_big = DungeonConfig {
            width: 11,
            ..DungeonConfig::default()
        };
        assert!(matches!(too_big.validate(), Err(ConfigError::RoomTooLarge { .. })));
    }

    #[test]
    fn test_probability_range() {
        let config = DungeonConfig {
            secret_room_chance: 1.5,
            ..DungeonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Probability {
                name: "secret_room_chance",
                ..
            })
        ));

        let nan = DungeonConfig {
            room_trap_chance: f64::NAN,
            ..DungeonConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_json_partial_override() {
        let config = DungeonConfig::from_json(r#"{ "width": 31, "height": 21 }"#).unwrap();
        assert_eq!(config.width, 31);
        assert_eq!(config.height, 21);
        assert_eq!(config.max_room_size, MAX_ROOM_SIZE);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            DungeonConfig::from_json("{ width: }"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DungeonConfig::from_json(r#"{ "width": 30 }"#),
            Err(ConfigError::EvenDimension { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = DungeonConfig::load_from_file(Path::new("/nonexistent/delve.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::RoomSizeRange { min: 9, max: 7 };
        assert_eq!(err.to_string(), "min room size 9 exceeds max room size 7");
    }
}
