//! Game configuration
//!
//! Plain data with serde support so the outer layers can load it from a file
//! or environment. The core only validates it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Dimensions, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_GRAVITY_MS, ROW_CLEAR_PAUSE_MS,
};

/// Narrowest/shortest field a spawn box fits in.
pub const MIN_FIELD_SIDE: u16 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
    /// Milliseconds between gravity steps
    pub gravity_ms: u32,
    /// Input freeze after a row completion
    pub row_clear_pause_ms: u32,
    /// Score exponent bump, in `[0, 1]`
    pub difficulty: f32,
    /// Spawn sequence seed
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            gravity_ms: DEFAULT_GRAVITY_MS,
            row_clear_pause_ms: ROW_CLEAR_PAUSE_MS,
            difficulty: 0.0,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_FIELD_SIDE {
            return Err(ConfigError::Validation(format!(
                "width must be >= {}",
                MIN_FIELD_SIDE
            )));
        }
        if self.height < MIN_FIELD_SIDE {
            return Err(ConfigError::Validation(format!(
                "height must be >= {}",
                MIN_FIELD_SIDE
            )));
        }
        if self.gravity_ms == 0 {
            return Err(ConfigError::Validation("gravity_ms must be > 0".into()));
        }
        if !self.difficulty.is_finite() || !(0.0..=1.0).contains(&self.difficulty) {
            return Err(ConfigError::Validation(
                "difficulty must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimensions(), Dimensions::new(10, 20));
    }

    #[test]
    fn test_rejects_tiny_field() {
        let config = GameConfig {
            width: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Validation("width must be >= 4".into()))
        );
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let config = GameConfig {
            gravity_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_difficulty() {
        for difficulty in [-0.1, 1.5, f32::NAN] {
            let config = GameConfig {
                difficulty,
                ..GameConfig::default()
            };
            assert!(config.validate().is_err(), "{} should be rejected", difficulty);
        }
    }
}
