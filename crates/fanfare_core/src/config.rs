//! Configuration for burst launches.
//!
//! Every field is independently optional: callers merge overrides over
//! [`BurstConfig::default`] with struct-update syntax, and TOML presets may
//! omit any subset of fields.

use serde::{Deserialize, Serialize};

use crate::color::{Color, DEFAULT_PALETTE};
use crate::error::{EngineError, EngineResult};
use crate::math::Vec2;

/// Configuration for a single burst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Number of particles to spawn.
    pub particle_count: u32,
    /// Angular spread of launch directions, in degrees.
    pub spread: f32,
    /// Launch direction center, in degrees from straight down-range.
    pub angle: f32,
    /// Normalized launch point (0-1 fractions of viewport width/height).
    pub origin: Vec2,
    /// Palette to sample from, uniformly at random.
    pub colors: Vec<Color>,
    /// Size multiplier.
    pub scalar: f32,
    /// Downward acceleration per frame.
    pub gravity: f32,
    /// Per-frame multiplicative life decay (0 < decay < 1).
    pub decay: f32,
    /// Initial speed magnitude, in pixels per frame.
    pub start_velocity: f32,
    /// Maximum frame count before forced teardown.
    pub ticks: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 45.0,
            angle: 0.0,
            origin: Vec2::new(0.5, 0.5),
            colors: DEFAULT_PALETTE.to_vec(),
            scalar: 1.0,
            gravity: 1.0,
            decay: 0.9,
            start_velocity: 30.0,
            ticks: 200,
        }
    }
}

impl BurstConfig {
    /// Checks the config for caller errors.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyPalette`] when there is nothing to sample a
    /// particle color from.
    pub fn validate(&self) -> EngineResult<()> {
        if self.colors.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        Ok(())
    }

    /// Loads a config from TOML text. Omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the text is not valid TOML
    /// for this schema.
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        toml::from_str(text).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_contract() {
        let config = BurstConfig::default();
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.spread, 45.0);
        assert_eq!(config.origin, Vec2::new(0.5, 0.5));
        assert_eq!(config.colors.len(), 5);
        assert_eq!(config.scalar, 1.0);
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.decay, 0.9);
        assert_eq!(config.start_velocity, 30.0);
        assert_eq!(config.ticks, 200);
    }

    #[test]
    fn test_struct_update_merge() {
        let config = BurstConfig {
            particle_count: 12,
            ticks: 1,
            ..BurstConfig::default()
        };
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.ticks, 1);
        // Untouched fields keep their defaults
        assert_eq!(config.decay, 0.9);
    }

    #[test]
    fn test_toml_partial_override() {
        let config = BurstConfig::from_toml_str(
            r##"
            particle_count = 30
            colors = ["#ff0000", "#00ff00"]
            origin = { x = 0.5, y = 1.0 }
            "##,
        )
        .unwrap();

        assert_eq!(config.particle_count, 30);
        assert_eq!(config.colors.len(), 2);
        assert_eq!(config.origin.y, 1.0);
        assert_eq!(config.ticks, 200);
    }

    #[test]
    fn test_toml_rejects_bad_color() {
        let result = BurstConfig::from_toml_str(r##"colors = ["#notacolor"]"##);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_palette_is_a_caller_error() {
        let config = BurstConfig {
            colors: Vec::new(),
            ..BurstConfig::default()
        };
        assert_eq!(config.validate(), Err(EngineError::EmptyPalette));
    }
}
