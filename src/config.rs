//! Simulation Settings
//!
//! Loads flock tuning parameters from flock.toml for easy adjustment without
//! recompiling. Settings are immutable for the lifetime of a run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default tuning file path
pub const DEFAULT_CONFIG_PATH: &str = "flock.toml";

/// All tunable parameters of the flock simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockSettings {
    /// Population size, fixed after initialization
    pub num_boids: usize,
    /// Radius of the sphere boids spawn inside
    pub spawn_radius: f32,
    /// Containment radius; no boid ends a tick outside it
    pub max_radius: f32,
    /// Neighbor cap per boid per tick
    pub max_neighbors: usize,
    /// Start the neighbor scan at a random population offset
    pub random_neighbors: bool,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Magnitude cap on the summed steering acceleration
    pub max_accel: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub noise_weight: f32,
    /// Range of the separation rule and of the containment shell
    pub avoidance_radius: f32,
    pub avoidance_weight: f32,
    /// Position smoothing factor; `<= 0` selects the plain Euler step
    pub movement_smooth: f32,
    /// Orientation slerp factor
    pub rotation_smooth: f32,
    /// Weight separation and edge strength by `1/d²` instead of `1/d`
    pub inverse_square_falloff: bool,
}

impl Default for FlockSettings {
    fn default() -> Self {
        Self {
            num_boids: 100,
            spawn_radius: 5.0,
            max_radius: 15.0,
            max_neighbors: 5,
            random_neighbors: true,
            min_speed: 5.0,
            max_speed: 20.0,
            max_accel: 1.0,
            separation_weight: 1.0,
            alignment_weight: 1.0,
            cohesion_weight: 0.5,
            noise_weight: 1.0,
            avoidance_radius: 2.0,
            avoidance_weight: 1.0,
            movement_smooth: 1.0,
            rotation_smooth: 1.0,
            inverse_square_falloff: false,
        }
    }
}

impl FlockSettings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses settings from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads settings from the default path, falling back to defaults if the
    /// file is missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::from_file(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Checks settings the simulation cannot run with. Called once at
    /// initialization; a failure here is fatal.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.min_speed < 0.0 {
            return Err(SettingsError::NegativeMinSpeed(self.min_speed));
        }
        if self.min_speed > self.max_speed {
            return Err(SettingsError::SpeedRangeInverted {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if self.max_radius <= 0.0 {
            return Err(SettingsError::NonPositiveRadius(self.max_radius));
        }
        if self.max_accel < 0.0 {
            return Err(SettingsError::NegativeMaxAccel(self.max_accel));
        }
        Ok(())
    }
}

/// Failure to read or parse a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Invalid settings detected at initialization time.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("min_speed {min} exceeds max_speed {max}")]
    SpeedRangeInverted { min: f32, max: f32 },
    #[error("min_speed must be non-negative, got {0}")]
    NegativeMinSpeed(f32),
    #[error("max_radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("max_accel must be non-negative, got {0}")]
    NegativeMaxAccel(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = FlockSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.num_boids, 100);
        assert_eq!(settings.max_neighbors, 5);
        assert_eq!(settings.max_radius, 15.0);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings = FlockSettings::from_str("num_boids = 2\nmax_neighbors = 1").unwrap();
        assert_eq!(settings.num_boids, 2);
        assert_eq!(settings.max_neighbors, 1);
        assert_eq!(settings.max_speed, 20.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = FlockSettings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed = FlockSettings::from_str(&toml).unwrap();
        assert_eq!(parsed.num_boids, settings.num_boids);
        assert_eq!(parsed.cohesion_weight, settings.cohesion_weight);
        assert_eq!(parsed.random_neighbors, settings.random_neighbors);
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let settings = FlockSettings {
            min_speed: 10.0,
            max_speed: 5.0,
            ..FlockSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::SpeedRangeInverted { .. })
        ));
    }

    #[test]
    fn test_equal_speed_bounds_accepted() {
        let settings = FlockSettings {
            min_speed: 8.0,
            max_speed: 8.0,
            ..FlockSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let settings = FlockSettings {
            max_radius: 0.0,
            ..FlockSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NonPositiveRadius(_))
        ));
    }

    #[test]
    fn test_parse_error_surfaces() {
        assert!(matches!(
            FlockSettings::from_str("num_boids = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
