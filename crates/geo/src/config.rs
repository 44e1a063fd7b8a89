//! Numeric constants used by the spherical math routines.
//!
//! Free functions in this crate use [`GeoConfig::default()`]; pass a custom
//! [`GeoConfig`] to work with a different radius or equality tolerance.

use crate::error::{GeoError, Result};
use crate::Coordinate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = EARTH_RADIUS_M / 1000.0;

/// Tolerance used by `Coordinate`'s `PartialEq`, in degrees.
pub const DEFAULT_EQUALITY_EPSILON: f64 = 1e-10;

/// Configuration file names searched by [`GeoConfig::load`] when no path is given.
const CONFIG_CANDIDATES: [&str; 2] = [".gistools.toml", "gistools.toml"];

/// Constants for distance, destination and equality computations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Sphere radius in meters
    #[serde(default = "default_earth_radius")]
    pub earth_radius_m: f64,

    /// Coordinate equality tolerance in degrees
    #[serde(default = "default_equality_epsilon")]
    pub equality_epsilon: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: default_earth_radius(),
            equality_epsilon: default_equality_epsilon(),
        }
    }
}

fn default_earth_radius() -> f64 {
    EARTH_RADIUS_M
}

fn default_equality_epsilon() -> f64 {
    DEFAULT_EQUALITY_EPSILON
}

impl GeoConfig {
    /// Load configuration from a TOML file, or fall back to defaults.
    ///
    /// Without an explicit path, `.gistools.toml` and `gistools.toml` are
    /// looked up in the current directory. A missing file is not an error;
    /// an unreadable or malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(|| {
            CONFIG_CANDIDATES
                .iter()
                .map(Path::new)
                .find(|p| p.exists())
                .map(Path::to_path_buf)
        });

        match config_path {
            Some(p) => {
                let config = Self::from_file(&p)?;
                tracing::debug!(path = %p.display(), ?config, "loaded geo config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GeoError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| GeoError::Config(format!("Failed to parse config: {}", e)))?;

        if !(config.earth_radius_m.is_finite() && config.earth_radius_m > 0.0) {
            return Err(GeoError::Config(format!(
                "earth_radius_m must be positive, got {}",
                config.earth_radius_m
            )));
        }
        if !(config.equality_epsilon.is_finite() && config.equality_epsilon >= 0.0) {
            return Err(GeoError::Config(format!(
                "equality_epsilon must be non-negative, got {}",
                config.equality_epsilon
            )));
        }

        Ok(config)
    }

    /// Tolerance comparison using this configuration's epsilon.
    #[inline]
    pub fn coordinates_equal(&self, a: &Coordinate, b: &Coordinate) -> bool {
        a.approx_eq(b, self.equality_epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = GeoConfig::default();
        assert_eq!(config.earth_radius_m, 6_371_008.8);
        assert_eq!(config.equality_epsilon, 1e-10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GeoConfig::from_toml_str("earth_radius_m = 6378137.0").unwrap();
        assert_eq!(config.earth_radius_m, 6_378_137.0);
        assert_eq!(config.equality_epsilon, DEFAULT_EQUALITY_EPSILON);
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let result = GeoConfig::from_toml_str("earth_radius_m = 0.0");
        assert!(matches!(result, Err(GeoError::Config(_))));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(GeoConfig::from_toml_str("earth_radius_m = \"big\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "equality_epsilon = 0.001").unwrap();

        let config = GeoConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.equality_epsilon, 0.001);
        assert_eq!(config.earth_radius_m, EARTH_RADIUS_M);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = GeoConfig::load(Some(Path::new("/nonexistent/gistools.toml")));
        assert!(matches!(result, Err(GeoError::Config(_))));
    }

    #[test]
    fn test_custom_epsilon_comparison() {
        let loose = GeoConfig {
            equality_epsilon: 0.01,
            ..GeoConfig::default()
        };
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(10.005, 20.005);
        assert!(loose.coordinates_equal(&a, &b));
        assert!(!GeoConfig::default().coordinates_equal(&a, &b));
    }
}
