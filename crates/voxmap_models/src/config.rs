//! Editor configuration.
//!
//! Loaded once at startup from TOML. Every key has a default, so an empty
//! file (or no file at all) gives [`EditorConfig::default`].
//!
//! ```toml
//! [map]
//! width = 32
//! height = 16
//! depth = 32
//! color = "#202020"
//! private = true
//!
//! [limits]
//! max_dimension = 1024
//! max_models = 100000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxmap_shared::ModelColor;

use crate::error::ConfigError;

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Defaults for newly created maps.
    #[serde(default)]
    pub map: MapDefaults,

    /// Size limits enforced on map documents.
    #[serde(default)]
    pub limits: Limits,
}

/// Defaults applied to a blank map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Width in grid cells.
    #[serde(default = "default_extent")]
    pub width: u32,

    /// Height in grid cells.
    #[serde(default = "default_extent")]
    pub height: u32,

    /// Depth in grid cells.
    #[serde(default = "default_extent")]
    pub depth: u32,

    /// Base color of the map.
    #[serde(default = "default_color")]
    pub color: ModelColor,

    /// Whether new maps are private.
    #[serde(default)]
    pub private: bool,
}

fn default_extent() -> u32 {
    16
}

fn default_color() -> ModelColor {
    ModelColor::from("#ffffff")
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            depth: default_extent(),
            color: default_color(),
            private: false,
        }
    }
}

/// Limits enforced by map validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Largest allowed width, height or depth.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,

    /// Largest allowed number of model descriptors per map.
    #[serde(default = "default_max_models")]
    pub max_models: usize,
}

fn default_max_dimension() -> u32 {
    512
}

fn default_max_models() -> usize {
    65_536
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            max_models: default_max_models(),
        }
    }
}

impl EditorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is invalid or the values are inconsistent.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_owned(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded editor config from {} (max dimension {}, max models {})",
            path.display(),
            config.limits.max_dimension,
            config.limits.max_models
        );
        Ok(config)
    }

    /// Checks that the values are usable together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `max_dimension` is zero or a
    /// default dimension lies outside `1..=max_dimension`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.limits.max_dimension;
        if max == 0 {
            return Err(ConfigError::Invalid("limits.max_dimension must be at least 1".into()));
        }

        for (axis, value) in [
            ("width", self.map.width),
            ("height", self.map.height),
            ("depth", self.map.depth),
        ] {
            if value == 0 || value > max {
                return Err(ConfigError::Invalid(format!(
                    "map.{axis} = {value} is outside 1..={max}"
                )));
            }
        }

        Ok(())
    }
}
