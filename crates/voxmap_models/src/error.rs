//! # Error Types
//!
//! Errors of the map document and configuration layers.
//!
//! The model factory has no error type: an invalid descriptor simply
//! produces no model.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, validating or updating a map.
#[derive(Error, Debug)]
pub enum MapError {
    /// The document is not valid JSON or lacks a required field.
    #[error("malformed map document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An update was not a JSON object.
    #[error("map update must be a JSON object")]
    NotAnObject,

    /// A present field has the wrong type.
    #[error("invalid value for map field `{field}`: {source}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// Decoder error.
        source: serde_json::Error,
    },

    /// The map name is empty or whitespace.
    #[error("map name must not be empty")]
    EmptyName,

    /// A dimension is zero or above the configured maximum.
    #[error("map {axis} of {value} is outside 1..={max}")]
    DimensionOutOfRange {
        /// Which dimension (`width`, `height` or `depth`).
        axis: &'static str,
        /// The rejected value.
        value: u32,
        /// The configured maximum.
        max: u32,
    },

    /// The map carries more descriptors than allowed.
    #[error("map holds {count} models, limit is {max}")]
    TooManyModels {
        /// Number of descriptors in the map.
        count: usize,
        /// The configured maximum.
        max: usize,
    },
}

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while loading the editor configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    FileRead {
        /// Path that was read.
        path: PathBuf,
        /// I/O error.
        source: std::io::Error,
    },

    /// The config is not valid TOML or has mistyped values.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config parsed but its values are inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
