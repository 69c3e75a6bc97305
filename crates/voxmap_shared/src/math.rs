//! Positions shared by models and maps.
//!
//! A descriptor's `position` is opaque: it is stored and written back
//! exactly as given. [`Position::to_vec3`] is a read-only view for the
//! common `[x, y, z]` / `{"x": .., "y": .., "z": ..}` shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A model position, kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Value);

impl Position {
    /// Wraps a raw position value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The value exactly as given.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the raw value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Reads the position as three coordinates.
    ///
    /// Returns `None` for any other shape.
    #[must_use]
    pub fn to_vec3(&self) -> Option<Vec3> {
        Vec3::deserialize(&self.0).ok()
    }
}

impl From<Value> for Position {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// 3D Vector - coordinate view of a position
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Vec3Repr")]
pub struct Vec3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Accepted wire shapes for a coordinate triple.
#[derive(Deserialize)]
#[serde(untagged)]
enum Vec3Repr {
    Array([f64; 3]),
    Object { x: f64, y: f64, z: f64 },
}

impl From<Vec3Repr> for Vec3 {
    fn from(repr: Vec3Repr) -> Self {
        match repr {
            Vec3Repr::Array([x, y, z]) | Vec3Repr::Object { x, y, z } => Self::new(x, y, z),
        }
    }
}
