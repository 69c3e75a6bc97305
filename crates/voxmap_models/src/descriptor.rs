//! Untyped model descriptors.
//!
//! A descriptor is a JSON object such as
//! `{"type": "voxel", "position": [1, 2, 3], "color": "#fff"}`.
//! Fields count only when *present*: set, and not `null`, `false`, `0`
//! or `""`. Arrays and objects are always present, even when empty.

use serde_json::{Map, Value};

/// Discriminator field.
pub const TYPE_FIELD: &str = "type";
/// Position field, required by every variant.
pub const POSITION_FIELD: &str = "position";
/// Color field, required by the voxel variant.
pub const COLOR_FIELD: &str = "color";

/// Presence rule for descriptor fields.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Borrowed view over a descriptor object.
#[derive(Clone, Copy, Debug)]
pub struct ModelDescriptor<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ModelDescriptor<'a> {
    /// Wraps a JSON value. Anything but an object has no fields to read.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// Returns the field when present.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key).filter(|value| is_present(value))
    }
}
