//! # Map Documents
//!
//! A map is a named, sized grid holding a list of model descriptors.
//!
//! Descriptors stay untyped inside the document so that records the
//! current build does not understand survive a load/update cycle. Typed
//! models are produced on demand by [`MapDocument::grid_models`].
//!
//! ## Updates
//!
//! [`MapUpdate`] overwrites only the fields it carries. A field is carried
//! when it is set and not `null`, `false`, `0`, `""`, `[]` or `{}`, so an
//! empty value never overwrites anything. This is stricter than the
//! descriptor rule, where empty arrays and objects count as present.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use voxmap_shared::ModelColor;

use crate::config::EditorConfig;
use crate::descriptor::is_present;
use crate::error::{MapError, MapResult};
use crate::factory::create_model;
use crate::model::GridModel;

/// A map document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Display name.
    pub name: String,
    /// Width in grid cells.
    pub width: u32,
    /// Height in grid cells.
    pub height: u32,
    /// Depth in grid cells.
    pub depth: u32,
    /// Base color.
    pub color: ModelColor,
    /// Hidden from other users.
    pub private: bool,
    /// Model descriptors, in insertion order.
    pub models: Vec<Value>,
}

impl MapDocument {
    /// Creates an empty map from the configured defaults.
    #[must_use]
    pub fn blank(name: impl Into<String>, config: &EditorConfig) -> Self {
        let defaults = &config.map;
        Self {
            name: name.into(),
            width: defaults.width,
            height: defaults.height,
            depth: defaults.depth,
            color: defaults.color.clone(),
            private: defaults.private,
            models: Vec::new(),
        }
    }

    /// Parses a map document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Malformed`] if the text is not JSON or any of the
    /// seven map fields is missing or mistyped.
    pub fn from_json(text: &str) -> MapResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds a map document from a JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`MapDocument::from_json`].
    pub fn from_value(value: Value) -> MapResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encodes the document as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::Malformed`] if encoding fails.
    pub fn to_json(&self) -> MapResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Checks the document against the configured limits.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: empty name, a dimension outside
    /// `1..=max_dimension`, or more than `max_models` descriptors.
    pub fn validate(&self, config: &EditorConfig) -> MapResult<()> {
        if self.name.trim().is_empty() {
            return Err(MapError::EmptyName);
        }

        let max = config.limits.max_dimension;
        for (axis, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
        ] {
            if value == 0 || value > max {
                return Err(MapError::DimensionOutOfRange { axis, value, max });
            }
        }

        if self.models.len() > config.limits.max_models {
            return Err(MapError::TooManyModels {
                count: self.models.len(),
                max: config.limits.max_models,
            });
        }

        Ok(())
    }

    /// Runs every descriptor through the factory, in order.
    ///
    /// Descriptors that yield no model are dropped.
    #[must_use]
    pub fn grid_models(&self) -> Vec<GridModel> {
        let models: Vec<GridModel> = self
            .models
            .iter()
            .filter_map(|descriptor| create_model(Some(descriptor)))
            .collect();

        let skipped = self.models.len() - models.len();
        if skipped > 0 {
            tracing::debug!(
                "Map '{}': {} of {} descriptors produced no model",
                self.name,
                skipped,
                self.models.len()
            );
        }

        models
    }

    /// Appends a model in descriptor form.
    pub fn push_model(&mut self, model: &GridModel) {
        self.models.push(model.to_descriptor());
    }

    /// Overwrites the fields carried by `update`.
    pub fn apply(&mut self, update: MapUpdate) {
        let MapUpdate {
            name,
            width,
            height,
            depth,
            color,
            private,
            models,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(width) = width {
            self.width = width;
        }
        if let Some(height) = height {
            self.height = height;
        }
        if let Some(depth) = depth {
            self.depth = depth;
        }
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(private) = private {
            self.private = private;
        }
        if let Some(models) = models {
            self.models = models;
        }
    }
}

/// A partial map update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapUpdate {
    /// New name.
    pub name: Option<String>,
    /// New width.
    pub width: Option<u32>,
    /// New height.
    pub height: Option<u32>,
    /// New depth.
    pub depth: Option<u32>,
    /// New base color.
    pub color: Option<ModelColor>,
    /// New visibility.
    pub private: Option<bool>,
    /// Replacement descriptor list.
    pub models: Option<Vec<Value>>,
}

impl MapUpdate {
    /// Reads the updatable fields from a JSON object.
    ///
    /// Unknown keys are ignored. Keys that are absent or empty
    /// (`null`, `false`, `0`, `""`, `[]`, `{}`) are left as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NotAnObject`] for non-objects and
    /// [`MapError::InvalidField`] when a present value has the wrong type.
    pub fn from_value(value: &Value) -> MapResult<Self> {
        let fields = value.as_object().ok_or(MapError::NotAnObject)?;

        Ok(Self {
            name: take(fields, "name")?,
            width: take(fields, "width")?,
            height: take(fields, "height")?,
            depth: take(fields, "depth")?,
            color: take(fields, "color")?,
            private: take(fields, "private")?,
            models: take(fields, "models")?,
        })
    }

    /// Returns true if applying this update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether an update value overwrites its field.
fn carries(value: &Value) -> bool {
    match value {
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
        other => is_present(other),
    }
}

fn take<T: DeserializeOwned>(fields: &Map<String, Value>, field: &'static str) -> MapResult<Option<T>> {
    match fields.get(field).filter(|value| carries(value)) {
        None => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|source| MapError::InvalidField { field, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GridEntity, VoxelGridModel};
    use serde_json::json;
    use voxmap_shared::Position;

    fn sample() -> Value {
        json!({
            "name": "harbor",
            "width": 32,
            "height": 8,
            "depth": 32,
            "color": "#336699",
            "private": false,
            "models": [
                {"type": "voxel", "position": [0, 0, 0], "color": "#fff"},
                {"type": "sphere", "position": [1, 1, 1]},
                {"type": "voxel", "position": [2, 0, 1], "color": 65280},
                null
            ]
        })
    }

    #[test]
    fn test_parse_document() {
        let map = MapDocument::from_value(sample()).unwrap();
        assert_eq!(map.name, "harbor");
        assert_eq!(map.color, ModelColor::from("#336699"));
        assert_eq!(map.models.len(), 4);
        assert!(map.validate(&EditorConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("depth");
        assert!(matches!(MapDocument::from_value(value), Err(MapError::Malformed(_))));
        assert!(matches!(MapDocument::from_json("{"), Err(MapError::Malformed(_))));
    }

    #[test]
    fn test_grid_models_skip_invalid_descriptors() {
        let map = MapDocument::from_value(sample()).unwrap();
        let models = map.grid_models();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].position().as_value(), &json!([0, 0, 0]));
        assert_eq!(models[1].position().as_value(), &json!([2, 0, 1]));
        assert_eq!(
            models[1].as_voxel().map(VoxelGridModel::color),
            Some(&ModelColor::from(65280))
        );
    }

    #[test]
    fn test_push_model_round_trips() {
        let mut map = MapDocument::blank("scratch", &EditorConfig::default());
        let model = GridModel::from(VoxelGridModel::new(
            Position::new(json!([3, 4.5, 5])),
            ModelColor::from("#abc"),
        ));

        map.push_model(&model);

        assert_eq!(map.models[0]["position"], json!([3, 4.5, 5]));
        assert_eq!(map.grid_models(), vec![model]);
    }

    #[test]
    fn test_blank_uses_config_defaults() {
        let mut config = EditorConfig::default();
        config.map.depth = 4;
        config.map.private = true;

        let map = MapDocument::blank("new", &config);
        assert_eq!(map.depth, 4);
        assert!(map.private);
        assert!(map.models.is_empty());
        assert!(map.validate(&config).is_ok());
    }

    #[test]
    fn test_validate_limits() {
        let config = EditorConfig::default();
        let mut map = MapDocument::from_value(sample()).unwrap();

        map.name = "  ".into();
        assert!(matches!(map.validate(&config), Err(MapError::EmptyName)));

        map.name = "harbor".into();
        map.height = 0;
        assert!(matches!(
            map.validate(&config),
            Err(MapError::DimensionOutOfRange { axis: "height", value: 0, .. })
        ));

        map.height = 8;
        map.width = config.limits.max_dimension + 1;
        assert!(matches!(
            map.validate(&config),
            Err(MapError::DimensionOutOfRange { axis: "width", .. })
        ));

        map.width = 32;
        let mut tight = config.clone();
        tight.limits.max_models = 3;
        assert!(matches!(
            map.validate(&tight),
            Err(MapError::TooManyModels { count: 4, max: 3 })
        ));
    }

    #[test]
    fn test_update_only_overwrites_present_fields() {
        let mut map = MapDocument::from_value(sample()).unwrap();
        let update = MapUpdate::from_value(&json!({
            "name": "harbor at night",
            "width": 0,
            "private": false,
            "color": "",
            "depth": 48,
            "owner": "someone"
        }))
        .unwrap();

        assert_eq!(update.width, None);
        assert_eq!(update.private, None);
        assert!(!update.is_empty());

        map.apply(update);

        assert_eq!(map.name, "harbor at night");
        assert_eq!(map.width, 32);
        assert_eq!(map.depth, 48);
        assert_eq!(map.color, ModelColor::from("#336699"));
        assert_eq!(map.models.len(), 4);
    }

    #[test]
    fn test_update_replaces_models() {
        let mut map = MapDocument::from_value(sample()).unwrap();
        let update = MapUpdate::from_value(&json!({
            "models": [{"type": "voxel", "position": [9, 9, 9], "color": "#000"}],
            "private": true
        }))
        .unwrap();

        map.apply(update);

        assert!(map.private);
        assert_eq!(map.grid_models().len(), 1);
    }

    #[test]
    fn test_empty_collections_do_not_overwrite() {
        let mut map = MapDocument::from_value(sample()).unwrap();
        let update = MapUpdate::from_value(&json!({"models": [], "color": {}})).unwrap();

        assert!(update.is_empty());
        map.apply(update);

        assert_eq!(map.models.len(), 4);
        assert_eq!(map.color, ModelColor::from("#336699"));
    }

    #[test]
    fn test_non_empty_object_color_overwrites() {
        let mut map = MapDocument::from_value(sample()).unwrap();
        let update = MapUpdate::from_value(&json!({"color": {"r": 1}})).unwrap();

        map.apply(update);

        assert_eq!(map.color.as_value(), &json!({"r": 1}));
    }

    #[test]
    fn test_update_rejects_wrong_types() {
        let result = MapUpdate::from_value(&json!({"width": "wide"}));
        assert!(matches!(result, Err(MapError::InvalidField { field: "width", .. })));

        let result = MapUpdate::from_value(&json!(["name"]));
        assert!(matches!(result, Err(MapError::NotAnObject)));
    }

    #[test]
    fn test_empty_update() {
        let update = MapUpdate::from_value(&json!({"name": null, "depth": 0})).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_json_round_trip_keeps_unknown_descriptors() {
        let map = MapDocument::from_value(sample()).unwrap();
        let reparsed = MapDocument::from_json(&map.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, map);
    }
}
