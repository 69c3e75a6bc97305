//! # Model Factory
//!
//! Turns an untyped descriptor into a typed [`GridModel`].
//!
//! ## Contract
//!
//! Checked in order, first failure wins:
//! 1. descriptor missing, not an object, or without a present `type` or
//!    `position` → no model
//! 2. dispatch on `type`:
//!    - `"voxel"` with a present `color` → [`VoxelGridModel`]
//!    - anything else → no model
//!
//! `position` and `color` are opaque: any present value is accepted and
//! stored untouched. "No model" is `None`. There is no error channel and
//! no reason is reported. The factory holds no state, does not log and
//! does not keep references to its input, so it is safe to call from any
//! thread.

use serde_json::Value;
use voxmap_shared::{ModelColor, Position};

use crate::descriptor::{ModelDescriptor, COLOR_FIELD, POSITION_FIELD, TYPE_FIELD};
use crate::model::{GridModel, GridModelType, VoxelGridModel};

/// Factory for grid models.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModelFactory;

impl ModelFactory {
    /// Returns the model described by `descriptor`, or `None`.
    #[must_use]
    pub fn create_model(descriptor: Option<&Value>) -> Option<GridModel> {
        let descriptor = ModelDescriptor::from_value(descriptor?)?;

        // Common to every variant
        let (Some(tag), Some(position)) =
            (descriptor.field(TYPE_FIELD), descriptor.field(POSITION_FIELD))
        else {
            return None;
        };

        match GridModelType::from_tag(tag)? {
            GridModelType::Voxel => voxel(&descriptor, position).map(GridModel::Voxel),
        }
    }
}

/// Shorthand for [`ModelFactory::create_model`].
#[inline]
#[must_use]
pub fn create_model(descriptor: Option<&Value>) -> Option<GridModel> {
    ModelFactory::create_model(descriptor)
}

fn voxel(descriptor: &ModelDescriptor<'_>, position: &Value) -> Option<VoxelGridModel> {
    let color = descriptor.field(COLOR_FIELD)?;
    Some(VoxelGridModel::new(
        Position::new(position.clone()),
        ModelColor::new(color.clone()),
    ))
}
