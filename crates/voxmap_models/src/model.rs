//! # Grid Models
//!
//! Typed entities that live on the editor grid.
//!
//! Every variant is listed in [`GridModelType`]. Adding a variant means:
//! 1. a new tag in [`GridModelType`],
//! 2. a payload struct implementing [`GridEntity`],
//! 3. a [`GridModel`] variant and one factory arm.

use std::fmt;

use serde_json::{json, Value};
use voxmap_shared::{ModelColor, Position};

/// Descriptor tag of the voxel variant.
pub const VOXEL_TAG: &str = "voxel";

/// Closed enumeration of known grid model types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridModelType {
    /// A single colored voxel.
    Voxel,
}

impl GridModelType {
    /// All known types, in dispatch order.
    pub const ALL: [Self; 1] = [Self::Voxel];

    /// Descriptor tag for this type.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Voxel => VOXEL_TAG,
        }
    }

    /// Resolves a descriptor `type` value.
    ///
    /// Only strings are tags, and comparison is exact.
    #[must_use]
    pub fn from_tag(tag: &Value) -> Option<Self> {
        let tag = tag.as_str()?;
        Self::ALL.into_iter().find(|known| known.tag() == tag)
    }
}

impl fmt::Display for GridModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Capability set shared by every grid model.
pub trait GridEntity {
    /// The variant tag.
    fn model_type(&self) -> GridModelType;

    /// Grid position, exactly as given in the descriptor.
    fn position(&self) -> &Position;
}

/// A single colored voxel.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelGridModel {
    position: Position,
    color: ModelColor,
}

impl VoxelGridModel {
    /// Creates a voxel model.
    #[must_use]
    pub const fn new(position: Position, color: ModelColor) -> Self {
        Self { position, color }
    }

    /// Voxel color, exactly as given in the descriptor.
    #[must_use]
    pub const fn color(&self) -> &ModelColor {
        &self.color
    }
}

impl GridEntity for VoxelGridModel {
    fn model_type(&self) -> GridModelType {
        GridModelType::Voxel
    }

    fn position(&self) -> &Position {
        &self.position
    }
}

/// Any grid model the factory can produce.
#[derive(Clone, Debug, PartialEq)]
pub enum GridModel {
    /// Voxel variant.
    Voxel(VoxelGridModel),
}

impl GridModel {
    /// Encodes back to descriptor form.
    ///
    /// `position` and `color` are written back exactly as they were read,
    /// so feeding the result to the factory yields an equal model.
    #[must_use]
    pub fn to_descriptor(&self) -> Value {
        match self {
            Self::Voxel(voxel) => json!({
                "type": GridModelType::Voxel.tag(),
                "position": voxel.position,
                "color": voxel.color,
            }),
        }
    }

    /// Returns the voxel payload, if this is a voxel.
    #[must_use]
    pub const fn as_voxel(&self) -> Option<&VoxelGridModel> {
        match self {
            Self::Voxel(voxel) => Some(voxel),
        }
    }
}

impl GridEntity for GridModel {
    fn model_type(&self) -> GridModelType {
        match self {
            Self::Voxel(voxel) => voxel.model_type(),
        }
    }

    fn position(&self) -> &Position {
        match self {
            Self::Voxel(voxel) => voxel.position(),
        }
    }
}

impl From<VoxelGridModel> for GridModel {
    fn from(voxel: VoxelGridModel) -> Self {
        Self::Voxel(voxel)
    }
}
