//! # VOXMAP Models
//!
//! Grid models for the VOXMAP editor and the factory that builds them from
//! untyped descriptors.
//!
//! ## Design Principles
//!
//! 1. **Closed tag set** - every model type is a [`GridModelType`] variant and
//!    the factory matches on it exhaustively
//! 2. **Silent failure** - an invalid descriptor yields `None`, never an error
//! 3. **Pass-through** - position and color are stored and written back untouched
//! 4. **Stateless** - no caches, no registries, nothing to lock
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use voxmap_models::{create_model, GridEntity, GridModelType};
//!
//! let descriptor = json!({"type": "voxel", "position": [1, 2, 3], "color": "#fff"});
//! let model = create_model(Some(&descriptor)).expect("valid voxel");
//! assert_eq!(model.model_type(), GridModelType::Voxel);
//!
//! assert!(create_model(Some(&json!({"type": "sphere", "position": [0, 0, 0]}))).is_none());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod map;
pub mod model;

pub use config::{EditorConfig, Limits, MapDefaults};
pub use descriptor::{is_present, ModelDescriptor};
pub use error::{ConfigError, MapError, MapResult};
pub use factory::{create_model, ModelFactory};
pub use map::{MapDocument, MapUpdate};
pub use model::{GridEntity, GridModel, GridModelType, VoxelGridModel};

pub use voxmap_shared::{ModelColor, Position, Rgb, Vec3};
