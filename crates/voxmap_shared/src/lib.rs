//! # VOXMAP Shared
//!
//! Value types used by every consumer of grid model data.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - Anything editor- or map-specific
//! - Anything that rewrites a value it was handed
//!
//! If you need descriptor handling, put it in `voxmap_models`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod color;
pub mod math;

pub use color::{ModelColor, Rgb};
pub use math::{Position, Vec3};
