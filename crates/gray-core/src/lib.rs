//! # gray-core
//!
//! Core types for grayscale point-transform pipelines.
//!
//! This crate provides the domain foundation shared by the rest of the
//! workspace:
//!
//! - [`Intensity`] - an 8-bit brightness sample in [0, 255]
//! - [`saturate`] - clamping of integer arithmetic results back into the
//!   representable intensity range
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no dependencies.
//! The other crates build on it:
//!
//! ```text
//! gray-core (this crate)
//!    ^
//!    |
//!    +-- gray-lut (gamma lookup tables)
//!    +-- gray-ops (point operations, pipeline)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod intensity;

pub use intensity::{saturate, Intensity, INTENSITY_MAX};
