//! # gray-lut
//!
//! Gamma lookup tables for grayscale point-transform pipelines.
//!
//! A power-law (gamma) remapping `y = 255 * (x/255)^g` is expensive to
//! evaluate per pixel, but the input domain has only 256 values. This
//! crate builds the full mapping once as a [`GammaLut`] and applies it
//! with an array index per pixel.
//!
//! # Usage
//!
//! ```rust
//! use gray_lut::GammaLut;
//!
//! // Darken: gamma 3
//! let lut = GammaLut::build(3.0).unwrap();
//! assert_eq!(lut.lookup(0), 0);
//! assert_eq!(lut.lookup(255), 255);
//! ```
//!
//! # Precomputed tables
//!
//! The tables for the two exponents the pipeline ships with (γ=3 and
//! γ=1/3) are also available as constants, [`GAMMA_3`] and
//! [`GAMMA_1_3`]. The builder and the constants agree value-for-value;
//! that agreement is enforced by tests so the two paths cannot drift.
//!
//! # Dependencies
//!
//! - [`gray-core`] - Intensity type and saturation
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `gray-ops` - gamma passes in the transform pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod gamma;
mod tables;

pub use error::{LutError, LutResult};
pub use gamma::GammaLut;
pub use tables::{GAMMA_1_3, GAMMA_3};
