//! # gray-ops
//!
//! Point-wise intensity transforms for grayscale image buffers.
//!
//! Every operation here maps each sample of a source buffer through a
//! pure per-pixel rule, independently of its neighbours. The rules are
//! the classic point-processing primitives:
//!
//! - [`negative`] - intensity inversion, `255 - x`
//! - [`threshold`] - binary remapping around a cutoff ([`Threshold`])
//! - gamma correction via a precomputed table (`gray_lut::GammaLut`)
//! - [`piecewise`] - 3-segment contrast stretch ([`PiecewiseLinear`])
//!
//! The [`apply`] module holds the shared buffer driver, and
//! [`pipeline`] sequences the full battery of transforms over one
//! source buffer.
//!
//! # Example
//!
//! ```rust
//! use gray_ops::{Pipeline, PipelineConfig};
//!
//! let src: Vec<u8> = (0..=255).collect();
//! let run = Pipeline::new(PipelineConfig::default()).unwrap().run(&src);
//! assert!(run.is_complete());
//! assert_eq!(run.negative[0], 255);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod apply;
pub mod negative;
pub mod piecewise;
pub mod pipeline;
pub mod threshold;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use apply::{map_into, map_vec};
pub use error::{OpsError, OpsResult};
pub use negative::negative;
pub use piecewise::PiecewiseLinear;
pub use pipeline::{Pipeline, PipelineConfig, PipelineRun, DONE_MARKER};
pub use threshold::Threshold;
