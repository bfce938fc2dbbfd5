//! Parallel buffer transform driver using Rayon.
//!
//! Point rules have no cross-pixel dependency, so a pass can be split
//! across threads freely. The output is bit-identical to the
//! sequential driver in [`crate::apply`]; parallelism is an
//! optimization, never a semantic change.
//!
//! # Example
//!
//! ```rust
//! use gray_ops::{negative, parallel};
//!
//! let src: Vec<u8> = (0..=255).collect();
//! let mut dst = vec![0u8; src.len()];
//! parallel::map_into_par(&src, &mut dst, negative).unwrap();
//! assert_eq!(dst[0], 255);
//! ```

use gray_core::Intensity;
use rayon::prelude::*;
use tracing::trace;

use crate::{OpsError, OpsResult};

/// Parallel counterpart of [`crate::map_into`].
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the lengths differ.
pub fn map_into_par<F>(src: &[Intensity], dst: &mut [Intensity], rule: F) -> OpsResult<()>
where
    F: Fn(Intensity) -> Intensity + Sync,
{
    if dst.len() != src.len() {
        return Err(OpsError::SizeMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    trace!(len = src.len(), "point pass (parallel)");
    dst.par_iter_mut()
        .zip(src.par_iter())
        .for_each(|(d, &s)| *d = rule(s));
    Ok(())
}

/// Parallel counterpart of [`crate::map_vec`].
pub fn map_vec_par<F>(src: &[Intensity], rule: F) -> Vec<Intensity>
where
    F: Fn(Intensity) -> Intensity + Sync,
{
    trace!(len = src.len(), "point pass (parallel, allocating)");
    src.par_iter().map(|&s| rule(s)).collect()
}
