//! Buffer transform driver.
//!
//! Applies a per-pixel rule across a whole buffer. Every rule used in
//! this workspace is pure and depends only on the sample it receives,
//! so `dst[i]` depends only on `src[i]` and the traversal order is
//! unobservable. The parallel counterpart lives in [`crate::parallel`].

use gray_core::Intensity;
use tracing::trace;

use crate::{OpsError, OpsResult};

/// Applies `rule` to every sample of `src`, writing into `dst`.
///
/// The buffers must already have equal lengths; nothing can fail once
/// the pass starts.
///
/// # Errors
///
/// Returns [`OpsError::SizeMismatch`] if the lengths differ. `dst` is
/// not touched in that case.
///
/// # Example
///
/// ```rust
/// use gray_ops::{map_into, negative};
///
/// let src = [0u8, 100, 255];
/// let mut dst = [0u8; 3];
/// map_into(&src, &mut dst, negative).unwrap();
/// assert_eq!(dst, [255, 155, 0]);
/// ```
pub fn map_into<F>(src: &[Intensity], dst: &mut [Intensity], rule: F) -> OpsResult<()>
where
    F: Fn(Intensity) -> Intensity,
{
    if dst.len() != src.len() {
        return Err(OpsError::SizeMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }
    trace!(len = src.len(), "point pass");
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = rule(s);
    }
    Ok(())
}

/// Applies `rule` to every sample of `src` into a fresh buffer.
///
/// # Example
///
/// ```rust
/// use gray_ops::{map_vec, Threshold};
///
/// let thr = Threshold::default();
/// let out = map_vec(&[10, 200], |x| thr.map(x));
/// assert_eq!(out, vec![0, 255]);
/// ```
pub fn map_vec<F>(src: &[Intensity], rule: F) -> Vec<Intensity>
where
    F: Fn(Intensity) -> Intensity,
{
    trace!(len = src.len(), "point pass (allocating)");
    src.iter().map(|&s| rule(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negative;

    #[test]
    fn test_length_preserved() {
        let src = vec![42u8; 1000];
        let out = map_vec(&src, negative);
        assert_eq!(out.len(), src.len());
        assert!(out.iter().all(|&v| v == 213));
    }

    #[test]
    fn test_empty_buffer() {
        let mut dst = [0u8; 0];
        map_into(&[], &mut dst, negative).unwrap();
        assert!(map_vec(&[], negative).is_empty());
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let src = [0u8; 4];
        let mut dst = [7u8; 3];
        let err = map_into(&src, &mut dst, negative).unwrap_err();
        assert!(matches!(err, OpsError::SizeMismatch { src: 4, dst: 3 }));
        // Destination untouched on rejection.
        assert_eq!(dst, [7, 7, 7]);
    }

    #[test]
    fn test_no_cross_index_leakage() {
        let mut src: Vec<u8> = (0..=255).collect();
        let base = map_vec(&src, negative);

        src[100] = 7;
        let perturbed = map_vec(&src, negative);

        for i in 0..src.len() {
            if i == 100 {
                assert_ne!(perturbed[i], base[i]);
            } else {
                assert_eq!(perturbed[i], base[i]);
            }
        }
    }
}
