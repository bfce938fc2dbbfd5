//! Binary threshold remapping.

use gray_core::Intensity;

/// Threshold operation parameters.
///
/// Replaces each sample with one of two fixed output values depending
/// on whether it reaches the cutoff. The comparison is inclusive:
/// `x >= level` selects `high`.
///
/// # Example
///
/// ```rust
/// use gray_ops::Threshold;
///
/// let thr = Threshold::default(); // level 128, outputs 0 / 255
/// assert_eq!(thr.map(127), 0);
/// assert_eq!(thr.map(128), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    /// Cutoff level; samples at or above it map to `high`.
    pub level: Intensity,
    /// Output for samples below the cutoff.
    pub low: Intensity,
    /// Output for samples at or above the cutoff.
    pub high: Intensity,
}

impl Threshold {
    /// Creates a threshold with explicit output values.
    pub fn new(level: Intensity, low: Intensity, high: Intensity) -> Self {
        Self { level, low, high }
    }

    /// Creates a black/white binarization at the given level.
    pub fn binary(level: Intensity) -> Self {
        Self::new(level, 0, 255)
    }

    /// Maps a single intensity through the threshold.
    #[inline]
    pub fn map(&self, x: Intensity) -> Intensity {
        if x >= self.level { self.high } else { self.low }
    }
}

impl Default for Threshold {
    /// Mid-range binarization: level 128, outputs 0 and 255.
    fn default() -> Self {
        Self::binary(128)
    }
}
