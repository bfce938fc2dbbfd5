//! Intensity samples and saturation.
//!
//! A grayscale image here is a flat sequence of [`Intensity`] samples.
//! Point transforms frequently produce intermediate values outside the
//! representable range; [`saturate`] is the single place where they are
//! folded back in. Out-of-range intermediates are routine arithmetic,
//! not errors.

/// An 8-bit unsigned brightness sample, range [0, 255].
///
/// This is the only numeric domain type in the workspace. All per-pixel
/// arithmetic widens to `i32` and is saturated back via [`saturate`]
/// before being stored.
pub type Intensity = u8;

/// Maximum representable intensity (white).
pub const INTENSITY_MAX: Intensity = 255;

/// Clamps an integer arithmetic result into the intensity range.
///
/// Values below 0 map to 0, values above 255 map to 255, in-range
/// values pass through unchanged. Pure and infallible.
///
/// # Example
///
/// ```rust
/// use gray_core::saturate;
///
/// assert_eq!(saturate(-12), 0);
/// assert_eq!(saturate(300), 255);
/// assert_eq!(saturate(128), 128);
/// ```
#[inline]
pub fn saturate(v: i32) -> Intensity {
    if v < 0 {
        0
    } else if v > INTENSITY_MAX as i32 {
        INTENSITY_MAX
    } else {
        v as Intensity
    }
}
