//! Intensity inversion.

use gray_core::{Intensity, INTENSITY_MAX};

/// Inverts a single intensity: `255 - x`.
///
/// The result is always in range, so no saturation is involved, and
/// applying the rule twice returns the original value.
///
/// # Example
///
/// ```rust
/// use gray_ops::negative;
///
/// assert_eq!(negative(0), 255);
/// assert_eq!(negative(negative(137)), 137);
/// ```
#[inline]
pub fn negative(x: Intensity) -> Intensity {
    INTENSITY_MAX - x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative() {
        assert_eq!(negative(0), 255);
        assert_eq!(negative(255), 0);
        assert_eq!(negative(128), 127);
    }

    #[test]
    fn test_involution() {
        for x in 0..=255u8 {
            assert_eq!(negative(negative(x)), x);
        }
    }
}
