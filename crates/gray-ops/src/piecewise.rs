//! Piecewise-linear contrast transform.
//!
//! A 3-segment linear remapping defined by two breakpoints on the input
//! axis (r1 < r2) and two on the output axis (s1, s2):
//!
//! ```text
//! [0, r1]    -> linear from (0, 0)   to (r1, s1)
//! (r1, r2]   -> linear from (r1, s1) to (r2, s2)
//! (r2, 255]  -> linear from (r2, s2) to (255, 255)
//! ```
//!
//! With s1 < r1 and s2 > r2 this stretches contrast in the middle band;
//! swapping the output breakpoints compresses it instead.

use gray_core::{saturate, Intensity, INTENSITY_MAX};

use crate::{OpsError, OpsResult};

/// Validated piecewise-linear transform parameters.
///
/// Construction via [`PiecewiseLinear::new`] enforces r1 < r2, so the
/// per-pixel mapping never has to re-check its denominators. The output
/// breakpoints s1 and s2 carry no ordering requirement relative to each
/// other or to r1/r2.
///
/// # Example
///
/// ```rust
/// use gray_ops::PiecewiseLinear;
///
/// let stretch = PiecewiseLinear::new(64, 192, 32, 224).unwrap();
/// assert_eq!(stretch.map(64), 32);
/// assert_eq!(stretch.map(192), 224);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PiecewiseLinear {
    r1: Intensity,
    r2: Intensity,
    s1: Intensity,
    s2: Intensity,
}

impl PiecewiseLinear {
    /// Creates a validated transform.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidBreakpoints`] unless r1 < r2. The
    /// [0, 255] range of all four parameters is enforced by their type.
    pub fn new(r1: Intensity, r2: Intensity, s1: Intensity, s2: Intensity) -> OpsResult<Self> {
        if r1 >= r2 {
            return Err(OpsError::InvalidBreakpoints { r1, r2 });
        }
        Ok(Self { r1, r2, s1, s2 })
    }

    /// Input breakpoints (r1, r2).
    pub fn input_breakpoints(&self) -> (Intensity, Intensity) {
        (self.r1, self.r2)
    }

    /// Output breakpoints (s1, s2).
    pub fn output_breakpoints(&self) -> (Intensity, Intensity) {
        (self.s1, self.s2)
    }

    /// Maps a single intensity through the three segments.
    ///
    /// Each segment multiplies before dividing (truncating division) to
    /// keep the fractional resolution, then saturates. The segments
    /// meet exactly: `map(r1) == s1` and `map(r2) == s2`.
    #[inline]
    pub fn map(&self, x: Intensity) -> Intensity {
        let max = INTENSITY_MAX as i32;
        let (r1, r2) = (self.r1 as i32, self.r2 as i32);
        let (s1, s2) = (self.s1 as i32, self.s2 as i32);
        let x = x as i32;

        if x <= r1 {
            // Degenerate first segment: only x == 0 lands here.
            if r1 == 0 {
                return 0;
            }
            saturate(x * s1 / r1)
        } else if x <= r2 {
            // r2 > r1 is guaranteed by construction.
            saturate(s1 + (s2 - s1) * (x - r1) / (r2 - r1))
        } else {
            // Degenerate last segment: unreachable when r2 == 255,
            // since no x exceeds it.
            saturate(s2 + (max - s2) * (x - r2) / (max - r2))
        }
    }
}

impl Default for PiecewiseLinear {
    /// The stock contrast stretch: (r1, r2, s1, s2) = (64, 192, 32, 224).
    fn default() -> Self {
        Self {
            r1: 64,
            r2: 192,
            s1: 32,
            s2: 224,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> PiecewiseLinear {
        PiecewiseLinear::new(64, 192, 32, 224).unwrap()
    }

    #[test]
    fn test_anchor_points() {
        let pw = stock();
        assert_eq!(pw.map(0), 0);
        assert_eq!(pw.map(64), 32);
        assert_eq!(pw.map(192), 224);
        assert_eq!(pw.map(255), 255);
    }

    #[test]
    fn test_default_matches_stock() {
        let pw = PiecewiseLinear::default();
        assert_eq!(pw, stock());
    }

    #[test]
    fn test_continuity_at_breakpoints() {
        // The last sample of each segment and the segment's defining
        // endpoint must agree exactly, not just within rounding.
        let pw = stock();
        // Segment A at its right edge vs. segment B's left endpoint.
        assert_eq!(pw.map(64), 32);
        // Segment B's first interior sample stays adjacent to s1.
        assert!(pw.map(65) >= 32 && pw.map(65) <= 34);
        // Segment B at its right edge vs. segment C's left endpoint.
        assert_eq!(pw.map(192), 224);
        assert!(pw.map(193) >= 224 && pw.map(193) <= 225);
    }

    #[test]
    fn test_monotonic_for_ordered_outputs() {
        let pw = stock();
        for x in 1..=255u8 {
            assert!(pw.map(x) >= pw.map(x - 1), "not monotonic at {x}");
        }
    }

    #[test]
    fn test_truncating_division_semantics() {
        // Segment A for (64, 192, 32, 224): y = x * 32 / 64 = x / 2,
        // truncated. Dividing first would floor x/64 and lose the
        // slope entirely.
        let pw = stock();
        assert_eq!(pw.map(1), 0);
        assert_eq!(pw.map(3), 1);
        assert_eq!(pw.map(63), 31);
    }

    #[test]
    fn test_compression_configuration() {
        // Output breakpoints may invert the band: maps [64, 192] onto
        // the narrow [200, 100] range (decreasing middle segment).
        let pw = PiecewiseLinear::new(64, 192, 200, 100).unwrap();
        assert_eq!(pw.map(0), 0);
        assert_eq!(pw.map(64), 200);
        assert_eq!(pw.map(192), 100);
        assert_eq!(pw.map(255), 255);
    }

    #[test]
    fn test_degenerate_first_segment() {
        let pw = PiecewiseLinear::new(0, 128, 0, 255).unwrap();
        assert_eq!(pw.map(0), 0);
        // x = 1 falls in the middle segment immediately.
        assert_eq!(pw.map(1), 255 * 1 / 128);
    }

    #[test]
    fn test_degenerate_last_segment() {
        let pw = PiecewiseLinear::new(128, 255, 0, 255).unwrap();
        assert_eq!(pw.map(255), 255);
        assert_eq!(pw.map(254), ((254i32 - 128) * 255 / 127) as u8);
    }

    #[test]
    fn test_invalid_breakpoints_rejected() {
        assert!(matches!(
            PiecewiseLinear::new(128, 128, 0, 255),
            Err(OpsError::InvalidBreakpoints { r1: 128, r2: 128 })
        ));
        assert!(matches!(
            PiecewiseLinear::new(200, 100, 0, 255),
            Err(OpsError::InvalidBreakpoints { .. })
        ));
    }
}
