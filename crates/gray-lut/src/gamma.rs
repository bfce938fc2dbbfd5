//! Gamma lookup table construction and application.

use gray_core::{saturate, Intensity};

use crate::{LutError, LutResult};

/// A 256-entry gamma lookup table.
///
/// Stores the full power-law mapping `y = round(255 * (x/255)^g)` for
/// every possible input intensity, so applying gamma to a pixel is a
/// single array index.
///
/// # Rounding
///
/// The floating-point intermediate is rounded half away from zero
/// (`f64::round`), matching the convention the precomputed reference
/// tables in [`crate::tables`] were generated with.
///
/// # Example
///
/// ```rust
/// use gray_lut::GammaLut;
///
/// let lut = GammaLut::build(1.0 / 3.0).unwrap();
/// // gamma < 1 lightens midtones
/// assert!(lut.lookup(64) > 64);
/// ```
#[derive(Debug, Clone)]
pub struct GammaLut {
    table: [Intensity; 256],
}

impl GammaLut {
    /// Builds the lookup table for a power-law exponent.
    ///
    /// For each input x in [0, 255] the entry is
    /// `saturate(round(255 * (x/255)^gamma))`. The endpoints are exact
    /// for any valid gamma: entry 0 is 0 and entry 255 is 255.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::InvalidGamma`] if `gamma` is not finite or
    /// not strictly positive. A non-positive exponent has no meaning in
    /// this domain and must not silently produce a garbage table.
    pub fn build(gamma: f64) -> LutResult<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(LutError::InvalidGamma { gamma });
        }
        let mut table = [0u8; 256];
        for (x, entry) in table.iter_mut().enumerate() {
            let xn = x as f64 / 255.0;
            let y = (255.0 * xn.powf(gamma)).round();
            *entry = saturate(y as i32);
        }
        Ok(Self { table })
    }

    /// The identity table (γ = 1); every input maps to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; 256];
        for (x, entry) in table.iter_mut().enumerate() {
            *entry = x as Intensity;
        }
        Self { table }
    }

    /// Wraps an already computed table, e.g. one of the precomputed
    /// constants in [`crate::tables`].
    pub const fn from_table(table: [Intensity; 256]) -> Self {
        Self { table }
    }

    /// Maps a single intensity through the table.
    #[inline]
    pub fn lookup(&self, x: Intensity) -> Intensity {
        self.table[x as usize]
    }

    /// Returns the raw table.
    #[inline]
    pub fn as_table(&self) -> &[Intensity; 256] {
        &self.table
    }
}

impl From<[Intensity; 256]> for GammaLut {
    fn from(table: [Intensity; 256]) -> Self {
        Self { table }
    }
}
