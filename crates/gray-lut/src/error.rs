//! LUT error types.

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur when building a lookup table.
#[derive(Debug, Error)]
pub enum LutError {
    /// Gamma exponent outside the valid domain (must be finite and > 0).
    #[error("invalid gamma exponent: {gamma} (must be finite and > 0)")]
    InvalidGamma {
        /// The rejected exponent.
        gamma: f64,
    },
}
