//! Error types for point operations.

use thiserror::Error;

/// Error type for point operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Piecewise-linear breakpoints are not strictly ordered.
    #[error("invalid breakpoints: r1 ({r1}) must be strictly less than r2 ({r2})")]
    InvalidBreakpoints {
        /// Lower input breakpoint.
        r1: u8,
        /// Upper input breakpoint.
        r2: u8,
    },

    /// Source and destination buffers have different lengths.
    #[error("size mismatch: source has {src} samples, destination has {dst}")]
    SizeMismatch {
        /// Source buffer length.
        src: usize,
        /// Destination buffer length.
        dst: usize,
    },

    /// LUT construction failed (invalid gamma exponent).
    #[error(transparent)]
    Lut(#[from] gray_lut::LutError),
}

/// Result type for point operations.
pub type OpsResult<T> = Result<T, OpsError>;
