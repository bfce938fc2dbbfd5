//! Integration tests for the grayscale point-transform crates.
//!
//! These tests verify the interaction between `gray-core`, `gray-lut`
//! and `gray-ops`: full pipeline runs, agreement between the LUT
//! builder and the precomputed tables, and the independence of output
//! samples end to end.
