//! The fixed transform battery over one source buffer.
//!
//! A [`Pipeline`] owns everything a run needs: the validated threshold
//! and piecewise-linear parameters and the two gamma tables. All
//! validation happens in [`Pipeline::new`]; once construction succeeds,
//! a run is a straight sequence of infallible passes. Every derived
//! buffer is computed independently from the same read-only source, so
//! no pass can observe another's output.

use gray_core::Intensity;
use gray_lut::{GammaLut, GAMMA_1_3, GAMMA_3};
use tracing::debug;

use crate::{map_vec, OpsResult, PiecewiseLinear, Threshold};

/// Sentinel stored in [`PipelineRun::done`] once all passes finished.
///
/// Consumers that poll a run for completion (a debugger memory view,
/// a display driver) compare against this marker.
pub const DONE_MARKER: u32 = 0xA5A5_A5A5;

/// Configuration for a [`Pipeline`].
///
/// Immutable once handed to [`Pipeline::new`]; the defaults carry the
/// stock parameters (threshold 128 to 0/255, stretch 64/192 to 32/224,
/// gamma 3 with its reciprocal).
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Threshold parameters for the binarized output.
    pub threshold: Threshold,
    /// Breakpoints for the contrast-stretch output.
    pub stretch: PiecewiseLinear,
    /// Exponent for the darkening gamma pass; the lightening pass uses
    /// its reciprocal.
    pub gamma: f64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            stretch: PiecewiseLinear::default(),
            gamma: 3.0,
        }
    }
}

/// A validated, ready-to-run transform battery.
///
/// # Example
///
/// ```rust
/// use gray_ops::{Pipeline, PipelineConfig};
///
/// let src: Vec<u8> = (0..=255).collect();
/// let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
/// let run = pipeline.run(&src);
/// assert!(run.is_complete());
/// assert_eq!(run.stretched[64], 32);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    threshold: Threshold,
    stretch: PiecewiseLinear,
    gamma_fwd: GammaLut,
    gamma_inv: GammaLut,
}

/// The five derived buffers of one pipeline run.
///
/// Each buffer has the source length and was written by exactly one
/// pass.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Inverted image, `255 - x`.
    pub negative: Vec<Intensity>,
    /// Binarized image.
    pub thresholded: Vec<Intensity>,
    /// Gamma-corrected image for the configured exponent.
    pub gamma_fwd: Vec<Intensity>,
    /// Gamma-corrected image for the reciprocal exponent.
    pub gamma_inv: Vec<Intensity>,
    /// Contrast-stretched image.
    pub stretched: Vec<Intensity>,
    /// Completion marker; equals [`DONE_MARKER`] after all five passes.
    pub done: u32,
}

impl PipelineRun {
    /// Whether all five passes finished.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.done == DONE_MARKER
    }

    /// Length shared by the source and every derived buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.negative.len()
    }

    /// Whether the run processed an empty source.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.negative.is_empty()
    }
}

impl Pipeline {
    /// Validates the configuration and builds both gamma tables.
    ///
    /// # Errors
    ///
    /// Propagates `LutError::InvalidGamma` for a non-positive or
    /// non-finite exponent. Breakpoint validation already happened when
    /// the [`PiecewiseLinear`] in the config was constructed. No pass
    /// runs with malformed parameters.
    pub fn new(config: PipelineConfig) -> OpsResult<Self> {
        let gamma_fwd = GammaLut::build(config.gamma)?;
        let gamma_inv = GammaLut::build(1.0 / config.gamma)?;
        Ok(Self {
            threshold: config.threshold,
            stretch: config.stretch,
            gamma_fwd,
            gamma_inv,
        })
    }

    /// Runs all five passes over `src`.
    ///
    /// The source is read-only; each output buffer is produced
    /// independently from it. Given a constructed pipeline nothing can
    /// fail mid-pass, so this returns the finished run directly with
    /// its completion marker set.
    pub fn run(&self, src: &[Intensity]) -> PipelineRun {
        debug!(len = src.len(), "running transform battery");

        let negative = map_vec(src, crate::negative);
        let thresholded = map_vec(src, |x| self.threshold.map(x));
        let gamma_fwd = map_vec(src, |x| self.gamma_fwd.lookup(x));
        let gamma_inv = map_vec(src, |x| self.gamma_inv.lookup(x));
        let stretched = map_vec(src, |x| self.stretch.map(x));

        debug!(len = src.len(), "transform battery complete");
        PipelineRun {
            negative,
            thresholded,
            gamma_fwd,
            gamma_inv,
            stretched,
            done: DONE_MARKER,
        }
    }
}

impl Default for Pipeline {
    /// The stock pipeline, using the precomputed γ=3 and γ=1/3 tables
    /// instead of rebuilding them.
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            stretch: PiecewiseLinear::default(),
            gamma_fwd: GammaLut::from_table(GAMMA_3),
            gamma_inv: GammaLut::from_table(GAMMA_1_3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use gray_lut::LutError;

    fn ramp() -> Vec<u8> {
        (0..=255).collect()
    }

    #[test]
    fn test_run_produces_equal_length_outputs() {
        let src = ramp();
        let run = Pipeline::new(PipelineConfig::default()).unwrap().run(&src);
        assert!(run.is_complete());
        assert_eq!(run.len(), src.len());
        for out in [
            &run.negative,
            &run.thresholded,
            &run.gamma_fwd,
            &run.gamma_inv,
            &run.stretched,
        ] {
            assert_eq!(out.len(), src.len());
        }
    }

    #[test]
    fn test_default_pipeline_matches_built_pipeline() {
        // The precomputed-table path and the builder path must agree.
        let src = ramp();
        let built = Pipeline::new(PipelineConfig::default()).unwrap().run(&src);
        let stock = Pipeline::default().run(&src);
        assert_eq!(built.gamma_fwd, stock.gamma_fwd);
        assert_eq!(built.gamma_inv, stock.gamma_inv);
    }

    #[test]
    fn test_spot_values() {
        let run = Pipeline::default().run(&ramp());
        assert_eq!(run.negative[0], 255);
        assert_eq!(run.negative[255], 0);
        assert_eq!(run.thresholded[127], 0);
        assert_eq!(run.thresholded[128], 255);
        assert_eq!(run.gamma_fwd[255], 255);
        assert_eq!(run.gamma_inv[1], 40); // round(255 * (1/255)^(1/3))
        assert_eq!(run.stretched[64], 32);
        assert_eq!(run.stretched[192], 224);
    }

    #[test]
    fn test_empty_source() {
        let run = Pipeline::default().run(&[]);
        assert!(run.is_complete());
        assert!(run.is_empty());
    }

    #[test]
    fn test_invalid_gamma_rejected_before_any_pass() {
        let config = PipelineConfig {
            gamma: -1.0,
            ..PipelineConfig::default()
        };
        assert!(matches!(
            Pipeline::new(config),
            Err(OpsError::Lut(LutError::InvalidGamma { .. }))
        ));
    }
}
