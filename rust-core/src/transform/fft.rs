//! FFT engine using rustfft for complex signals of any length
//!
//! Mixed-radix, Rader and Bluestein plans are picked by the planner, so
//! prime and odd lengths are handled as well as powers of two.

use rustfft::{Fft, FftPlanner};
use num_complex::Complex64;
use std::sync::Arc;

use super::engine::{scale, EngineError, Normalization, TransformEngine};

/// Complex FFT engine for a fixed transform length
pub struct RustFftEngine {
    /// Transform length (number of complex samples)
    len: usize,

    /// Where the 1/n factor is applied
    normalization: Normalization,

    /// Forward FFT plan
    fft: Arc<dyn Fft<f64>>,

    /// Inverse FFT plan
    ifft: Arc<dyn Fft<f64>>,

    /// Scale applied after the forward transform
    forward_scale: f64,

    /// Scale applied after the inverse transform
    inverse_scale: f64,
}

impl RustFftEngine {
    /// Create new FFT engine with backward normalization
    ///
    /// # Arguments
    /// * `len` - Transform length, any value including 0
    pub fn new(len: usize) -> Self {
        Self::with_normalization(len, Normalization::default())
    }

    /// Create new FFT engine with an explicit normalization convention
    pub fn with_normalization(len: usize, normalization: Normalization) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(len);
        let ifft = planner.plan_fft_inverse(len);
        let (forward_scale, inverse_scale) = normalization.factors(len);

        log::debug!(
            "planned rustfft engine: len={}, normalization={:?}",
            len,
            normalization
        );

        Self {
            len,
            normalization,
            fft,
            ifft,
            forward_scale,
            inverse_scale,
        }
    }

    /// Get normalization convention
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn run(&self, plan: &dyn Fft<f64>, buffer: &mut [Complex64], factor: f64) -> Result<(), EngineError> {
        self.check_len(buffer)?;
        if buffer.is_empty() {
            return Ok(());
        }

        // Scratch lives on this call only, so &self stays reentrant
        let mut scratch = vec![Complex64::new(0.0, 0.0); plan.get_inplace_scratch_len()];
        plan.process_with_scratch(buffer, &mut scratch);
        scale(buffer, factor);
        Ok(())
    }
}

impl TransformEngine for RustFftEngine {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), EngineError> {
        self.run(self.fft.as_ref(), buffer, self.forward_scale)
    }

    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), EngineError> {
        self.run(self.ifft.as_ref(), buffer, self.inverse_scale)
    }
}

impl std::fmt::Debug for RustFftEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustFftEngine")
            .field("len", &self.len)
            .field("normalization", &self.normalization)
            .finish()
    }
}
