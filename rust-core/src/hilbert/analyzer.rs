//! Hilbert analyzer
//!
//! Forward FFT, spectral mask, inverse FFT. The mask and the FFT plans are
//! built once per length and reused by every call.

use num_complex::Complex64;

use super::error::HilbertError;
use super::instantaneous::{envelope_of, frequency_from_phase, phase_of, unwrap_phase};
use super::mask::spectral_mask;
use crate::transform::{Normalization, RustFftEngine, TransformEngine};

/// Hilbert analyzer configuration
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Signal length (number of samples, any value including 0)
    pub length: usize,

    /// Normalization convention of the underlying FFT engine
    pub normalization: Normalization,
}

impl AnalyzerConfig {
    /// Configuration with the normalization given by name
    ///
    /// # Arguments
    /// * `length` - Signal length
    /// * `normalization` - "backward", "forward" or "ortho"
    pub fn with_normalization_name(
        length: usize,
        normalization: &str,
    ) -> Result<Self, HilbertError> {
        let normalization = Normalization::from_name(normalization)
            .ok_or_else(|| HilbertError::UnknownNormalization(normalization.to_string()))?;

        Ok(Self {
            length,
            normalization,
        })
    }
}

/// Computes analytic signals of a fixed length
///
/// Immutable after construction; a single analyzer can be shared between
/// threads and reused for any number of same-length signals.
#[derive(Debug)]
pub struct HilbertAnalyzer<E: TransformEngine = RustFftEngine> {
    /// Spectral weights, one per frequency bin
    mask: Vec<f64>,

    /// Forward/inverse DFT collaborator
    engine: E,
}

impl HilbertAnalyzer<RustFftEngine> {
    /// Create new analyzer backed by rustfft
    ///
    /// # Arguments
    /// * `length` - Number of samples per signal
    pub fn new(length: usize) -> Self {
        Self::from_config(&AnalyzerConfig {
            length,
            ..Default::default()
        })
    }

    /// Create analyzer from configuration
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::with_engine(RustFftEngine::with_normalization(
            config.length,
            config.normalization,
        ))
    }
}

impl<E: TransformEngine> HilbertAnalyzer<E> {
    /// Create analyzer around an existing engine; the length is the engine's
    pub fn with_engine(engine: E) -> Self {
        let mask = spectral_mask(engine.len());
        log::debug!("built Hilbert analyzer: len={}", engine.len());

        Self { mask, engine }
    }

    /// Get signal length
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    /// True when built for empty signals
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Get spectral mask
    pub fn mask(&self) -> &[f64] {
        &self.mask
    }

    /// Get underlying transform engine
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Compute the analytic signal of `input`
    ///
    /// `dst` is cleared and refilled; its allocation is reused when it has
    /// room for `len()` samples and grown otherwise. Pass `Vec::new()` when
    /// there is nothing to reuse.
    ///
    /// # Returns
    /// `input + i·H{input}` as a vector of `len()` samples
    pub fn analytic_signal(
        &self,
        mut dst: Vec<Complex64>,
        input: &[f64],
    ) -> Result<Vec<Complex64>, HilbertError> {
        self.check_input(input)?;

        dst.clear();
        dst.extend(input.iter().map(|&x| Complex64::new(x, 0.0)));
        self.apply(&mut dst)?;

        Ok(dst)
    }

    /// Compute the analytic signal into a caller-provided slice
    ///
    /// `output` must hold exactly `len()` samples. Its contents are
    /// unspecified if an error is returned.
    pub fn analytic_signal_into(
        &self,
        output: &mut [Complex64],
        input: &[f64],
    ) -> Result<(), HilbertError> {
        self.check_input(input)?;
        if output.len() != self.len() {
            return Err(HilbertError::OutputLengthMismatch {
                expected: self.len(),
                actual: output.len(),
            });
        }

        for (z, &x) in output.iter_mut().zip(input) {
            *z = Complex64::new(x, 0.0);
        }
        self.apply(output)
    }

    /// Compute the analytic signal into a freshly allocated vector
    pub fn analyze(&self, input: &[f64]) -> Result<Vec<Complex64>, HilbertError> {
        self.analytic_signal(Vec::with_capacity(self.len()), input)
    }

    /// Hilbert transform of `input` (imaginary part of the analytic signal)
    pub fn hilbert_transform(&self, input: &[f64]) -> Result<Vec<f64>, HilbertError> {
        Ok(self.analyze(input)?.iter().map(|z| z.im).collect())
    }

    /// Instantaneous amplitude (envelope) of `input`
    pub fn envelope(&self, input: &[f64]) -> Result<Vec<f64>, HilbertError> {
        Ok(envelope_of(&self.analyze(input)?))
    }

    /// Instantaneous phase of `input` in radians, range [-π, π]
    pub fn instantaneous_phase(&self, input: &[f64]) -> Result<Vec<f64>, HilbertError> {
        Ok(phase_of(&self.analyze(input)?))
    }

    /// Instantaneous phase with 2π discontinuities removed
    pub fn unwrapped_phase(&self, input: &[f64]) -> Result<Vec<f64>, HilbertError> {
        Ok(unwrap_phase(&self.instantaneous_phase(input)?))
    }

    /// Instantaneous frequency in Hz
    ///
    /// # Arguments
    /// * `input` - Real signal of `len()` samples
    /// * `sample_rate` - Sample rate in Hz
    ///
    /// # Returns
    /// `len() - 1` values (empty for signals shorter than two samples)
    pub fn instantaneous_frequency(
        &self,
        input: &[f64],
        sample_rate: f64,
    ) -> Result<Vec<f64>, HilbertError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(HilbertError::InvalidSampleRate(sample_rate));
        }
        let unwrapped = self.unwrapped_phase(input)?;
        Ok(frequency_from_phase(&unwrapped, sample_rate))
    }

    fn check_input(&self, input: &[f64]) -> Result<(), HilbertError> {
        if input.len() != self.len() {
            return Err(HilbertError::LengthMismatch {
                expected: self.len(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    /// Forward transform, mask, inverse transform, all in place
    fn apply(&self, buffer: &mut [Complex64]) -> Result<(), HilbertError> {
        if buffer.is_empty() {
            return Ok(());
        }
        log::trace!("analytic signal: len={}", buffer.len());

        self.engine.forward(buffer)?;
        for (bin, &weight) in buffer.iter_mut().zip(&self.mask) {
            *bin *= weight;
        }
        self.engine.inverse(buffer)?;

        Ok(())
    }
}
