//! Transform engine contract

use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Transform buffer has {actual} samples, engine is sized for {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("Transform failed: {0}")]
    Failed(String),
}

/// Where the `1/n` factor of a forward/inverse pair is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Forward unscaled, inverse scaled by `1/n`
    #[default]
    Backward,
    /// Forward scaled by `1/n`, inverse unscaled
    Forward,
    /// Both directions scaled by `1/sqrt(n)`
    Ortho,
}

impl Normalization {
    /// Scale factors `(forward, inverse)` for a transform of length `len`.
    ///
    /// Their product is always `1/len`, so forward followed by inverse is the
    /// identity. Length 0 has nothing to scale and returns `(1.0, 1.0)`.
    pub fn factors(self, len: usize) -> (f64, f64) {
        if len == 0 {
            return (1.0, 1.0);
        }
        let n = len as f64;
        match self {
            Normalization::Backward => (1.0, 1.0 / n),
            Normalization::Forward => (1.0 / n, 1.0),
            Normalization::Ortho => {
                let s = 1.0 / n.sqrt();
                (s, s)
            }
        }
    }

    /// Parse a numpy-style name ("backward", "forward", "ortho")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "backward" => Some(Normalization::Backward),
            "forward" => Some(Normalization::Forward),
            "ortho" => Some(Normalization::Ortho),
            _ => None,
        }
    }
}

/// In-place complex DFT of a fixed length.
///
/// Implementations must accept any length (not only powers of two) and their
/// `forward` and `inverse` must compose to the identity. Both take `&self`:
/// any scratch space is local to the call so one engine can serve several
/// threads at once.
pub trait TransformEngine: Send + Sync {
    /// Number of complex samples the engine transforms
    fn len(&self) -> usize;

    /// True for zero-length engines
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forward transform, `X[k] = sum x[m] e^{-2πikm/n}` (times the forward scale)
    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), EngineError>;

    /// Inverse transform, `x[m] = sum X[k] e^{+2πikm/n}` (times the inverse scale)
    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), EngineError>;

    /// Reject buffers that don't match the engine length
    fn check_len(&self, buffer: &[Complex64]) -> Result<(), EngineError> {
        if buffer.len() != self.len() {
            return Err(EngineError::BufferLength {
                expected: self.len(),
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}

/// Multiply every sample by `factor`, skipping the no-op case
pub(crate) fn scale(buffer: &mut [Complex64], factor: f64) {
    if factor != 1.0 {
        for c in buffer.iter_mut() {
            *c *= factor;
        }
    }
}
