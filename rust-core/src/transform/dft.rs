//! Direct O(n²) DFT
//!
//! Slow, but independent of any FFT factorisation. Useful as a reference
//! engine when checking other engines or the analyzer itself.

use num_complex::Complex64;
use std::f64::consts::PI;

use super::engine::{scale, EngineError, Normalization, TransformEngine};

/// Direct-summation DFT with precomputed twiddles
#[derive(Debug, Clone)]
pub struct DirectDft {
    len: usize,
    normalization: Normalization,
    /// `e^{-2πik/n}` for k in 0..n
    twiddles: Vec<Complex64>,
}

impl DirectDft {
    pub fn new(len: usize) -> Self {
        Self::with_normalization(len, Normalization::default())
    }

    pub fn with_normalization(len: usize, normalization: Normalization) -> Self {
        let twiddles = (0..len)
            .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / len as f64))
            .collect();

        Self {
            len,
            normalization,
            twiddles,
        }
    }

    fn transform(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), EngineError> {
        self.check_len(buffer)?;

        let n = self.len;
        let mut out = vec![Complex64::new(0.0, 0.0); n];
        for (k, acc) in out.iter_mut().enumerate() {
            for (m, &x) in buffer.iter().enumerate() {
                // k*m mod n keeps the twiddle index exact for large products
                let w = self.twiddles[(k * m) % n];
                *acc += x * if inverse { w.conj() } else { w };
            }
        }
        buffer.copy_from_slice(&out);

        let (forward_scale, inverse_scale) = self.normalization.factors(n);
        scale(buffer, if inverse { inverse_scale } else { forward_scale });
        Ok(())
    }
}

impl TransformEngine for DirectDft {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), EngineError> {
        self.transform(buffer, false)
    }

    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), EngineError> {
        self.transform(buffer, true)
    }
}
