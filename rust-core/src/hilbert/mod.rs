//! Analytic signal via the FFT-based Hilbert transform

pub mod error;
pub mod mask;
pub mod analyzer;
pub mod instantaneous;

pub use error::HilbertError;
pub use mask::spectral_mask;
pub use analyzer::{AnalyzerConfig, HilbertAnalyzer};
pub use instantaneous::{envelope_of, phase_of, unwrap_phase};
