//! Hilbert Analyzer - Analytic Signal Core
//!
//! FFT-based Hilbert transform for real signals of any length, with
//! instantaneous amplitude, phase and frequency, and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod transform;
pub mod hilbert;
pub mod batch;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use hilbert::{AnalyzerConfig, HilbertAnalyzer, HilbertError};
pub use transform::{EngineError, Normalization, RustFftEngine, TransformEngine};
