//! Discrete Fourier transform engines
//!
//! The Hilbert analyzer only talks to the [`TransformEngine`] trait, so any
//! arbitrary-length DFT implementation can be plugged in.

pub mod engine;
pub mod fft;
pub mod dft;

pub use engine::{EngineError, Normalization, TransformEngine};
pub use fft::RustFftEngine;
pub use dft::DirectDft;
