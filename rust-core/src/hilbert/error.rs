use thiserror::Error;

use crate::transform::EngineError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HilbertError {
    #[error("Input has {actual} samples, analyzer is built for {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Output buffer has {actual} samples, analyzer is built for {expected}")]
    OutputLengthMismatch { expected: usize, actual: usize },

    #[error("Sample rate must be finite and positive (got {0})")]
    InvalidSampleRate(f64),

    #[error("Unknown normalization \"{0}\" (expected backward, forward or ortho)")]
    UnknownNormalization(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
