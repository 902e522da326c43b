//! Error types for the fixnoise core.
//!
//! The noise math itself is total; these errors come from the boundaries
//! around it: parameter validation, frame construction, engine lookup and
//! seed files.

use thiserror::Error;

/// Errors produced by engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A flat buffer did not hold `width * height` values.
    #[error("buffer length mismatch: expected {expected} values, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// A parameter was present but outside its accepted range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// No engine is registered under the requested name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Reading or writing a seed file failed.
    #[error("I/O error: {0}")]
    Io(String),
}
