//! Error types for same-core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },

    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("FFT error: {msg}")]
    FftError { msg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for same-core operations
pub type Result<T> = std::result::Result<T, CoreError>;
