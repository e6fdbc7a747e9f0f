//! Error types for same-modem

use thiserror::Error;

/// Generation-context construction error types
#[derive(Error, Debug)]
pub enum ModemError {
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate { rate: f64 },

    #[error("core error: {0}")]
    Core(#[from] same_core::CoreError),

    #[error("frame error: {0}")]
    Frame(#[from] same_frame::FrameError),
}

/// Result type for same-modem operations
pub type Result<T> = std::result::Result<T, ModemError>;
