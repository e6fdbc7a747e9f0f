//! Error types for same-frame

use thiserror::Error;

/// Header descriptor / serialization error types
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("{field} must be exactly {expected} bytes, got {actual}")]
    FieldLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("too many location codes: {count} exceeds the maximum of {max}")]
    TooManyLocations { count: usize, max: usize },

    #[error("attention signal duration {duration}s is outside the caller-bounded range [{min}, {max}]")]
    AttnDurationOutOfRange { duration: u32, min: u32, max: u32 },

    #[error("core error: {0}")]
    Core(#[from] same_core::CoreError),
}

/// Result type for same-frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
