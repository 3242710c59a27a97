//! Errors raised by the generator and its outer surfaces

use thiserror::Error;

/// Errors that can occur while constructing or drawing from a generator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PrngError {
    #[error("Invalid range: a ({a}) must be <= b ({b})")]
    InvalidRange { a: i64, b: i64 },

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
