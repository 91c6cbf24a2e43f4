//! Error types for sample buffer operations.

use thiserror::Error;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// The two buffers cannot be spliced together.
    #[error("incompatible buffers: {message}")]
    Incompatible {
        /// Description of the incompatibility.
        message: String,
    },

    /// Raw data length is not a whole number of samples.
    #[error("misaligned sample data: {len} bytes is not a multiple of the {sample_size}-byte sample size")]
    Misaligned {
        /// Length of the raw data in bytes.
        len: usize,
        /// Size of one encoded sample in bytes.
        sample_size: usize,
    },
}

impl BufferError {
    /// Creates an incompatible-buffers error.
    pub fn incompatible(message: impl Into<String>) -> Self {
        Self::Incompatible {
            message: message.into(),
        }
    }
}
