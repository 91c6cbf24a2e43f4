//! Error types for SeisTrace core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in SeisTrace core operations.
///
/// Sorting and healing are best-effort over whatever segments they are
/// given: malformed segment metadata, irregular sample rates, and
/// incompatible buffers make a pair ineligible for merging but never fail
/// the operation. The only fatal condition is an unusable group handle,
/// which boundary adapters (FFI and similar) can surface; the safe Rust
/// API takes the group by `&mut` reference and cannot produce it.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The trace group handle is invalid or absent.
    #[error("invalid trace group: {message}")]
    InvalidGroup {
        /// Description of why the group is unusable.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid group error.
    ///
    /// Nothing in the safe API constructs this: groups are passed by
    /// `&mut` reference, so an unusable handle cannot arise here. The
    /// constructor exists for boundary adapters (FFI and similar) that
    /// hold groups behind nullable handles and need to surface that
    /// condition in this crate's taxonomy.
    pub fn invalid_group(message: impl Into<String>) -> Self {
        Self::InvalidGroup {
            message: message.into(),
        }
    }
}
