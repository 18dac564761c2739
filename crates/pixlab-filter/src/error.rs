//! Error types for filter operations

use thiserror::Error;

use pixlab_core::PixelKind;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    /// The pixel kind is not usable for this operation
    #[error("unsupported kind: expected {expected}, got {actual}")]
    UnsupportedKind {
        expected: &'static str,
        actual: PixelKind,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
