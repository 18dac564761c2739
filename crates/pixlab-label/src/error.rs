//! Error types for label operations

use thiserror::Error;

use pixlab_core::PixelKind;

/// Errors that can occur during labeling operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    /// The pixel kind is not usable for this operation
    #[error("unsupported kind: expected {expected}, got {actual}")]
    UnsupportedKind {
        expected: &'static str,
        actual: PixelKind,
    },

    /// The image contains negative values and cannot hold labels
    #[error("label image contains negative values")]
    NegativeValues,

    /// The label count exceeds the widest unsigned kind
    #[error("label count {needed} exceeds the widest unsigned kind")]
    TooManyLabels { needed: u64 },
}

/// Result type for label operations
pub type LabelResult<T> = Result<T, LabelError>;
