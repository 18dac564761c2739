//! Error types for pixlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

use crate::kind::PixelKind;
use crate::rect::Rectangle;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Buffer length does not match the image dimensions
    #[error("buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Pixel kind tag does not match the buffer's scalar type
    #[error("kind {kind} cannot describe a {buffer} buffer")]
    KindMismatch { kind: PixelKind, buffer: PixelKind },

    /// Pixel kind not supported by this operation
    #[error("unsupported pixel kind: {0}")]
    UnsupportedKind(PixelKind),

    /// Rectangle extends past the image bounds
    #[error("rectangle {rect} exceeds image bounds {width}x{height}")]
    RectangleOutOfBounds {
        rect: Rectangle,
        width: usize,
        height: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
