//! pixlab - Pixel array utilities
//!
//! Image processing helpers built around a typed pixel array.
//!
//! # Overview
//!
//! pixlab groups its operations into a few small crates, re-exported
//! here under one roof:
//!
//! - Typed pixel arrays in the common scalar kinds, with histograms
//!   and kind conversions
//! - Label map renumbering, connected component validation and
//!   colorization
//! - Histogram matching and Gaussian smoothing
//! - Image file I/O (PNG, JPEG, TIFF)
//!
//! # Example
//!
//! ```
//! use pixlab::{Image, PixelKind};
//!
//! // Create a new 8-bit grayscale image
//! let im = Image::new(640, 480, PixelKind::Byte).unwrap();
//! assert_eq!(im.width(), 640);
//! assert_eq!(im.kind(), PixelKind::Byte);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixlab_filter as filter;
pub use pixlab_io as io;
pub use pixlab_label as label;
