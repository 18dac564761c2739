//! pixlab-filter - Pixel value remapping and smoothing
//!
//! This crate provides the value-domain filters for pixlab:
//!
//! - Histogram equalization and histogram matching against an arbitrary
//!   target shape
//! - Gaussian blur with reflecting borders
//!
//! # Examples
//!
//! ```
//! use pixlab_core::Image;
//! use pixlab_filter::histeq;
//!
//! // A constant image equalizes to the middle of the value range.
//! let im = Image::from_gray(4, 4, vec![200u8; 16]).unwrap();
//! let out = histeq(&im, None, None).unwrap();
//! assert_eq!(out.to_f64_samples().unwrap()[0], 125.0);
//! ```

pub mod blur;
pub mod enhance;
pub mod error;

// Re-export enhancement functions
pub use enhance::{DEFAULT_TARGET_BINS, histeq};

// Re-export smoothing functions
pub use blur::gauss_blur;

// Re-export error types
pub use error::{FilterError, FilterResult};
