//! pixlab-label - Connected components and label bookkeeping
//!
//! This crate provides the label-image operations for pixlab:
//!
//! - Connected component analysis (4-way and 8-way)
//! - Dense renumbering of label images with automatic kind narrowing
//! - Splitting of labels that cover disconnected regions
//! - Colorization of label images for inspection
//!
//! # Examples
//!
//! ```
//! use pixlab_core::PixelKind;
//! use pixlab_label::relabel;
//!
//! // One label covering two separate runs gets split apart.
//! let im = pixlab_core::Image::from_gray(5, 1, vec![7u8, 7, 0, 7, 7]).unwrap();
//! let (out, n) = relabel(&im).unwrap();
//! assert_eq!(n, 2);
//! assert_eq!(out.kind(), PixelKind::Byte);
//! ```

pub mod colorize;
pub mod conncomp;
pub mod error;
pub mod renumber;

// Re-export connected component types and functions
pub use conncomp::{Connectivity, label};

// Re-export renumbering functions
pub use renumber::{consecutively_number, relabel};

// Re-export colorization
pub use colorize::colorize;

// Re-export error types
pub use error::{LabelError, LabelResult};
