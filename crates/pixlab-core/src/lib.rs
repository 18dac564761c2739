//! Pixlab Core - image containers and pixel-level utilities
//!
//! This crate provides the data structures shared by the pixlab
//! workspace:
//!
//! - [`Image`] / [`PixelData`] - the raster container and its typed
//!   pixel buffers
//! - [`PixelKind`] - element-type tags with their fixed value tables
//! - [`Rectangle`] - rectangular regions with inclusive bounds
//! - [`Histogram`] - binned sample counts
//! - [`Sample`] - scalar access for kind-generic inner loops
//!
//! together with the geometry and conversion helpers that operate on
//! them: foreground discovery, background fill, crop/pad/flip,
//! black-and-white thresholding, float rescaling, and histogram binning.

mod convert;
pub mod error;
mod geometry;
pub mod histogram;
pub mod image;
pub mod kind;
pub mod rect;
pub mod sample;

pub use error::{Error, Result};
pub use histogram::{DEFAULT_BINS, Histogram, stacked_histogram};
pub use image::{Image, PixelData};
pub use kind::PixelKind;
pub use rect::Rectangle;
pub use sample::Sample;
