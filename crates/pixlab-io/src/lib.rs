//! pixlab-io - Image file I/O
//!
//! Reads and writes [`Image`]s in the common raster formats:
//!
//! - PNG: 1, 8 and 16 bit gray plus RGB
//! - TIFF: all gray sample formats plus RGB
//! - JPEG: 8 bit gray plus RGB, lossy
//!
//! [`imread`] detects the format from the file contents, [`imsave`] picks
//! it from the file extension. Format support is feature-gated; all three
//! are on by default.
//!
//! # Examples
//!
//! ```no_run
//! use pixlab_io::{imread, imsave};
//!
//! let im = imread("scan.png")?;
//! imsave(&im, "scan.tif")?;
//! # Ok::<(), pixlab_io::IoError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use pixlab_core::Image;

pub mod error;
pub mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "tiff-format")]
pub mod tiff;

// Re-export format detection
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

// Re-export error types
pub use error::{IoError, IoResult};

/// Read an image from a file, detecting the format from its contents.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when the magic number is not
/// recognized or support for the format is not enabled.
pub fn imread<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    match format::detect_format(&path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(BufReader::new(File::open(path)?)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(BufReader::new(File::open(path)?)),
        #[cfg(feature = "tiff-format")]
        ImageFormat::Tiff => tiff::read_tiff(BufReader::new(File::open(path)?)),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "support for {:?} files is not enabled",
            other
        ))),
    }
}

/// Write an image to a file, picking the format from the extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] when the extension is not
/// recognized, support for the format is not enabled, or the pixel kind
/// cannot be stored in that format.
pub fn imsave<P: AsRef<Path>>(im: &Image, path: P) -> IoResult<()> {
    match ImageFormat::from_extension(&path)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(BufWriter::new(File::create(path)?), im),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(
            BufWriter::new(File::create(path)?),
            im,
            jpeg::DEFAULT_JPEG_QUALITY,
        ),
        #[cfg(feature = "tiff-format")]
        ImageFormat::Tiff => tiff::write_tiff(BufWriter::new(File::create(path)?), im),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "support for {:?} files is not enabled",
            other
        ))),
    }
}
