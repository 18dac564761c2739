//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header and
//! by file extension when writing.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{IoError, IoResult};

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];
}

/// A file format pixlab can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Tiff,
}

impl ImageFormat {
    /// Format implied by a file extension, case-insensitive.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            _ => Err(IoError::UnsupportedFormat(format!(
                "unrecognized extension: {}",
                path.as_ref().display()
            ))),
        }
    }

    /// Canonical file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Tiff => "tif",
        }
    }
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 4 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }
    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }
    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }
    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }
    Err(IoError::UnsupportedFormat(
        "unrecognized magic number".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png_magic() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg_magic() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_tiff_magic_both_orders() {
        assert_eq!(
            detect_format_from_bytes(&[0x49, 0x49, 0x2A, 0x00]).unwrap(),
            ImageFormat::Tiff
        );
        assert_eq!(
            detect_format_from_bytes(&[0x4D, 0x4D, 0x00, 0x2A]).unwrap(),
            ImageFormat::Tiff
        );
    }

    #[test]
    fn test_detect_rejects_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"BM\x00\x00"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"P5"),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ImageFormat::from_extension("out.PNG").unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            ImageFormat::from_extension("a/b/c.jpeg").unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            ImageFormat::from_extension("x.tif").unwrap(),
            ImageFormat::Tiff
        );
        assert!(ImageFormat::from_extension("noext").is_err());
    }

    #[test]
    fn test_extension_round_trips_through_from_extension() {
        for fmt in [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Tiff] {
            let name = format!("out.{}", fmt.extension());
            assert_eq!(ImageFormat::from_extension(name).unwrap(), fmt);
        }
    }
}
