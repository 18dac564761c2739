//! JPEG image format support
//!
//! Reads 8 bit grayscale and RGB JPEG images and writes them back with the
//! `jpeg-encoder` crate. JPEG is lossy, so values only survive a round trip
//! approximately.

use std::io::{Read, Write};

use jpeg_decoder::PixelFormat;

use pixlab_core::{Image, PixelData};

use crate::{IoError, IoResult};

/// Encoder quality used by [`imsave`](crate::imsave).
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Read a JPEG image
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG header info".to_string()))?;
    let width = info.width as usize;
    let height = info.height as usize;

    match info.pixel_format {
        PixelFormat::L8 => Ok(Image::from_gray(width, height, pixels)?),
        PixelFormat::RGB24 => Ok(Image::from_packed_rgb(width, height, pixels)?),
        other => Err(IoError::UnsupportedFormat(format!(
            "unsupported JPEG pixel format: {:?}",
            other
        ))),
    }
}

/// Write an image as JPEG
///
/// Only Byte and RGB images can be written; other kinds must be converted
/// first.
pub fn write_jpeg<W: Write>(mut writer: W, im: &Image, quality: u8) -> IoResult<()> {
    let (bytes, color) = match im.data() {
        PixelData::Byte(v) => (v.clone(), jpeg_encoder::ColorType::Luma),
        PixelData::Rgb24(px) => {
            let bytes = px.iter().flatten().copied().collect();
            (bytes, jpeg_encoder::ColorType::Rgb)
        }
        _ => return Err(IoError::UnsupportedKind(im.kind())),
    };
    let width = dim(im.width())?;
    let height = dim(im.height())?;

    let mut buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut buf, quality);
    encoder
        .encode(&bytes, width, height, color)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    writer.write_all(&buf)?;
    Ok(())
}

fn dim(value: usize) -> IoResult<u16> {
    u16::try_from(value).map_err(|_| IoError::InvalidData("image too large for JPEG".to_string()))
}
