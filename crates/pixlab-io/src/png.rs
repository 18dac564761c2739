//! PNG image format support
//!
//! Reads 1, 8 and 16 bit grayscale and 8 bit RGB images. 16 bit samples
//! arrive big-endian on the wire, so they decode to
//! [`PixelKind::UShortBe`].

use std::io::{BufRead, Seek, Write};

use png::{BitDepth, ColorType, Decoder, Encoder};

use pixlab_core::{Image, PixelData, PixelKind};

use crate::{IoError, IoResult};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width as usize;
    let height = info.height as usize;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;
    let line_size = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let image = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => {
            let mut samples = Vec::with_capacity(width * height);
            for y in 0..height {
                let row = &data[y * line_size..];
                for x in 0..width {
                    samples.push((row[x / 8] >> (7 - (x % 8))) & 1 == 1);
                }
            }
            Image::from_gray(width, height, samples)?
        }
        (ColorType::Grayscale, BitDepth::Eight) => {
            let mut samples = Vec::with_capacity(width * height);
            for y in 0..height {
                samples.extend_from_slice(&data[y * line_size..y * line_size + width]);
            }
            Image::from_gray(width, height, samples)?
        }
        (ColorType::Grayscale, BitDepth::Sixteen) => {
            let mut samples = Vec::with_capacity(width * height);
            for y in 0..height {
                let row = &data[y * line_size..];
                for x in 0..width {
                    samples.push(u16::from_be_bytes([row[x * 2], row[x * 2 + 1]]));
                }
            }
            Image::from_gray(width, height, samples)?.with_kind(PixelKind::UShortBe)?
        }
        (ColorType::Rgb, BitDepth::Eight) => {
            let mut bytes = Vec::with_capacity(width * height * 3);
            for y in 0..height {
                bytes.extend_from_slice(&data[y * line_size..y * line_size + width * 3]);
            }
            Image::from_packed_rgb(width, height, bytes)?
        }
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    Ok(image)
}

/// Write an image as PNG
///
/// Bit, Byte, UShort (either byte order) and RGB images can be written;
/// other kinds must be converted first.
pub fn write_png<W: Write>(writer: W, im: &Image) -> IoResult<()> {
    let width = dim(im.width())?;
    let height = dim(im.height())?;

    let (color, depth, bytes): (ColorType, BitDepth, Vec<u8>) = match im.data() {
        PixelData::Bit(v) => {
            let stride = im.width().div_ceil(8);
            let mut bytes = vec![0u8; stride * im.height()];
            for y in 0..im.height() {
                for x in 0..im.width() {
                    if v[y * im.width() + x] {
                        bytes[y * stride + x / 8] |= 1 << (7 - (x % 8));
                    }
                }
            }
            (ColorType::Grayscale, BitDepth::One, bytes)
        }
        PixelData::Byte(v) => (ColorType::Grayscale, BitDepth::Eight, v.clone()),
        PixelData::UShort(v) => {
            let bytes = v.iter().flat_map(|s| s.to_be_bytes()).collect();
            (ColorType::Grayscale, BitDepth::Sixteen, bytes)
        }
        PixelData::Rgb24(px) => {
            let bytes = px.iter().flatten().copied().collect();
            (ColorType::Rgb, BitDepth::Eight, bytes)
        }
        _ => return Err(IoError::UnsupportedKind(im.kind())),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color);
    encoder.set_depth(depth);
    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

fn dim(value: usize) -> IoResult<u32> {
    u32::try_from(value).map_err(|_| IoError::InvalidData("image too large for PNG".to_string()))
}
