//! TIFF image format support
//!
//! Reads every gray sample format pixlab can hold, bilevel images with
//! either photometric interpretation, and 8 bit RGB. The decoder resolves
//! file byte order, so samples always come back in native order. Writing
//! covers the unsigned and float kinds plus RGB; 1 bit images are widened
//! to 8 bit black and white.

use std::io::{Read, Seek, Write};

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::{TiffEncoder, colortype};
use tiff::tags::{PhotometricInterpretation, Tag};

use pixlab_core::{Image, PixelData};

use crate::{IoError, IoResult};

/// Read a TIFF image
pub fn read_tiff<R: Read + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader)
        .map_err(|e| IoError::DecodeError(format!("TIFF decode error: {}", e)))?;
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| IoError::DecodeError(format!("TIFF dimensions error: {}", e)))?;
    let (width, height) = (width as usize, height as usize);
    let color_type = decoder
        .colortype()
        .map_err(|e| IoError::DecodeError(format!("TIFF color type error: {}", e)))?;
    let photometric = decoder
        .get_tag_u32(Tag::PhotometricInterpretation)
        .map(|v| v == PhotometricInterpretation::WhiteIsZero as u32)
        .unwrap_or(false);
    let result = decoder
        .read_image()
        .map_err(|e| IoError::DecodeError(format!("TIFF read error: {}", e)))?;

    let image = match (color_type, result) {
        (ColorType::Gray(1), DecodingResult::U8(data)) => {
            // Bilevel rows are packed 8 pixels per byte.
            let stride = width.div_ceil(8);
            let mut samples = Vec::with_capacity(width * height);
            for y in 0..height {
                for x in 0..width {
                    let bit = (data[y * stride + x / 8] >> (7 - (x % 8))) & 1 == 1;
                    samples.push(bit != photometric);
                }
            }
            Image::from_gray(width, height, samples)?
        }
        (ColorType::Gray(8), DecodingResult::U8(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(8), DecodingResult::I8(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(16), DecodingResult::U16(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(16), DecodingResult::I16(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(32), DecodingResult::U32(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(32), DecodingResult::I32(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(32), DecodingResult::F32(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(64), DecodingResult::U64(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(64), DecodingResult::I64(data)) => Image::from_gray(width, height, data)?,
        (ColorType::Gray(64), DecodingResult::F64(data)) => Image::from_gray(width, height, data)?,
        (ColorType::RGB(8), DecodingResult::U8(data)) => {
            Image::from_packed_rgb(width, height, data)?
        }
        (other, _) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported TIFF color type: {:?}",
                other
            )));
        }
    };
    Ok(image)
}

/// Write an image as TIFF
///
/// Bit images are written as 8 bit black and white. Signed kinds must be
/// converted first.
pub fn write_tiff<W: Write + Seek>(writer: W, im: &Image) -> IoResult<()> {
    let mut encoder = TiffEncoder::new(writer)
        .map_err(|e| IoError::EncodeError(format!("TIFF encoder error: {}", e)))?;
    let width = dim(im.width())?;
    let height = dim(im.height())?;

    let result = match im.data() {
        PixelData::Bit(v) => {
            let data: Vec<u8> = v.iter().map(|&b| if b { 255 } else { 0 }).collect();
            encoder.write_image::<colortype::Gray8>(width, height, &data)
        }
        PixelData::Byte(v) => encoder.write_image::<colortype::Gray8>(width, height, v),
        PixelData::UShort(v) => encoder.write_image::<colortype::Gray16>(width, height, v),
        PixelData::UInt(v) => encoder.write_image::<colortype::Gray32>(width, height, v),
        PixelData::ULong(v) => encoder.write_image::<colortype::Gray64>(width, height, v),
        PixelData::Float(v) => encoder.write_image::<colortype::Gray32Float>(width, height, v),
        PixelData::Double(v) => encoder.write_image::<colortype::Gray64Float>(width, height, v),
        PixelData::Rgb24(px) => {
            let data: Vec<u8> = px.iter().flatten().copied().collect();
            encoder.write_image::<colortype::RGB8>(width, height, &data)
        }
        _ => return Err(IoError::UnsupportedKind(im.kind())),
    };
    result.map_err(|e| IoError::EncodeError(format!("TIFF write error: {}", e)))?;
    Ok(())
}

fn dim(value: usize) -> IoResult<u32> {
    u32::try_from(value).map_err(|_| IoError::InvalidData("image too large for TIFF".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use pixlab_core::PixelKind;

    fn round_trip(im: &Image) -> Image {
        let mut buf = Cursor::new(Vec::new());
        write_tiff(&mut buf, im).unwrap();
        read_tiff(Cursor::new(buf.into_inner())).unwrap()
    }

    #[test]
    fn test_tiff_byte_round_trip() {
        let im = Image::from_gray(3, 2, vec![0u8, 1, 2, 253, 254, 255]).unwrap();
        assert_eq!(round_trip(&im), im);
    }

    #[test]
    fn test_tiff_ushort_round_trip() {
        let im = Image::from_gray(2, 2, vec![0u16, 700, 40000, 65535]).unwrap();
        assert_eq!(round_trip(&im), im);
    }

    #[test]
    fn test_tiff_wide_and_float_round_trips() {
        let im = Image::from_gray(2, 1, vec![0u32, u32::MAX]).unwrap();
        assert_eq!(round_trip(&im), im);
        let im = Image::from_gray(2, 1, vec![0u64, u64::MAX]).unwrap();
        assert_eq!(round_trip(&im), im);
        let im = Image::from_gray(3, 1, vec![-1.5f32, 0.0, 1024.25]).unwrap();
        assert_eq!(round_trip(&im), im);
        let im = Image::from_gray(2, 1, vec![f64::MIN_POSITIVE, 1e300]).unwrap();
        assert_eq!(round_trip(&im), im);
    }

    #[test]
    fn test_tiff_rgb_round_trip() {
        let im = Image::from_rgb(2, 2, vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]])
            .unwrap();
        assert_eq!(round_trip(&im), im);
    }

    #[test]
    fn test_tiff_bit_widens_to_byte() {
        let im = Image::from_gray(3, 1, vec![true, false, true]).unwrap();
        let back = round_trip(&im);
        assert_eq!(back.kind(), PixelKind::Byte);
        assert_eq!(back.data(), &PixelData::Byte(vec![255, 0, 255]));
    }

    #[test]
    fn test_tiff_rejects_signed_write() {
        let im = Image::from_gray(2, 1, vec![-5i16, 5]).unwrap();
        let mut buf = Cursor::new(Vec::new());
        assert!(matches!(
            write_tiff(&mut buf, &im),
            Err(IoError::UnsupportedKind(_))
        ));
    }
}
