//! Image container and typed pixel buffers.

use crate::error::{Error, Result};
use crate::kind::PixelKind;
use crate::sample::Sample;

/// Typed pixel storage for an [`Image`].
///
/// Gray buffers hold one scalar per pixel in row-major order; the RGB
/// buffer holds byte triples. The big-endian kinds share the native
/// buffer of their scalar type, so there is one variant per scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    Bit(Vec<bool>),
    Byte(Vec<u8>),
    SByte(Vec<i8>),
    Short(Vec<i16>),
    UShort(Vec<u16>),
    Int(Vec<i32>),
    UInt(Vec<u32>),
    Long(Vec<i64>),
    ULong(Vec<u64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Rgb24(Vec<[u8; 3]>),
}

impl PixelData {
    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        match self {
            PixelData::Bit(v) => v.len(),
            PixelData::Byte(v) => v.len(),
            PixelData::SByte(v) => v.len(),
            PixelData::Short(v) => v.len(),
            PixelData::UShort(v) => v.len(),
            PixelData::Int(v) => v.len(),
            PixelData::UInt(v) => v.len(),
            PixelData::Long(v) => v.len(),
            PixelData::ULong(v) => v.len(),
            PixelData::Float(v) => v.len(),
            PixelData::Double(v) => v.len(),
            PixelData::Rgb24(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Native-order kind matching the buffer's scalar type.
    pub fn native_kind(&self) -> PixelKind {
        match self {
            PixelData::Bit(_) => PixelKind::Bit,
            PixelData::Byte(_) => PixelKind::Byte,
            PixelData::SByte(_) => PixelKind::SByte,
            PixelData::Short(_) => PixelKind::Short,
            PixelData::UShort(_) => PixelKind::UShort,
            PixelData::Int(_) => PixelKind::Int,
            PixelData::UInt(_) => PixelKind::UInt,
            PixelData::Long(_) => PixelKind::Long,
            PixelData::ULong(_) => PixelKind::ULong,
            PixelData::Float(_) => PixelKind::Float,
            PixelData::Double(_) => PixelKind::Double,
            PixelData::Rgb24(_) => PixelKind::Rgb24,
        }
    }

    fn zeros(kind: PixelKind, len: usize) -> PixelData {
        match kind {
            PixelKind::Bit => PixelData::Bit(vec![false; len]),
            PixelKind::Byte => PixelData::Byte(vec![0; len]),
            PixelKind::SByte => PixelData::SByte(vec![0; len]),
            PixelKind::Short | PixelKind::ShortBe => PixelData::Short(vec![0; len]),
            PixelKind::UShort | PixelKind::UShortBe => PixelData::UShort(vec![0; len]),
            PixelKind::Int | PixelKind::IntBe => PixelData::Int(vec![0; len]),
            PixelKind::UInt | PixelKind::UIntBe => PixelData::UInt(vec![0; len]),
            PixelKind::Long | PixelKind::LongBe => PixelData::Long(vec![0; len]),
            PixelKind::ULong | PixelKind::ULongBe => PixelData::ULong(vec![0; len]),
            PixelKind::Float => PixelData::Float(vec![0.0; len]),
            PixelKind::Double => PixelData::Double(vec![0.0; len]),
            PixelKind::Rgb24 => PixelData::Rgb24(vec![[0, 0, 0]; len]),
        }
    }
}

/// A 2-D raster image: dimensions, element kind, and pixel buffer.
///
/// Pixels are stored row-major; `(row, col)` maps to index
/// `row * width + col`. Construction validates that the buffer length
/// matches the dimensions and that the kind tag matches the buffer's
/// scalar type, so every `Image` in hand is well formed.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    kind: PixelKind,
    data: PixelData,
}

impl Image {
    /// Create a zero-filled image of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: usize, height: usize, kind: PixelKind) -> Result<Image> {
        check_dims(width, height)?;
        let data = PixelData::zeros(kind, width * height);
        Ok(Image {
            width,
            height,
            kind,
            data,
        })
    }

    /// Build an image from raw parts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero-sized dimensions,
    /// [`Error::KindMismatch`] when the kind tag does not describe the
    /// buffer's scalar type, and [`Error::BufferSizeMismatch`] when the
    /// buffer length is not `width * height`.
    pub fn from_parts(
        width: usize,
        height: usize,
        kind: PixelKind,
        data: PixelData,
    ) -> Result<Image> {
        check_dims(width, height)?;
        if kind.native() != data.native_kind() {
            return Err(Error::KindMismatch {
                kind,
                buffer: data.native_kind(),
            });
        }
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Image {
            width,
            height,
            kind,
            data,
        })
    }

    /// Internal constructor for buffers whose shape is correct by
    /// construction.
    pub(crate) fn from_parts_unchecked(
        width: usize,
        height: usize,
        kind: PixelKind,
        data: PixelData,
    ) -> Image {
        debug_assert_eq!(data.len(), width * height);
        debug_assert_eq!(kind.native(), data.native_kind());
        Image {
            width,
            height,
            kind,
            data,
        }
    }

    /// Build a gray image from scalar samples in row-major order. The
    /// kind is the scalar's native kind; use [`Image::with_kind`] to tag
    /// big-endian provenance afterwards.
    pub fn from_gray<T: Sample>(width: usize, height: usize, samples: Vec<T>) -> Result<Image> {
        Image::from_parts(width, height, T::KIND, T::wrap(samples))
    }

    /// Build an RGB image from row-major byte triples.
    pub fn from_rgb(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Result<Image> {
        Image::from_parts(width, height, PixelKind::Rgb24, PixelData::Rgb24(pixels))
    }

    /// Build an RGB image from packed bytes, three per pixel in `r,g,b`
    /// order. This accepts the flat `height x width x 3` layout that
    /// decoders produce.
    pub fn from_packed_rgb(width: usize, height: usize, bytes: Vec<u8>) -> Result<Image> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(Error::InvalidDimensions { width, height })?;
        if bytes.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Image::from_rgb(width, height, pixels)
    }

    /// Re-tag the image with a kind sharing the same scalar type, usually
    /// to record big-endian provenance. Sample values are not touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] when the new kind's scalar type
    /// differs from the buffer's.
    pub fn with_kind(self, kind: PixelKind) -> Result<Image> {
        if kind.native() != self.data.native_kind() {
            return Err(Error::KindMismatch {
                kind,
                buffer: self.data.native_kind(),
            });
        }
        Ok(Image { kind, ..self })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn kind(&self) -> PixelKind {
        self.kind
    }

    #[inline]
    pub fn data(&self) -> &PixelData {
        &self.data
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut PixelData {
        &mut self.data
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false: zero-sized dimensions are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Buffer index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Value range used for histogram binning and rescaling.
    ///
    /// Float images report their observed `(min, max)` when the data
    /// leaves the nominal `[0, 1]` intensity range, and the nominal range
    /// otherwise. Every other kind reports its fixed
    /// [`PixelKind::value_range`].
    pub fn value_range(&self) -> (f64, f64) {
        match &self.data {
            PixelData::Float(v) => float_range(v.iter().map(|&x| x as f64)),
            PixelData::Double(v) => float_range(v.iter().copied()),
            _ => self.kind.value_range(),
        }
    }

    /// Gray samples widened to `f64`, row-major.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for RGB images.
    pub fn to_f64_samples(&self) -> Result<Vec<f64>> {
        let samples = match &self.data {
            PixelData::Bit(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Byte(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::SByte(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Short(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::UShort(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Int(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::UInt(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Long(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::ULong(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Float(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Double(v) => v.iter().map(|&x| x.to_f64()).collect(),
            PixelData::Rgb24(_) => return Err(Error::UnsupportedKind(self.kind)),
        };
        Ok(samples)
    }
}

fn check_dims(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

fn float_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let mut mn = f64::INFINITY;
    let mut mx = f64::NEG_INFINITY;
    for v in values {
        mn = mn.min(v);
        mx = mx.max(v);
    }
    if mn.is_finite() && mx.is_finite() && (mn < 0.0 || mx > 1.0) {
        (mn, mx)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let im = Image::new(4, 3, PixelKind::Byte).unwrap();
        assert_eq!(im.len(), 12);
        assert_eq!(im.data(), &PixelData::Byte(vec![0; 12]));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Image::new(0, 5, PixelKind::Byte),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Image::new(5, 0, PixelKind::Float),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_parts_checks_buffer_length() {
        let err = Image::from_parts(3, 3, PixelKind::Byte, PixelData::Byte(vec![0; 8]));
        assert!(matches!(
            err,
            Err(Error::BufferSizeMismatch {
                expected: 9,
                actual: 8
            })
        ));
    }

    #[test]
    fn test_from_parts_checks_kind_agreement() {
        let err = Image::from_parts(2, 2, PixelKind::UShort, PixelData::Byte(vec![0; 4]));
        assert!(matches!(err, Err(Error::KindMismatch { .. })));
        // A big-endian tag over the matching native buffer is fine.
        let ok = Image::from_parts(2, 2, PixelKind::UShortBe, PixelData::UShort(vec![0; 4]));
        assert!(ok.is_ok());
    }

    #[test]
    fn test_with_kind_retags_without_touching_samples() {
        let im = Image::from_gray(2, 1, vec![258u16, 7]).unwrap();
        let be = im.with_kind(PixelKind::UShortBe).unwrap();
        assert_eq!(be.kind(), PixelKind::UShortBe);
        assert_eq!(be.data(), &PixelData::UShort(vec![258, 7]));
        assert!(be.with_kind(PixelKind::Int).is_err());
    }

    #[test]
    fn test_from_packed_rgb_groups_triples() {
        let im = Image::from_packed_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(im.kind(), PixelKind::Rgb24);
        assert_eq!(im.data(), &PixelData::Rgb24(vec![[1, 2, 3], [4, 5, 6]]));
        assert!(Image::from_packed_rgb(2, 1, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_value_range_float_is_data_driven_outside_unit() {
        let nominal = Image::from_gray(2, 2, vec![0.25f32, 0.5, 0.75, 1.0]).unwrap();
        assert_eq!(nominal.value_range(), (0.0, 1.0));

        let wide = Image::from_gray(2, 2, vec![0.5f32, 2.0, 1.0, 0.75]).unwrap();
        assert_eq!(wide.value_range(), (0.5, 2.0));

        let negative = Image::from_gray(2, 2, vec![-0.5f64, 0.5, 0.25, 1.0]).unwrap();
        assert_eq!(negative.value_range(), (-0.5, 1.0));
    }

    #[test]
    fn test_value_range_integer_uses_fixed_table() {
        let im = Image::from_gray(2, 2, vec![10i16, 20, 30, 40]).unwrap();
        assert_eq!(im.value_range(), (-32768.0, 32767.0));
    }

    #[test]
    fn test_to_f64_samples_rejects_rgb() {
        let im = Image::from_rgb(1, 1, vec![[1, 2, 3]]).unwrap();
        assert!(matches!(
            im.to_f64_samples(),
            Err(Error::UnsupportedKind(PixelKind::Rgb24))
        ));
    }
}
