//! Foreground discovery, background fill, cropping, padding, flipping.
//!
//! The foreground of an image is the rectangular region left after
//! stripping solid background rows and columns from the edges. These
//! operations locate that region and cut, pad, or fill around it.

use crate::error::{Error, Result};
use crate::image::{Image, PixelData};
use crate::rect::Rectangle;
use crate::sample::Sample;

impl Image {
    /// Locate the foreground area.
    ///
    /// With `bg` given, rows and columns consisting entirely of that
    /// value are stripped from each edge. Without it, the background
    /// value is discovered from a solid top row or left column (then a
    /// solid bottom row or right column); if neither edge is solid the
    /// whole image is reported as foreground.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for RGB images; discovery
    /// compares scalar samples.
    pub fn foreground_area(&self, bg: Option<f64>) -> Result<Rectangle> {
        let samples = self.to_f64_samples()?;
        let w = self.width();
        let h = self.height();
        let row_solid =
            |row: usize, bg: f64| samples[row * w..(row + 1) * w].iter().all(|&v| v == bg);
        let col_solid = |col: usize, bg: f64| (0..h).all(|row| samples[row * w + col] == bg);

        let bg = match bg {
            Some(v) => v,
            None => {
                let first = samples[0];
                let last = samples[h * w - 1];
                if row_solid(0, first) || col_solid(0, first) {
                    first
                } else if row_solid(h - 1, last) || col_solid(w - 1, last) {
                    last
                } else {
                    return Ok(Rectangle::new_unchecked(0, 0, h - 1, w - 1));
                }
            }
        };

        let mut top = 0;
        let mut bottom = h - 1;
        let mut left = 0;
        let mut right = w - 1;
        while top < h - 1 && row_solid(top, bg) {
            top += 1;
        }
        while bottom > top && row_solid(bottom, bg) {
            bottom -= 1;
        }
        while left < w - 1 && col_solid(left, bg) {
            left += 1;
        }
        while right > left && col_solid(right, bg) {
            right -= 1;
        }
        Ok(Rectangle::new_unchecked(top, left, bottom, right))
    }

    /// Fill everything outside `rect` with `bg`, in place.
    ///
    /// `rect` defaults to the discovered foreground area. `bg` is rounded
    /// to the nearest representable sample value; on RGB images it is
    /// written into all three channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RectangleOutOfBounds`] when `rect` does not fit
    /// the image, and whatever [`Image::foreground_area`] returns when
    /// discovery is needed and fails.
    pub fn fill_background(&mut self, rect: Option<Rectangle>, bg: f64) -> Result<()> {
        let rect = self.resolve_rect(rect)?;
        let w = self.width();
        let h = self.height();
        match self.data_mut() {
            PixelData::Bit(v) => fill_border(v, w, h, &rect, bool::from_f64(bg)),
            PixelData::Byte(v) => fill_border(v, w, h, &rect, u8::from_f64(bg)),
            PixelData::SByte(v) => fill_border(v, w, h, &rect, i8::from_f64(bg)),
            PixelData::Short(v) => fill_border(v, w, h, &rect, i16::from_f64(bg)),
            PixelData::UShort(v) => fill_border(v, w, h, &rect, u16::from_f64(bg)),
            PixelData::Int(v) => fill_border(v, w, h, &rect, i32::from_f64(bg)),
            PixelData::UInt(v) => fill_border(v, w, h, &rect, u32::from_f64(bg)),
            PixelData::Long(v) => fill_border(v, w, h, &rect, i64::from_f64(bg)),
            PixelData::ULong(v) => fill_border(v, w, h, &rect, u64::from_f64(bg)),
            PixelData::Float(v) => fill_border(v, w, h, &rect, bg as f32),
            PixelData::Double(v) => fill_border(v, w, h, &rect, bg),
            PixelData::Rgb24(v) => {
                let b = u8::from_f64(bg);
                fill_border(v, w, h, &rect, [b, b, b]);
            }
        }
        Ok(())
    }

    /// Fill everything outside `rect` with a reflection of the adjacent
    /// foreground, in place.
    ///
    /// Each border strip is filled by mirroring about its foreground
    /// edge, top and left strips first. A strip must not be wider than
    /// the span between its edge and the opposite image border allows,
    /// which in practice means the foreground has to be at least as wide
    /// and tall as the background around it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when a border strip is too
    /// wide to mirror, and [`Error::RectangleOutOfBounds`] when `rect`
    /// does not fit the image.
    pub fn fill_background_mirrored(&mut self, rect: Option<Rectangle>) -> Result<()> {
        let rect = self.resolve_rect(rect)?;
        let w = self.width();
        let h = self.height();
        if 2 * rect.top > h || 2 * rect.left > w {
            return Err(Error::InvalidParameter(
                "mirrored border is taller or wider than the image allows".into(),
            ));
        }
        if (rect.bottom + 1 < h && 2 * rect.bottom + 2 < h)
            || (rect.right + 1 < w && 2 * rect.right + 2 < w)
        {
            return Err(Error::InvalidParameter(
                "mirrored border is taller or wider than the image allows".into(),
            ));
        }
        match self.data_mut() {
            PixelData::Bit(v) => mirror_border(v, w, h, &rect),
            PixelData::Byte(v) => mirror_border(v, w, h, &rect),
            PixelData::SByte(v) => mirror_border(v, w, h, &rect),
            PixelData::Short(v) => mirror_border(v, w, h, &rect),
            PixelData::UShort(v) => mirror_border(v, w, h, &rect),
            PixelData::Int(v) => mirror_border(v, w, h, &rect),
            PixelData::UInt(v) => mirror_border(v, w, h, &rect),
            PixelData::Long(v) => mirror_border(v, w, h, &rect),
            PixelData::ULong(v) => mirror_border(v, w, h, &rect),
            PixelData::Float(v) => mirror_border(v, w, h, &rect),
            PixelData::Double(v) => mirror_border(v, w, h, &rect),
            PixelData::Rgb24(v) => mirror_border(v, w, h, &rect),
        }
        Ok(())
    }

    /// Copy out the region covered by `rect`, inclusive of its bounds.
    /// `rect` defaults to the discovered foreground area.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RectangleOutOfBounds`] when `rect` does not fit
    /// the image, and whatever [`Image::foreground_area`] returns when
    /// discovery is needed and fails.
    pub fn crop(&self, rect: Option<Rectangle>) -> Result<Image> {
        let rect = self.resolve_rect(rect)?;
        let w = self.width();
        let data = match self.data() {
            PixelData::Bit(v) => PixelData::Bit(copy_rect(v, w, &rect)),
            PixelData::Byte(v) => PixelData::Byte(copy_rect(v, w, &rect)),
            PixelData::SByte(v) => PixelData::SByte(copy_rect(v, w, &rect)),
            PixelData::Short(v) => PixelData::Short(copy_rect(v, w, &rect)),
            PixelData::UShort(v) => PixelData::UShort(copy_rect(v, w, &rect)),
            PixelData::Int(v) => PixelData::Int(copy_rect(v, w, &rect)),
            PixelData::UInt(v) => PixelData::UInt(copy_rect(v, w, &rect)),
            PixelData::Long(v) => PixelData::Long(copy_rect(v, w, &rect)),
            PixelData::ULong(v) => PixelData::ULong(copy_rect(v, w, &rect)),
            PixelData::Float(v) => PixelData::Float(copy_rect(v, w, &rect)),
            PixelData::Double(v) => PixelData::Double(copy_rect(v, w, &rect)),
            PixelData::Rgb24(v) => PixelData::Rgb24(copy_rect(v, w, &rect)),
        };
        Ok(Image::from_parts_unchecked(
            rect.width() + 1,
            rect.height() + 1,
            self.kind(),
            data,
        ))
    }

    /// Surround the image with a zero-filled border of the given widths.
    pub fn pad(&self, top: usize, left: usize, bottom: usize, right: usize) -> Image {
        let w = self.width();
        let h = self.height();
        let new_w = w + left + right;
        let new_h = h + top + bottom;
        let data = match self.data() {
            PixelData::Bit(v) => PixelData::Bit(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Byte(v) => PixelData::Byte(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::SByte(v) => PixelData::SByte(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Short(v) => PixelData::Short(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::UShort(v) => PixelData::UShort(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Int(v) => PixelData::Int(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::UInt(v) => PixelData::UInt(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Long(v) => PixelData::Long(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::ULong(v) => PixelData::ULong(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Float(v) => PixelData::Float(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Double(v) => PixelData::Double(pad_plane(v, w, h, new_w, new_h, top, left)),
            PixelData::Rgb24(v) => PixelData::Rgb24(pad_plane(v, w, h, new_w, new_h, top, left)),
        };
        Image::from_parts_unchecked(new_w, new_h, self.kind(), data)
    }

    /// Top-to-bottom mirrored copy.
    pub fn flip_up_down(&self) -> Image {
        let w = self.width();
        let data = match self.data() {
            PixelData::Bit(v) => PixelData::Bit(flip_rows(v, w)),
            PixelData::Byte(v) => PixelData::Byte(flip_rows(v, w)),
            PixelData::SByte(v) => PixelData::SByte(flip_rows(v, w)),
            PixelData::Short(v) => PixelData::Short(flip_rows(v, w)),
            PixelData::UShort(v) => PixelData::UShort(flip_rows(v, w)),
            PixelData::Int(v) => PixelData::Int(flip_rows(v, w)),
            PixelData::UInt(v) => PixelData::UInt(flip_rows(v, w)),
            PixelData::Long(v) => PixelData::Long(flip_rows(v, w)),
            PixelData::ULong(v) => PixelData::ULong(flip_rows(v, w)),
            PixelData::Float(v) => PixelData::Float(flip_rows(v, w)),
            PixelData::Double(v) => PixelData::Double(flip_rows(v, w)),
            PixelData::Rgb24(v) => PixelData::Rgb24(flip_rows(v, w)),
        };
        Image::from_parts_unchecked(self.width(), self.height(), self.kind(), data)
    }

    fn resolve_rect(&self, rect: Option<Rectangle>) -> Result<Rectangle> {
        let rect = match rect {
            Some(r) => r,
            None => self.foreground_area(None)?,
        };
        if rect.top > rect.bottom
            || rect.left > rect.right
            || rect.bottom >= self.height()
            || rect.right >= self.width()
        {
            return Err(Error::RectangleOutOfBounds {
                rect,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(rect)
    }
}

fn fill_border<T: Copy>(v: &mut [T], w: usize, h: usize, rect: &Rectangle, bg: T) {
    for row in 0..rect.top {
        v[row * w..(row + 1) * w].fill(bg);
    }
    for row in rect.bottom + 1..h {
        v[row * w..(row + 1) * w].fill(bg);
    }
    for row in 0..h {
        let base = row * w;
        v[base..base + rect.left].fill(bg);
        v[base + rect.right + 1..base + w].fill(bg);
    }
}

fn mirror_border<T: Copy>(v: &mut [T], w: usize, h: usize, rect: &Rectangle) {
    // Strips are reflected in sequence, so the corner regions pick up the
    // already-mirrored rows from the pass before them.
    for row in 0..rect.top {
        let src = 2 * rect.top - 1 - row;
        for col in 0..w {
            v[row * w + col] = v[src * w + col];
        }
    }
    for row in 0..h {
        let base = row * w;
        for col in 0..rect.left {
            v[base + col] = v[base + 2 * rect.left - 1 - col];
        }
    }
    for row in rect.bottom + 1..h {
        let src = 2 * rect.bottom + 1 - row;
        for col in 0..w {
            v[row * w + col] = v[src * w + col];
        }
    }
    for row in 0..h {
        let base = row * w;
        for col in rect.right + 1..w {
            v[base + col] = v[base + 2 * rect.right + 1 - col];
        }
    }
}

fn copy_rect<T: Copy>(v: &[T], w: usize, rect: &Rectangle) -> Vec<T> {
    let mut out = Vec::with_capacity((rect.height() + 1) * (rect.width() + 1));
    for row in rect.rows() {
        let base = row * w;
        out.extend_from_slice(&v[base + rect.left..=base + rect.right]);
    }
    out
}

fn pad_plane<T: Copy + Default>(
    v: &[T],
    w: usize,
    h: usize,
    new_w: usize,
    new_h: usize,
    top: usize,
    left: usize,
) -> Vec<T> {
    let mut out = vec![T::default(); new_w * new_h];
    for row in 0..h {
        let dst = (row + top) * new_w + left;
        out[dst..dst + w].copy_from_slice(&v[row * w..(row + 1) * w]);
    }
    out
}

fn flip_rows<T: Copy>(v: &[T], w: usize) -> Vec<T> {
    let h = v.len() / w;
    let mut out = Vec::with_capacity(v.len());
    for row in (0..h).rev() {
        out.extend_from_slice(&v[row * w..(row + 1) * w]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::PixelKind;

    fn framed_image() -> Image {
        // 5x4, zero frame around a 3x2 foreground block of ones
        #[rustfmt::skip]
        let px: Vec<u8> = vec![
            0, 0, 0, 0, 0,
            0, 1, 1, 1, 0,
            0, 1, 1, 1, 0,
            0, 0, 0, 0, 0,
        ];
        Image::from_gray(5, 4, px).unwrap()
    }

    #[test]
    fn test_foreground_area_with_explicit_bg() {
        let im = framed_image();
        let r = im.foreground_area(Some(0.0)).unwrap();
        assert_eq!(r, Rectangle::new_unchecked(1, 1, 2, 3));
    }

    #[test]
    fn test_foreground_area_discovers_bg_from_edges() {
        let im = framed_image();
        let r = im.foreground_area(None).unwrap();
        assert_eq!(r, Rectangle::new_unchecked(1, 1, 2, 3));
    }

    #[test]
    fn test_foreground_area_without_solid_edge_returns_all() {
        #[rustfmt::skip]
        let px: Vec<u8> = vec![
            1, 2, 3,
            4, 5, 6,
            7, 8, 9,
        ];
        let im = Image::from_gray(3, 3, px).unwrap();
        let r = im.foreground_area(None).unwrap();
        assert_eq!(r, Rectangle::new_unchecked(0, 0, 2, 2));
    }

    #[test]
    fn test_foreground_area_uses_bottom_right_strip() {
        // Top row and left column are not solid; bottom row is.
        #[rustfmt::skip]
        let px: Vec<u8> = vec![
            1, 2, 9,
            4, 5, 9,
            9, 9, 9,
        ];
        let im = Image::from_gray(3, 3, px).unwrap();
        let r = im.foreground_area(None).unwrap();
        assert_eq!(r, Rectangle::new_unchecked(0, 0, 1, 1));
    }

    #[test]
    fn test_foreground_area_rejects_rgb() {
        let im = Image::from_rgb(2, 2, vec![[0; 3]; 4]).unwrap();
        assert!(im.foreground_area(None).is_err());
    }

    #[test]
    fn test_crop_defaults_to_foreground() {
        let im = framed_image();
        let cropped = im.crop(None).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (3, 2));
        assert_eq!(cropped.data(), &PixelData::Byte(vec![1; 6]));
        assert_eq!(cropped.kind(), PixelKind::Byte);
    }

    #[test]
    fn test_crop_bounds_are_inclusive() {
        #[rustfmt::skip]
        let px: Vec<u16> = vec![
            1, 2, 3,
            4, 5, 6,
            7, 8, 9,
        ];
        let im = Image::from_gray(3, 3, px).unwrap();
        let r = Rectangle::new(0, 1, 1, 2).unwrap();
        let cropped = im.crop(Some(r)).unwrap();
        assert_eq!(cropped.data(), &PixelData::UShort(vec![2, 3, 5, 6]));
    }

    #[test]
    fn test_crop_rejects_out_of_bounds_rect() {
        let im = framed_image();
        let r = Rectangle::new(0, 0, 4, 2).unwrap();
        assert!(matches!(
            im.crop(Some(r)),
            Err(Error::RectangleOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_fill_background_constant() {
        let mut im = Image::from_gray(3, 3, vec![7u8; 9]).unwrap();
        let r = Rectangle::new(1, 1, 1, 1).unwrap();
        im.fill_background(Some(r), 2.0).unwrap();
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            2, 2, 2,
            2, 7, 2,
            2, 2, 2,
        ];
        assert_eq!(im.data(), &PixelData::Byte(expected));
    }

    #[test]
    fn test_fill_background_mirrored_columns() {
        // Foreground columns 2..=3; borders reflect about the edges.
        let mut im = Image::from_gray(5, 1, vec![10u8, 20, 30, 40, 50]).unwrap();
        let r = Rectangle::new(0, 2, 0, 3).unwrap();
        im.fill_background_mirrored(Some(r)).unwrap();
        assert_eq!(im.data(), &PixelData::Byte(vec![40, 30, 30, 40, 40]));
    }

    #[test]
    fn test_fill_background_mirrored_rows() {
        let mut im = Image::from_gray(1, 4, vec![10u8, 20, 30, 40]).unwrap();
        let r = Rectangle::new(1, 0, 2, 0).unwrap();
        im.fill_background_mirrored(Some(r)).unwrap();
        assert_eq!(im.data(), &PixelData::Byte(vec![20, 20, 30, 30]));
    }

    #[test]
    fn test_fill_background_mirrored_rejects_thin_foreground() {
        let mut im = Image::from_gray(7, 1, vec![0u8; 7]).unwrap();
        // Two foreground columns cannot mirror into a four-column border.
        let r = Rectangle::new(0, 4, 0, 5).unwrap();
        assert!(matches!(
            im.fill_background_mirrored(Some(r)),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_pad_offsets_and_zero_fill() {
        let im = Image::from_gray(2, 1, vec![3u8, 4]).unwrap();
        let padded = im.pad(1, 2, 0, 1);
        assert_eq!((padded.width(), padded.height()), (5, 2));
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0, 0, 0, 0, 0,
            0, 0, 3, 4, 0,
        ];
        assert_eq!(padded.data(), &PixelData::Byte(expected));
    }

    #[test]
    fn test_flip_up_down_reverses_rows() {
        #[rustfmt::skip]
        let px: Vec<i16> = vec![
            1, 2,
            3, 4,
            5, 6,
        ];
        let im = Image::from_gray(2, 3, px).unwrap();
        let flipped = im.flip_up_down();
        #[rustfmt::skip]
        let expected: Vec<i16> = vec![
            5, 6,
            3, 4,
            1, 2,
        ];
        assert_eq!(flipped.data(), &PixelData::Short(expected));
        assert_eq!(flipped.kind(), PixelKind::Short);
    }

    #[test]
    fn test_flip_rgb() {
        let im = Image::from_rgb(1, 2, vec![[1, 2, 3], [4, 5, 6]]).unwrap();
        let flipped = im.flip_up_down();
        assert_eq!(
            flipped.data(),
            &PixelData::Rgb24(vec![[4, 5, 6], [1, 2, 3]])
        );
    }
}
