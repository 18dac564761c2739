//! Threshold and scale conversions between pixel kinds.

use crate::error::{Error, Result};
use crate::image::{Image, PixelData};
use crate::kind::PixelKind;

impl Image {
    /// Threshold to a black-and-white [`PixelKind::Bit`] image.
    ///
    /// With a positive `threshold`, pixels at or above it become white.
    /// Otherwise pixels below `-threshold` become white, so a threshold
    /// of zero turns non-negative data all black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for RGB images.
    pub fn bw(&self, threshold: f64) -> Result<Image> {
        let samples = self.to_f64_samples()?;
        let bits = if threshold > 0.0 {
            samples.iter().map(|&v| v >= threshold).collect()
        } else {
            samples.iter().map(|&v| v < -threshold).collect()
        };
        Ok(Image::from_parts_unchecked(
            self.width(),
            self.height(),
            PixelKind::Bit,
            PixelData::Bit(bits),
        ))
    }

    /// Linear rescale into a [`PixelKind::Float`] image.
    ///
    /// `in_scale` gives the input bounds mapped onto `out_scale`; it
    /// defaults to [`Image::value_range`]. Values outside `in_scale`
    /// extrapolate rather than clamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for RGB images and
    /// [`Error::InvalidParameter`] when either scale is not strictly
    /// increasing (a constant float image has a degenerate default
    /// `in_scale`).
    pub fn to_float(&self, in_scale: Option<(f64, f64)>, out_scale: (f64, f64)) -> Result<Image> {
        let samples = self.to_f64_samples()?;
        let (in_lo, in_hi) = in_scale.unwrap_or_else(|| self.value_range());
        if in_lo >= in_hi {
            return Err(Error::InvalidParameter(format!(
                "in_scale must be increasing, got ({in_lo}, {in_hi})"
            )));
        }
        let (out_lo, out_hi) = out_scale;
        if out_lo >= out_hi {
            return Err(Error::InvalidParameter(format!(
                "out_scale must be increasing, got ({out_lo}, {out_hi})"
            )));
        }
        let k = (out_hi - out_lo) / (in_hi - in_lo);
        let px = samples
            .iter()
            .map(|&v| ((v - in_lo) * k + out_lo) as f32)
            .collect();
        Ok(Image::from_parts_unchecked(
            self.width(),
            self.height(),
            PixelKind::Float,
            PixelData::Float(px),
        ))
    }
}
