//! Histograms of gray images.
//!
//! [`Histogram`] is a plain vector of bin counts with the few operations
//! the matching and equalization code needs: sums, running sums, and
//! bin-wise accumulation. [`Image::histogram`] bins an image over its
//! value range; [`stacked_histogram`] folds several images into one
//! histogram.

use std::ops::Index;

use crate::error::{Error, Result};
use crate::image::Image;

/// Customary bin count for image histograms.
pub const DEFAULT_BINS: usize = 256;

/// Binned sample counts, index 0 holding the lowest bin.
///
/// Counts are `f64` so rescaled target histograms keep their fractions;
/// integer counts stay exact well past any realistic pixel total.
/// Construction rejects empty, negative, and non-finite data, so every
/// value in hand is a usable histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<f64>,
}

impl Histogram {
    /// Wrap raw bin counts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when `counts` is empty or
    /// contains a negative or non-finite value.
    pub fn from_counts(counts: Vec<f64>) -> Result<Histogram> {
        if counts.is_empty() {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".into(),
            ));
        }
        if counts.iter().any(|&c| !c.is_finite() || c < 0.0) {
            return Err(Error::InvalidParameter(
                "histogram counts must be finite and non-negative".into(),
            ));
        }
        Ok(Histogram { counts })
    }

    /// All-zero histogram with `nbins` bins.
    pub fn zeros(nbins: usize) -> Result<Histogram> {
        if nbins == 0 {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".into(),
            ));
        }
        Ok(Histogram {
            counts: vec![0.0; nbins],
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[inline]
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Total count over all bins.
    pub fn sum(&self) -> f64 {
        self.counts.iter().sum()
    }

    /// Running sums, one per bin.
    pub fn cumulative(&self) -> Vec<f64> {
        let mut total = 0.0;
        self.counts
            .iter()
            .map(|&c| {
                total += c;
                total
            })
            .collect()
    }

    /// Add `other` into this histogram bin by bin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] when the bin counts differ.
    pub fn accumulate(&mut self, other: &Histogram) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::InvalidParameter(format!(
                "cannot accumulate a {}-bin histogram into a {}-bin histogram",
                other.len(),
                self.len()
            )));
        }
        for (dst, src) in self.counts.iter_mut().zip(&other.counts) {
            *dst += src;
        }
        Ok(())
    }
}

impl Index<usize> for Histogram {
    type Output = f64;

    #[inline]
    fn index(&self, bin: usize) -> &f64 {
        &self.counts[bin]
    }
}

impl Image {
    /// Histogram over `nbins` equal bins spanning `(min, max + 1)` of the
    /// image's value range.
    ///
    /// The extra unit keeps integer bins aligned, so a byte image binned
    /// at [`DEFAULT_BINS`] counts each intensity in its own bin. The
    /// span's upper edge falls in the last bin; values outside the span
    /// (`NaN` included) are not counted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedKind`] for RGB images and
    /// [`Error::InvalidParameter`] for a zero bin count.
    pub fn histogram(&self, nbins: usize) -> Result<Histogram> {
        if nbins == 0 {
            return Err(Error::InvalidParameter(
                "histogram needs at least one bin".into(),
            ));
        }
        let samples = self.to_f64_samples()?;
        let (mn, mx) = self.value_range();
        let lo = mn;
        let hi = mx + 1.0;
        let span = hi - lo;
        let mut counts = vec![0.0; nbins];
        for v in samples {
            if !(lo..=hi).contains(&v) {
                continue;
            }
            let mut bin = ((v - lo) / span * nbins as f64) as usize;
            if bin >= nbins {
                bin = nbins - 1;
            }
            counts[bin] += 1.0;
        }
        Ok(Histogram { counts })
    }
}

/// Bin-wise sum of the histograms of several images, each binned over its
/// own value range.
///
/// # Errors
///
/// Propagates [`Image::histogram`] failures for any image in the
/// sequence.
pub fn stacked_histogram<'a, I>(images: I, nbins: usize) -> Result<Histogram>
where
    I: IntoIterator<Item = &'a Image>,
{
    let mut total = Histogram::zeros(nbins)?;
    for im in images {
        total.accumulate(&im.histogram(nbins)?)?;
    }
    Ok(total)
}
