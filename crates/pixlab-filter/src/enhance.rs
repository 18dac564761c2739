//! Histogram matching
//!
//! Remaps pixel values so the image histogram approximates a target shape,
//! either flat or caller-supplied. The mapping is a 256-entry lookup table
//! chosen to minimize the distance between the cumulative target and
//! cumulative source histograms, with a half-bin tolerance that avoids
//! overshooting past a populated source bin.

use pixlab_core::{DEFAULT_BINS, Histogram, Image, PixelData, PixelKind, Sample};

use crate::error::{FilterError, FilterResult};

/// Number of target bins used when no target is given.
pub const DEFAULT_TARGET_BINS: usize = 64;

/// Equalize or match the histogram of an image.
///
/// With no arguments the image is equalized against a flat target of
/// [`DEFAULT_TARGET_BINS`] bins. Passing `nbins` changes the target bin
/// count; passing `hgram` matches against an arbitrary target shape
/// instead, scaled so its mass equals the pixel count. The two are mutually
/// exclusive.
///
/// Signed images are reinterpreted bit-for-bit as their unsigned
/// counterpart, mapped there, and reinterpreted back, so the full signed
/// range takes part in the matching. The output keeps the kind of the
/// input.
///
/// # Arguments
///
/// * `im` - Input gray image of any kind
/// * `nbins` - Number of flat target bins; at least 2
/// * `hgram` - Target histogram shape; at least 2 bins with positive mass
///
/// # Errors
///
/// Returns [`FilterError::UnsupportedKind`] for RGB images and
/// [`FilterError::InvalidParameters`] when both targets are given or either
/// is degenerate.
pub fn histeq(im: &Image, nbins: Option<usize>, hgram: Option<&Histogram>) -> FilterResult<Image> {
    if im.kind().is_rgb() {
        return Err(FilterError::UnsupportedKind {
            expected: "a gray kind",
            actual: im.kind(),
        });
    }
    let size = im.len() as f64;
    let cum_dst = target_cumulative(size, nbins, hgram)?;

    let working = to_unsigned_working(im)?;
    let (_, mx) = working.value_range();
    let h_src = working.histogram(DEFAULT_BINS)?;
    let lut = build_lut(&h_src, &cum_dst, size, mx);

    let mapped = match working.data() {
        PixelData::Bit(v) => apply_lut(v, &lut, mx),
        PixelData::Byte(v) => apply_lut(v, &lut, mx),
        PixelData::UShort(v) => apply_lut(v, &lut, mx),
        PixelData::UInt(v) => apply_lut(v, &lut, mx),
        PixelData::ULong(v) => apply_lut(v, &lut, mx),
        PixelData::Float(v) => apply_lut(v, &lut, mx),
        PixelData::Double(v) => apply_lut(v, &lut, mx),
        // to_unsigned_working leaves no signed buffers behind.
        other => {
            return Err(FilterError::UnsupportedKind {
                expected: "a gray kind",
                actual: other.native_kind(),
            });
        }
    };
    let data = from_unsigned_working(im.kind(), mapped);
    Ok(Image::from_parts(im.width(), im.height(), im.kind(), data)?)
}

/// Cumulative target histogram scaled to `size` total mass.
fn target_cumulative(
    size: f64,
    nbins: Option<usize>,
    hgram: Option<&Histogram>,
) -> FilterResult<Vec<f64>> {
    if nbins.is_some() && hgram.is_some() {
        return Err(FilterError::InvalidParameters(
            "nbins and hgram cannot both be given".into(),
        ));
    }
    if let Some(hgram) = hgram {
        if hgram.len() < 2 {
            return Err(FilterError::InvalidParameters(
                "hgram must have at least 2 bins".into(),
            ));
        }
        let total = hgram.sum();
        if total <= 0.0 {
            return Err(FilterError::InvalidParameters(
                "hgram must have positive mass".into(),
            ));
        }
        let scale = size / total;
        let mut cumulative = 0.0;
        return Ok(hgram
            .counts()
            .iter()
            .map(|&c| {
                cumulative += c * scale;
                cumulative
            })
            .collect());
    }
    let nbins = nbins.unwrap_or(DEFAULT_TARGET_BINS);
    if nbins < 2 {
        return Err(FilterError::InvalidParameters(
            "nbins must be at least 2".into(),
        ));
    }
    let step = size / nbins as f64;
    Ok((1..=nbins).map(|d| d as f64 * step).collect())
}

/// Choose the output value for each of the 256 source slots.
///
/// For slot `s` the target bin `d` minimizing
/// `cum_dst[d] - cum_src[s] + tol[s]` wins, where `tol` is half the source
/// count of the slot (zero at both ends). Entries more negative than a
/// rounding allowance are pushed to `size` so the search never moves mass
/// backwards. The winning bin index is then spread over the value range.
fn build_lut(h_src: &Histogram, cum_dst: &[f64], size: f64, mx: f64) -> [f64; DEFAULT_BINS] {
    let counts = h_src.counts();
    let cum_src = h_src.cumulative();
    let last = DEFAULT_BINS - 1;
    let allowance = -size * f64::EPSILON.sqrt();
    let spread = mx / (cum_dst.len() - 1) as f64;

    let mut lut = [0.0; DEFAULT_BINS];
    for (s, entry) in lut.iter_mut().enumerate() {
        let tol = if s == 0 || s == last {
            0.0
        } else {
            counts[s] / 2.0
        };
        let mut best = f64::INFINITY;
        let mut best_bin = 0usize;
        for (d, &cum) in cum_dst.iter().enumerate() {
            let mut err = cum - cum_src[s] + tol;
            if err < allowance {
                err = size;
            }
            if err < best {
                best = err;
                best_bin = d;
            }
        }
        *entry = (best_bin as f64 * spread).round_ties_even();
    }
    lut
}

/// Push every pixel through the lookup table.
///
/// Byte-range images index the table directly; anything else is scaled by
/// `255 / mx` first. Out-of-range and non-finite slots clamp instead of
/// wrapping.
fn apply_lut<W: Sample>(pixels: &[W], lut: &[f64; DEFAULT_BINS], mx: f64) -> PixelData {
    let last = (DEFAULT_BINS - 1) as f64;
    let samples = pixels
        .iter()
        .map(|p| {
            let v = p.to_f64();
            let slot = if mx == last {
                v
            } else {
                (v * last / mx).round_ties_even()
            };
            let slot = if slot.is_finite() {
                slot.clamp(0.0, last) as usize
            } else {
                0
            };
            W::from_f64(lut[slot])
        })
        .collect();
    W::wrap(samples)
}

/// Reinterpret signed buffers bit-for-bit as unsigned; other kinds pass
/// through unchanged.
fn to_unsigned_working(im: &Image) -> FilterResult<Image> {
    let data = match im.data() {
        PixelData::SByte(v) => PixelData::Byte(v.iter().map(|&x| x as u8).collect()),
        PixelData::Short(v) => PixelData::UShort(v.iter().map(|&x| x as u16).collect()),
        PixelData::Int(v) => PixelData::UInt(v.iter().map(|&x| x as u32).collect()),
        PixelData::Long(v) => PixelData::ULong(v.iter().map(|&x| x as u64).collect()),
        _ => return Ok(im.clone()),
    };
    let kind = data.native_kind();
    Ok(Image::from_parts(im.width(), im.height(), kind, data)?)
}

/// Undo [`to_unsigned_working`] so the result matches the original kind.
fn from_unsigned_working(kind: PixelKind, data: PixelData) -> PixelData {
    match (kind.native(), data) {
        (PixelKind::SByte, PixelData::Byte(v)) => {
            PixelData::SByte(v.into_iter().map(|x| x as i8).collect())
        }
        (PixelKind::Short, PixelData::UShort(v)) => {
            PixelData::Short(v.into_iter().map(|x| x as i16).collect())
        }
        (PixelKind::Int, PixelData::UInt(v)) => {
            PixelData::Int(v.into_iter().map(|x| x as i32).collect())
        }
        (PixelKind::Long, PixelData::ULong(v)) => {
            PixelData::Long(v.into_iter().map(|x| x as i64).collect())
        }
        (_, data) => data,
    }
}
