//! Label renumbering
//!
//! Rewrites label images so the labels in use form the dense range `0..=n`
//! with 0 reserved for background, and stores the result in the narrowest
//! unsigned kind that can hold the largest label.

use std::cmp::Ordering;
use std::collections::VecDeque;

use pixlab_core::{Image, PixelData, PixelKind, Sample};

use crate::conncomp::{Connectivity, label_mask};
use crate::error::{LabelError, LabelResult};

/// Rewrite the pixel values of a label image into the dense range `0..=n`.
///
/// Distinct values are ranked in ascending order and every pixel is replaced
/// by the rank of its value, so value order is preserved. The value 0 always
/// maps to label 0 and is reserved for background even when no pixel carries
/// it. For RGB images each distinct color becomes one label, ranked by its
/// `(r, g, b)` triple, with black reserved as background.
///
/// Returns the renumbered image in the narrowest unsigned kind that holds
/// `n`, together with the largest label `n`.
///
/// # Errors
///
/// Returns [`LabelError::NegativeValues`] when a gray image contains values
/// below zero.
pub fn consecutively_number(im: &Image) -> LabelResult<(Image, u64)> {
    let (labels, n) = renumber_labels(im)?;
    let out = materialize(im.width(), im.height(), labels, n)?;
    Ok((out, n))
}

/// Renumber a label image and split labels that cover several disconnected
/// regions.
///
/// The image is first passed through [`consecutively_number`]. Each label is
/// then checked for 4-way connectivity; when a label covers `k > 1` separate
/// regions, the first region keeps the label and the remaining `k - 1`
/// regions receive fresh labels above every label handed out so far. Labels
/// born from a split are checked again, which is a no-op since each covers a
/// single region. The result uses the narrowest unsigned kind that holds the
/// final count.
///
/// # Errors
///
/// Returns [`LabelError::NegativeValues`] when a gray image contains values
/// below zero and [`LabelError::TooManyLabels`] when the split labels exceed
/// the widest unsigned kind.
pub fn relabel(im: &Image) -> LabelResult<(Image, u64)> {
    let (mut labels, mut n) = renumber_labels(im)?;
    let width = im.width();
    let height = im.height();
    let mut capacity = kind_capacity(narrow_kind(n)?);

    let mut queue: VecDeque<u64> = (1..=n).collect();
    while let Some(current) = queue.pop_front() {
        let mask: Vec<bool> = labels.iter().map(|&l| l == current).collect();
        let (regions, count) = label_mask(&mask, width, height, Connectivity::FourWay);
        if count <= 1 {
            continue;
        }
        let needed = n + count as u64 - 1;
        if needed > capacity {
            capacity = kind_capacity(narrow_kind(needed)?);
        }
        // Region 1 keeps the current label, regions 2..=count move to fresh
        // labels n+1, n+2, ...
        let base = n;
        for (l, &region) in labels.iter_mut().zip(&regions) {
            if region >= 2 {
                *l = base + region as u64 - 1;
            }
        }
        for _ in 2..=count {
            n += 1;
            queue.push_back(n);
        }
    }

    let out = materialize(width, height, labels, n)?;
    Ok((out, n))
}

/// Rank every pixel by its value. Shared by [`consecutively_number`] and
/// [`relabel`], which both work on the dense `u64` form before choosing an
/// output kind.
fn renumber_labels(im: &Image) -> LabelResult<(Vec<u64>, u64)> {
    match im.data() {
        PixelData::Bit(v) => rank_gray(v),
        PixelData::Byte(v) => rank_gray(v),
        PixelData::SByte(v) => rank_gray(v),
        PixelData::Short(v) => rank_gray(v),
        PixelData::UShort(v) => rank_gray(v),
        PixelData::Int(v) => rank_gray(v),
        PixelData::UInt(v) => rank_gray(v),
        PixelData::Long(v) => rank_gray(v),
        PixelData::ULong(v) => rank_gray(v),
        PixelData::Float(v) => rank_gray(v),
        PixelData::Double(v) => rank_gray(v),
        PixelData::Rgb24(px) => Ok(rank_rgb(px)),
    }
}

fn rank_gray<T: Sample>(pixels: &[T]) -> LabelResult<(Vec<u64>, u64)> {
    let mut values = pixels.to_vec();
    values.sort_by(rank_cmp);
    values.dedup_by(|a, b| rank_cmp(a, b) == Ordering::Equal);
    if values.first().is_some_and(|v| v.is_negative()) {
        return Err(LabelError::NegativeValues);
    }
    if values.first().map(|v| v.to_f64()) != Some(0.0) {
        values.insert(0, T::from_f64(0.0));
    }
    let n = (values.len() - 1) as u64;

    // Integer images whose values already are 0..=n need no lookup.
    let float = matches!(T::KIND, PixelKind::Float | PixelKind::Double);
    if !float && values[values.len() - 1].to_f64() == n as f64 {
        let labels = pixels.iter().map(|v| v.to_f64() as u64).collect();
        return Ok((labels, n));
    }

    let labels = pixels
        .iter()
        .map(|v| {
            let rank = match values.binary_search_by(|probe| rank_cmp(probe, v)) {
                Ok(i) | Err(i) => i,
            };
            rank as u64
        })
        .collect();
    Ok((labels, n))
}

/// Value order used for ranking. Integers use their natural order; floats
/// compare by value with both zeros merged and every `NaN` collapsed into a
/// single class above all numbers, so a stray `-0.0` still counts as
/// background.
fn rank_cmp<T: Sample>(a: &T, b: &T) -> Ordering {
    if matches!(T::KIND, PixelKind::Float | PixelKind::Double) {
        let (x, y) = (a.to_f64(), b.to_f64());
        return match (x.is_nan(), y.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        };
    }
    a.total_cmp(b)
}

fn rank_rgb(pixels: &[[u8; 3]]) -> (Vec<u64>, u64) {
    let mut values = pixels.to_vec();
    values.sort_unstable();
    values.dedup();
    if values.first() != Some(&[0, 0, 0]) {
        values.insert(0, [0, 0, 0]);
    }
    let n = (values.len() - 1) as u64;
    let labels = pixels
        .iter()
        .map(|p| {
            let rank = match values.binary_search(p) {
                Ok(i) | Err(i) => i,
            };
            rank as u64
        })
        .collect();
    (labels, n)
}

/// Narrowest unsigned kind whose label capacity covers `n`.
pub(crate) fn narrow_kind(n: u64) -> LabelResult<PixelKind> {
    for kind in PixelKind::LABEL_KINDS {
        if let Some(max) = kind.max_label() {
            if n <= max {
                return Ok(kind);
            }
        }
    }
    Err(LabelError::TooManyLabels { needed: n })
}

fn kind_capacity(kind: PixelKind) -> u64 {
    kind.max_label().unwrap_or(u64::MAX)
}

fn materialize(width: usize, height: usize, labels: Vec<u64>, n: u64) -> LabelResult<Image> {
    let data = match narrow_kind(n)? {
        PixelKind::Bit => PixelData::Bit(labels.iter().map(|&l| l != 0).collect()),
        PixelKind::Byte => PixelData::Byte(labels.iter().map(|&l| l as u8).collect()),
        PixelKind::UShort => PixelData::UShort(labels.iter().map(|&l| l as u16).collect()),
        PixelKind::UInt => PixelData::UInt(labels.iter().map(|&l| l as u32).collect()),
        _ => PixelData::ULong(labels),
    };
    let kind = data.native_kind();
    Ok(Image::from_parts(width, height, kind, data)?)
}
