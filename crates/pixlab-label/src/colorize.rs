//! Label visualization
//!
//! Paints label images with reproducible pseudo-random colors so label maps
//! can be inspected by eye.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use pixlab_core::{Image, PixelData};

use crate::error::{LabelError, LabelResult};

/// Render a label image as RGB with one color per label.
///
/// Labels are assigned colors in ascending label order from a generator
/// seeded with `seed`, so the same label set and seed always produce the
/// same palette. Label 0 stays black. Channels are drawn from `32..=255` to
/// keep every label visibly apart from the background.
///
/// # Errors
///
/// Returns [`LabelError::UnsupportedKind`] when the image does not hold an
/// unsigned kind.
pub fn colorize(im: &Image, seed: u64) -> LabelResult<Image> {
    let labels: Vec<u64> = match im.data() {
        PixelData::Bit(v) => v.iter().map(|&b| b as u64).collect(),
        PixelData::Byte(v) => v.iter().map(|&x| x as u64).collect(),
        PixelData::UShort(v) => v.iter().map(|&x| x as u64).collect(),
        PixelData::UInt(v) => v.iter().map(|&x| x as u64).collect(),
        PixelData::ULong(v) => v.clone(),
        _ => {
            return Err(LabelError::UnsupportedKind {
                expected: "an unsigned label kind",
                actual: im.kind(),
            });
        }
    };

    let mut distinct: Vec<u64> = labels.iter().copied().filter(|&l| l != 0).collect();
    distinct.sort_unstable();
    distinct.dedup();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut palette: HashMap<u64, [u8; 3]> = HashMap::with_capacity(distinct.len());
    for l in distinct {
        palette.insert(
            l,
            [
                rng.random_range(32..=255),
                rng.random_range(32..=255),
                rng.random_range(32..=255),
            ],
        );
    }

    let pixels = labels
        .iter()
        .map(|l| if *l == 0 { [0, 0, 0] } else { palette[l] })
        .collect();
    Ok(Image::from_rgb(im.width(), im.height(), pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixlab_core::PixelKind;

    #[test]
    fn test_colorize_background_stays_black() {
        let im = Image::from_gray(4, 1, vec![0u8, 1, 0, 2]).unwrap();
        let out = colorize(&im, 7).unwrap();
        let PixelData::Rgb24(px) = out.data() else {
            panic!("expected rgb output");
        };
        assert_eq!(px[0], [0, 0, 0]);
        assert_eq!(px[2], [0, 0, 0]);
        assert_ne!(px[1], [0, 0, 0]);
        assert_ne!(px[3], [0, 0, 0]);
    }

    #[test]
    fn test_colorize_same_label_same_color() {
        let im = Image::from_gray(4, 1, vec![5u16, 3, 5, 3]).unwrap();
        let out = colorize(&im, 1).unwrap();
        let PixelData::Rgb24(px) = out.data() else {
            panic!("expected rgb output");
        };
        assert_eq!(px[0], px[2]);
        assert_eq!(px[1], px[3]);
        assert_ne!(px[0], px[1]);
    }

    #[test]
    fn test_colorize_is_deterministic() {
        let im = Image::from_gray(3, 1, vec![1u8, 2, 3]).unwrap();
        let a = colorize(&im, 42).unwrap();
        let b = colorize(&im, 42).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_colorize_rejects_signed_kinds() {
        let im = Image::from_gray(2, 1, vec![0i32, 1]).unwrap();
        assert!(matches!(
            colorize(&im, 0),
            Err(LabelError::UnsupportedKind { .. })
        ));
        let rgb = Image::new(2, 2, PixelKind::Rgb24).unwrap();
        assert!(matches!(
            colorize(&rgb, 0),
            Err(LabelError::UnsupportedKind { .. })
        ));
    }
}
