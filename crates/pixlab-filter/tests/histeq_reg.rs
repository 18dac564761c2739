//! Histogram matching regression test
//!
//! Equalizes a dark-heavy image and checks the Kolmogorov distance to the
//! flat distribution actually shrinks, then matches a flat ramp against a
//! bright-heavy target and checks the mass moves up.
//!
//! Run with:
//! ```
//! cargo test -p pixlab-filter --test histeq_reg
//! ```

use pixlab_core::{DEFAULT_BINS, Histogram, Image};
use pixlab_filter::histeq;

/// Largest deviation between the image's cumulative distribution and the
/// flat one, both normalized to 1.
fn flat_distance(im: &Image) -> f64 {
    let hist = im.histogram(DEFAULT_BINS).unwrap();
    let size = im.len() as f64;
    let bins = hist.len() as f64;
    hist.cumulative()
        .iter()
        .enumerate()
        .map(|(s, &c)| (c / size - (s + 1) as f64 / bins).abs())
        .fold(0.0, f64::max)
}

#[test]
fn histeq_reg() {
    // Quadratic ramp: three quarters of the pixels sit in the dark half.
    let pixels: Vec<u8> = (0..256u32).map(|i| (i * i / 256) as u8).collect();
    let im = Image::from_gray(256, 1, pixels).unwrap();

    let before = flat_distance(&im);
    let out = histeq(&im, None, None).unwrap();
    let after = flat_distance(&out);

    assert!(before > 0.2, "input must start skewed, got {before}");
    assert!(
        after < before / 2.0,
        "equalization must flatten: {before} -> {after}"
    );

    // Matching a flat ramp against a bright-heavy target pushes the mean up.
    let ramp: Vec<u8> = (0..=255).collect();
    let im = Image::from_gray(256, 1, ramp).unwrap();
    let target = Histogram::from_counts((1..=8).map(f64::from).collect()).unwrap();
    let matched = histeq(&im, None, Some(&target)).unwrap();
    let mean: f64 =
        matched.to_f64_samples().unwrap().iter().sum::<f64>() / matched.len() as f64;
    assert!(mean > 150.0, "bright-heavy target, got mean {mean}");

    // Matching is idempotent in distribution: equalizing twice moves
    // nothing further.
    let once = histeq(&im, None, None).unwrap();
    let twice = histeq(&once, None, None).unwrap();
    let drift = flat_distance(&twice) - flat_distance(&once);
    assert!(drift.abs() < 0.02, "second pass drifted by {drift}");
}
