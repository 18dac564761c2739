//! Gaussian smoothing
//!
//! Separable Gaussian blur over all pixel kinds. The kernel radius follows
//! the usual four-sigma cutoff and borders reflect about the image edge.
//! Both passes accumulate in `f64` and the result is rounded back to the
//! input kind once at the end.

use pixlab_core::{Image, PixelData, Sample};

use crate::error::{FilterError, FilterResult};

/// Blur an image with a Gaussian of the given standard deviation.
///
/// The kernel covers `4 * sigma` pixels to each side. RGB images are
/// blurred one channel at a time; every other kind is smoothed as a single
/// plane and the output keeps the kind of the input. A `sigma` of zero
/// returns a copy.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] when `sigma` is negative or
/// not finite.
pub fn gauss_blur(im: &Image, sigma: f64) -> FilterResult<Image> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(FilterError::InvalidParameters(
            "sigma must be finite and non-negative".into(),
        ));
    }
    if sigma == 0.0 {
        return Ok(im.clone());
    }
    let kernel = gaussian_kernel(sigma);
    let (width, height) = (im.width(), im.height());
    let data = match im.data() {
        PixelData::Bit(v) => blur_plane(v, width, height, &kernel),
        PixelData::Byte(v) => blur_plane(v, width, height, &kernel),
        PixelData::SByte(v) => blur_plane(v, width, height, &kernel),
        PixelData::Short(v) => blur_plane(v, width, height, &kernel),
        PixelData::UShort(v) => blur_plane(v, width, height, &kernel),
        PixelData::Int(v) => blur_plane(v, width, height, &kernel),
        PixelData::UInt(v) => blur_plane(v, width, height, &kernel),
        PixelData::Long(v) => blur_plane(v, width, height, &kernel),
        PixelData::ULong(v) => blur_plane(v, width, height, &kernel),
        PixelData::Float(v) => blur_plane(v, width, height, &kernel),
        PixelData::Double(v) => blur_plane(v, width, height, &kernel),
        PixelData::Rgb24(px) => blur_rgb(px, width, height, &kernel),
    };
    Ok(Image::from_parts(width, height, im.kind(), data)?)
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as isize;
    let scale = 2.0 * sigma * sigma;
    let mut weights: Vec<f64> = (-radius..=radius)
        .map(|i| (-((i * i) as f64) / scale).exp())
        .collect();
    let total: f64 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

fn blur_plane<T: Sample>(pixels: &[T], width: usize, height: usize, kernel: &[f64]) -> PixelData {
    let plane: Vec<f64> = pixels.iter().map(|p| p.to_f64()).collect();
    let plane = convolve_rows(&plane, width, height, kernel);
    let plane = convolve_cols(&plane, width, height, kernel);
    T::wrap(plane.into_iter().map(T::from_f64).collect())
}

fn blur_rgb(pixels: &[[u8; 3]], width: usize, height: usize, kernel: &[f64]) -> PixelData {
    let mut channels = Vec::with_capacity(3);
    for c in 0..3 {
        let plane: Vec<f64> = pixels.iter().map(|p| p[c] as f64).collect();
        let plane = convolve_rows(&plane, width, height, kernel);
        let plane = convolve_cols(&plane, width, height, kernel);
        channels.push(plane);
    }
    let out = (0..pixels.len())
        .map(|i| {
            [
                u8::from_f64(channels[0][i]),
                u8::from_f64(channels[1][i]),
                u8::from_f64(channels[2][i]),
            ]
        })
        .collect();
    PixelData::Rgb24(out)
}

fn convolve_rows(plane: &[f64], width: usize, height: usize, kernel: &[f64]) -> Vec<f64> {
    let radius = (kernel.len() / 2) as isize;
    let mut out = Vec::with_capacity(plane.len());
    for row in 0..height {
        let line = &plane[row * width..(row + 1) * width];
        for col in 0..width {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let src = reflect(col as isize + k as isize - radius, width as isize);
                acc += w * line[src];
            }
            out.push(acc);
        }
    }
    out
}

fn convolve_cols(plane: &[f64], width: usize, height: usize, kernel: &[f64]) -> Vec<f64> {
    let radius = (kernel.len() / 2) as isize;
    let mut out = vec![0.0; plane.len()];
    for col in 0..width {
        for row in 0..height {
            let mut acc = 0.0;
            for (k, &w) in kernel.iter().enumerate() {
                let src = reflect(row as isize + k as isize - radius, height as isize);
                acc += w * plane[src * width + col];
            }
            out[row * width + col] = acc;
        }
    }
    out
}

/// Mirror an out-of-range index back into `0..n`, reflecting about the
/// array edge as often as needed.
fn reflect(mut i: isize, n: isize) -> usize {
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= n {
            i = 2 * n - 1 - i;
        } else {
            return i as usize;
        }
    }
}
