//! io_reg: file round trips through `imread` / `imsave`.
//!
//! Saves synthetic images to the system temp directory under every
//! enabled format, reads them back by magic number and compares.

use std::fs;
use std::path::PathBuf;

use pixlab_core::{Image, PixelKind};
use pixlab_io::{ImageFormat, detect_format, imread, imsave};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pixlab_io_reg_{}_{}", std::process::id(), name))
}

fn gradient_byte(width: usize, height: usize) -> Image {
    let data: Vec<u8> = (0..width * height)
        .map(|i| ((i * 255) / (width * height - 1)) as u8)
        .collect();
    Image::from_gray(width, height, data).unwrap()
}

#[cfg(feature = "png-format")]
#[test]
fn test_png_file_round_trip() {
    let path = temp_path("gradient.png");
    let im = gradient_byte(16, 16);

    imsave(&im, &path).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Png);

    let back = imread(&path).unwrap();
    assert_eq!(back, im);

    let _ = fs::remove_file(&path);
}

#[cfg(feature = "tiff-format")]
#[test]
fn test_tiff_float_file_round_trip() {
    let path = temp_path("depth.tif");
    let data = vec![0.0f32, -1.5, 0.25, 1e20, -1e-20, 3.25];
    let im = Image::from_gray(3, 2, data).unwrap();

    imsave(&im, &path).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Tiff);

    let back = imread(&path).unwrap();
    assert_eq!(back, im);

    let _ = fs::remove_file(&path);
}

#[cfg(feature = "jpeg")]
#[test]
fn test_jpeg_file_round_trip_is_close() {
    let path = temp_path("gradient.jpg");
    let im = gradient_byte(16, 16);

    imsave(&im, &path).unwrap();
    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Jpeg);

    let back = imread(&path).unwrap();
    assert_eq!(back.kind(), PixelKind::Byte);
    assert_eq!((back.width(), back.height()), (16, 16));
    let orig = im.to_f64_samples().unwrap();
    let lossy = back.to_f64_samples().unwrap();
    for (a, b) in orig.iter().zip(&lossy) {
        assert!((a - b).abs() <= 8.0, "jpeg drifted: {} vs {}", a, b);
    }

    let _ = fs::remove_file(&path);
}

#[cfg(feature = "tiff-format")]
#[test]
fn test_formats_detected_by_content_not_name() {
    // A TIFF stored with a .png name still reads as TIFF.
    let path = temp_path("mislabeled.png");
    let im = Image::from_gray(2, 2, vec![0u16, 1, 2, 65535]).unwrap();

    let tiff_path = temp_path("mislabeled.tif");
    imsave(&im, &tiff_path).unwrap();
    fs::rename(&tiff_path, &path).unwrap();

    assert_eq!(detect_format(&path).unwrap(), ImageFormat::Tiff);
    let back = imread(&path).unwrap();
    assert_eq!(back, im);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let path = temp_path("image.bmp");
    let im = gradient_byte(4, 4);

    assert!(imsave(&im, &path).is_err());
    assert!(!path.exists());
}
