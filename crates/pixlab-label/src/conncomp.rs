//! Connected component analysis
//!
//! Labels the connected regions formed by the nonzero pixels of an image
//! using a two-pass scan with union-find label resolution.

use pixlab_core::{Image, PixelData, PixelKind};

use crate::error::{LabelError, LabelResult};

/// Pixel connectivity used when collecting components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

/// Label the connected components of the nonzero pixels.
///
/// Returns a [`PixelKind::UInt`] image of the same size where the pixels of
/// each component carry a component number, together with the component
/// count. Components are numbered `1..=n` in the order their first pixel
/// appears in the raster scan and background stays 0.
///
/// # Arguments
///
/// * `im` - The input image; any nonzero pixel is foreground
/// * `connectivity` - Neighborhood used to join pixels
///
/// # Errors
///
/// Returns [`LabelError::UnsupportedKind`] for RGB images.
pub fn label(im: &Image, connectivity: Connectivity) -> LabelResult<(Image, u32)> {
    let mask = foreground_mask(im)?;
    let (labels, count) = label_mask(&mask, im.width(), im.height(), connectivity);
    let out = Image::from_parts(
        im.width(),
        im.height(),
        PixelKind::UInt,
        PixelData::UInt(labels),
    )?;
    Ok((out, count))
}

fn foreground_mask(im: &Image) -> LabelResult<Vec<bool>> {
    if im.kind().is_rgb() {
        return Err(LabelError::UnsupportedKind {
            expected: "a gray kind",
            actual: im.kind(),
        });
    }
    let samples = im.to_f64_samples()?;
    Ok(samples.iter().map(|&v| v != 0.0).collect())
}

/// Two-pass labeling over a foreground mask.
///
/// The first pass hands out provisional labels and records equivalences in a
/// union-find forest, the second pass resolves every pixel to its root and
/// renumbers roots in first-encounter order.
pub(crate) fn label_mask(
    mask: &[bool],
    width: usize,
    height: usize,
    connectivity: Connectivity,
) -> (Vec<u32>, u32) {
    let mut provisional = vec![0u32; mask.len()];
    // parent[0] is a placeholder so provisional labels can start at 1.
    let mut parent: Vec<u32> = vec![0];
    let mut next = 0u32;

    for row in 0..height {
        for col in 0..width {
            let i = row * width + col;
            if !mask[i] {
                continue;
            }
            let mut neighbors = [0u32; 4];
            let mut n = 0;
            if col > 0 && mask[i - 1] {
                neighbors[n] = provisional[i - 1];
                n += 1;
            }
            if row > 0 {
                let up = i - width;
                if mask[up] {
                    neighbors[n] = provisional[up];
                    n += 1;
                }
                if connectivity == Connectivity::EightWay {
                    if col > 0 && mask[up - 1] {
                        neighbors[n] = provisional[up - 1];
                        n += 1;
                    }
                    if col + 1 < width && mask[up + 1] {
                        neighbors[n] = provisional[up + 1];
                        n += 1;
                    }
                }
            }
            if n == 0 {
                next += 1;
                parent.push(next);
                provisional[i] = next;
            } else {
                let mut low = neighbors[0];
                for &nb in &neighbors[1..n] {
                    if nb < low {
                        low = nb;
                    }
                }
                provisional[i] = low;
                for &nb in &neighbors[..n] {
                    union(&mut parent, low, nb);
                }
            }
        }
    }

    let mut remap = vec![0u32; parent.len()];
    let mut count = 0u32;
    let mut labels = vec![0u32; mask.len()];
    for (i, &fg) in mask.iter().enumerate() {
        if !fg {
            continue;
        }
        let root = find(&mut parent, provisional[i]);
        if remap[root as usize] == 0 {
            count += 1;
            remap[root as usize] = count;
        }
        labels[i] = remap[root as usize];
    }
    (labels, count)
}

fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        let grand = parent[parent[x as usize] as usize];
        parent[x as usize] = grand;
        x = grand;
    }
    x
}

fn union(parent: &mut [u32], a: u32, b: u32) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra == rb {
        return;
    }
    // Attach the larger root below the smaller one so roots keep raster order.
    if ra < rb {
        parent[rb as usize] = ra;
    } else {
        parent[ra as usize] = rb;
    }
}
