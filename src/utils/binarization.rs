use super::grayscale::{mean_luminance, rgb_to_gray_mean};
use crate::models::{BinaryMask, Raster};
use rayon::prelude::*;

/// Global threshold used when none is given
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Simple global threshold binarization
///
/// Intensity `<= threshold` is foreground (ink), anything brighter is background.
///
/// # Panics
/// Panics if `gray` holds fewer than `width * height` samples.
pub fn threshold_binarize(gray: &[u8], width: usize, height: usize, threshold: u8) -> BinaryMask {
    assert!(
        gray.len() >= width * height,
        "gray buffer holds {} samples, {width}x{height} needs {}",
        gray.len(),
        width * height
    );
    let mut binary = BinaryMask::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            binary.set(x, y, gray[idx] <= threshold);
        }
    }

    binary
}

/// Binarize a color raster with the default threshold (128)
pub fn binarize(raster: &Raster) -> BinaryMask {
    binarize_with_threshold(raster, DEFAULT_THRESHOLD)
}

/// Binarize a color raster: mean luminance, then global threshold.
///
/// Fuses both passes into one traversal; the result is identical to running
/// [`rgb_to_gray_mean`] followed by [`threshold_binarize`].
pub fn binarize_with_threshold(raster: &Raster, threshold: u8) -> BinaryMask {
    let width = raster.width();
    let mut binary = BinaryMask::new(width, raster.height());
    if binary.is_empty() {
        return binary;
    }

    for (idx, px) in raster.as_bytes().chunks_exact(raster.channels()).enumerate() {
        if mean_luminance(px) <= threshold {
            binary.set(idx % width, idx / width, true);
        }
    }

    binary
}

/// Binarize a color raster in two explicit passes (grayscale buffer, then
/// threshold). Reference form for the fused variants.
pub fn binarize_two_pass(raster: &Raster, threshold: u8) -> BinaryMask {
    let gray = rgb_to_gray_mean(raster);
    threshold_binarize(&gray, raster.width(), raster.height(), threshold)
}

/// Binarize with rows classified in parallel. Output is identical to
/// [`binarize_with_threshold`].
pub fn binarize_parallel(raster: &Raster, threshold: u8) -> BinaryMask {
    let width = raster.width();
    let height = raster.height();
    let mut cells = vec![false; width * height];
    if cells.is_empty() {
        return BinaryMask::new(width, height);
    }
    let channels = raster.channels();

    cells
        .par_chunks_mut(width)
        .zip(raster.as_bytes().par_chunks(width * channels))
        .for_each(|(row, src)| {
            for (cell, px) in row.iter_mut().zip(src.chunks_exact(channels)) {
                *cell = mean_luminance(px) <= threshold;
            }
        });

    BinaryMask::from_cells(width, height, &cells)
}

/// Channel-preserving rendition of the binarized image
///
/// Every color channel becomes 0 (foreground) or 255 (background); an alpha
/// channel is copied through unchanged. The input raster is left untouched.
pub fn render_binarized(raster: &Raster, threshold: u8) -> Raster {
    let channels = raster.channels();
    let mut out = raster.as_bytes().to_vec();

    for px in out.chunks_exact_mut(channels) {
        let value = if mean_luminance(px) > threshold { 255 } else { 0 };
        px[..3].fill(value);
    }

    Raster::from_parts(raster.width(), raster.height(), channels, out)
}

/// Render a mask back to an RGB raster (black ink on white)
pub fn mask_to_raster(mask: &BinaryMask) -> Raster {
    let mut data = Vec::with_capacity(mask.width() * mask.height() * 3);
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let v = if mask.get(x, y) { 0 } else { 255 };
            data.extend_from_slice(&[v, v, v]);
        }
    }
    Raster::from_parts(mask.width(), mask.height(), 3, data)
}
