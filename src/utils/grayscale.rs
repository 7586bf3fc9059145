//! Convert color rasters to 8-bit intensity using the unweighted channel mean
//! Y = round((R + G + B) / 3)
//! Uses exact integer arithmetic: Y = (R + G + B + 1) / 3
//!
//! The fractional part of the mean is always 0, 1/3 or 2/3, so the integer form
//! rounds exactly like storing the float mean into an 8-bit buffer would.
//! Alpha (if present) is ignored.

use crate::models::Raster;
use rayon::prelude::*;

/// Mean of the first three samples of one pixel
#[inline(always)]
pub fn mean_luminance(px: &[u8]) -> u8 {
    let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
    ((sum + 1) / 3) as u8
}

/// Convert a raster to grayscale
pub fn rgb_to_gray_mean(raster: &Raster) -> Vec<u8> {
    let mut gray = vec![0u8; raster.width() * raster.height()];
    gray_into(raster.as_bytes(), raster.channels(), &mut gray);
    gray
}

fn gray_into(samples: &[u8], channels: usize, gray: &mut [u8]) {
    for (out, px) in gray.iter_mut().zip(samples.chunks_exact(channels)) {
        *out = mean_luminance(px);
    }
}

// ============== Parallel Processing with Rayon ==============

/// Convert a raster to grayscale, processing rows in parallel
pub fn rgb_to_gray_mean_parallel(raster: &Raster) -> Vec<u8> {
    let width = raster.width();
    let mut gray = vec![0u8; width * raster.height()];
    if gray.is_empty() {
        return gray;
    }
    let row_bytes = width * raster.channels();
    let channels = raster.channels();

    gray.par_chunks_mut(width)
        .zip(raster.as_bytes().par_chunks(row_bytes))
        .for_each(|(row, src)| gray_into(src, channels, row));

    gray
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Raster {
        Raster::new(width, height, channels, data).unwrap()
    }

    #[test]
    fn test_mean_luminance() {
        // Pure white / black
        assert_eq!(mean_luminance(&[255, 255, 255]), 255);
        assert_eq!(mean_luminance(&[0, 0, 0]), 0);

        // Channels weigh equally
        assert_eq!(mean_luminance(&[255, 0, 0]), 85);
        assert_eq!(mean_luminance(&[0, 0, 255]), 85);

        // 385 / 3 = 128.33 rounds down, 386 / 3 = 128.67 rounds up
        assert_eq!(mean_luminance(&[128, 128, 129]), 128);
        assert_eq!(mean_luminance(&[128, 129, 129]), 129);
    }

    #[test]
    fn test_alpha_ignored() {
        let rgba = raster(2, 1, 4, vec![30, 60, 90, 0, 30, 60, 90, 255]);
        assert_eq!(rgb_to_gray_mean(&rgba), vec![60, 60]);
    }

    #[test]
    fn test_parallel_matches_scalar() {
        let data: Vec<u8> = (0..17 * 9 * 3).map(|i| (i * 37 % 256) as u8).collect();
        let r = raster(17, 9, 3, data);
        assert_eq!(rgb_to_gray_mean(&r), rgb_to_gray_mean_parallel(&r));
    }

    #[test]
    fn test_empty() {
        let r = raster(0, 5, 3, Vec::new());
        assert!(rgb_to_gray_mean(&r).is_empty());
        assert!(rgb_to_gray_mean_parallel(&r).is_empty());
    }
}
