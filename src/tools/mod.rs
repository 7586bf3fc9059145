//! Helpers around the detection core: image loading, overlays, cropping and
//! summary statistics. Used by the `wordtool` binary.

use crate::error::Result;
use crate::models::{BinaryMask, BoundingBox, Raster};
use image::{Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Overlay color used by the reference viewer
pub const OVERLAY_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

/// Load an image file as an RGBA raster.
pub fn load_raster<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let img = image::open(path)?;
    Ok(Raster::from_dynamic(&img))
}

/// Load an image file as RGBA pixels for drawing and cropping.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Stroke the outline of each box, `thickness` pixels wide, growing inwards.
///
/// Boxes that reach past the image edge are clipped.
pub fn draw_boxes(img: &mut RgbaImage, boxes: &[BoundingBox], color: Rgba<u8>, thickness: usize) {
    let (w, h) = (img.width() as usize, img.height() as usize);
    if w == 0 || h == 0 || thickness == 0 {
        return;
    }

    for b in boxes {
        if b.x0 >= w || b.y0 >= h {
            continue;
        }
        let x1 = b.x1.min(w - 1);
        let y1 = b.y1.min(h - 1);
        for y in b.y0..=y1 {
            for x in b.x0..=x1 {
                let on_edge = x < b.x0 + thickness
                    || y < b.y0 + thickness
                    || x + thickness > b.x1
                    || y + thickness > b.y1;
                if on_edge {
                    img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}

/// Cut out one sub-image per box (inclusive extents, clipped to the image).
///
/// Boxes entirely outside the image are skipped.
pub fn crop_boxes(img: &RgbaImage, boxes: &[BoundingBox]) -> Vec<RgbaImage> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    boxes
        .iter()
        .filter(|b| b.x0 < w && b.y0 < h)
        .map(|b| {
            let cw = b.x1.min(w - 1) - b.x0 + 1;
            let ch = b.y1.min(h - 1) - b.y0 + 1;
            image::imageops::crop_imm(img, b.x0 as u32, b.y0 as u32, cw as u32, ch as u32)
                .to_image()
        })
        .collect()
}

/// Write crops as `word_{i}.png` into `dir`, creating it if needed.
pub fn save_crops<P: AsRef<Path>>(dir: P, crops: &[RgbaImage]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(crops.len());
    for (i, crop) in crops.iter().enumerate() {
        let path = dir.join(format!("word_{i}.png"));
        crop.save(&path)?;
        tracing::debug!(path = %path.display(), "saved word crop");
        paths.push(path);
    }
    Ok(paths)
}

/// Summary statistics for grayscale data.
#[derive(Debug, Clone, Copy)]
pub struct GrayStats {
    /// Minimum grayscale value.
    pub min: u8,
    /// Maximum grayscale value.
    pub max: u8,
    /// Average grayscale value.
    pub avg: u8,
}

/// Summary statistics for a binary mask.
#[derive(Debug, Clone, Copy)]
pub struct MaskStats {
    /// Count of foreground pixels.
    pub foreground_pixels: usize,
    /// Total pixels in the mask.
    pub total_pixels: usize,
    /// Ratio of foreground pixels to total pixels.
    pub foreground_ratio: f64,
}

/// Compute min/max/avg for grayscale values.
pub fn grayscale_stats(gray: &[u8]) -> GrayStats {
    if gray.is_empty() {
        return GrayStats {
            min: 0,
            max: 0,
            avg: 0,
        };
    }
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum: u64 = 0;
    for &v in gray {
        min = min.min(v);
        max = max.max(v);
        sum += v as u64;
    }
    let avg = (sum / gray.len() as u64) as u8;
    GrayStats { min, max, avg }
}

/// Compute foreground pixel stats for a binary mask.
pub fn mask_stats(mask: &BinaryMask) -> MaskStats {
    let foreground = mask.foreground_count();
    let total = mask.width() * mask.height();
    let ratio = if total == 0 {
        0.0
    } else {
        foreground as f64 / total as f64
    };
    MaskStats {
        foreground_pixels: foreground,
        total_pixels: total,
        foreground_ratio: ratio,
    }
}
