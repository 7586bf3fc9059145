use crate::error::{Error, Result};
use image::{DynamicImage, RgbImage, RgbaImage};

/// Interleaved 8-bit color image, row-major
///
/// Holds either RGB (3 channels) or RGBA (4 channels) samples. Alpha never
/// takes part in luminance but is carried through channel-preserving outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap a caller-supplied pixel buffer.
    ///
    /// Fails when `channels` is not 3 or 4, when `width * height * channels`
    /// overflows, or when `data` does not hold exactly that many bytes.
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    fn byte_len(width: usize, height: usize, channels: usize) -> Result<usize> {
        if channels != 3 && channels != 4 {
            return Err(Error::UnsupportedChannels(channels));
        }
        width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(channels))
            .ok_or(Error::DimensionsOverflow {
                width,
                height,
                channels,
            })
    }

    /// Build a raster whose buffer length is known to match
    pub(crate) fn from_parts(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * channels);
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Raster with every sample set to `value` (alpha included)
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        let len = Self::byte_len(width, height, channels)?;
        Self::new(width, height, channels, vec![value; len])
    }

    /// Convert any decoded image to an RGBA raster
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from(img.to_rgba8())
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per pixel (3 or 4)
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// True when the raster has no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw interleaved samples
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Samples of the pixel at (x, y)
    ///
    /// # Panics
    /// Panics if (x, y) is outside the image.
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let idx = (y * self.width + x) * self.channels;
        &self.data[idx..idx + self.channels]
    }

    /// Paint an axis-aligned rectangle with `color`; only the first
    /// `channels` entries of `color` are used. Coordinates are clipped.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: &[u8]) {
        let x_end = (x1 + 1).min(self.width);
        let y_end = (y1 + 1).min(self.height);
        for y in y0..y_end {
            for x in x0..x_end {
                let idx = (y * self.width + x) * self.channels;
                for (c, &v) in color.iter().take(self.channels).enumerate() {
                    self.data[idx + c] = v;
                }
            }
        }
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        let (w, h) = img.dimensions();
        Self {
            width: w as usize,
            height: h as usize,
            channels: 3,
            data: img.into_raw(),
        }
    }
}

impl From<RgbaImage> for Raster {
    fn from(img: RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        Self {
            width: w as usize,
            height: h as usize,
            channels: 4,
            data: img.into_raw(),
        }
    }
}
