//! Error types for word_regions
//!
//! The detection stages themselves cannot fail on a well-formed raster.
//! Errors only come from building a [`Raster`](crate::models::Raster) out of
//! caller-supplied buffers and from the image I/O helpers in [`crate::tools`].

use thiserror::Error;

/// word_regions error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length disagrees with the declared dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// `width * height * channels`
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// `width * height * channels` does not fit in `usize`
    #[error("raster dimensions overflow: {width}x{height}x{channels}")]
    DimensionsOverflow {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Declared channel count
        channels: usize,
    },

    /// Only RGB and RGBA rasters are accepted
    #[error("unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),

    /// Image decode or encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for word_regions operations
pub type Result<T> = std::result::Result<T, Error>;
