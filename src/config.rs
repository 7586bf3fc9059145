//! Detection thresholds
//!
//! Defaults reproduce the reference behavior. Environment overrides:
//! `WORDS_THRESHOLD`, `WORDS_MIN_WIDTH`, `WORDS_MIN_HEIGHT`,
//! `WORDS_HORIZONTAL_THRESHOLD`, `WORDS_VERTICAL_THRESHOLD`, `WORDS_PARALLEL`.
//! Values that fail to parse fall back to the default.

use crate::detector::connected_components::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};
use crate::detector::grouping::{DEFAULT_HORIZONTAL_THRESHOLD, DEFAULT_VERTICAL_THRESHOLD};
use crate::utils::binarization::DEFAULT_THRESHOLD;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

/// Tunable parameters for one pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Intensity at or below which a pixel is ink
    pub threshold: u8,
    /// Components need `x1 - x0` strictly greater than this
    pub min_width: usize,
    /// Components need `y1 - y0` strictly greater than this
    pub min_height: usize,
    /// Maximum gap between a word's right edge and the next box's left edge
    pub horizontal_threshold: usize,
    /// Maximum `y0` distance from a line's anchor
    pub vertical_threshold: usize,
    /// Binarize rows in parallel (same output, different speed)
    pub parallel: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            horizontal_threshold: DEFAULT_HORIZONTAL_THRESHOLD,
            vertical_threshold: DEFAULT_VERTICAL_THRESHOLD,
            parallel: false,
        }
    }
}

impl DetectorConfig {
    /// Defaults with any `WORDS_*` environment overrides applied
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            threshold: parse_env_u8("WORDS_THRESHOLD", d.threshold),
            min_width: parse_env_usize("WORDS_MIN_WIDTH", d.min_width),
            min_height: parse_env_usize("WORDS_MIN_HEIGHT", d.min_height),
            horizontal_threshold: parse_env_usize(
                "WORDS_HORIZONTAL_THRESHOLD",
                d.horizontal_threshold,
            ),
            vertical_threshold: parse_env_usize("WORDS_VERTICAL_THRESHOLD", d.vertical_threshold),
            parallel: parse_env_bool_u8("WORDS_PARALLEL", d.parallel),
        }
    }

    /// Set the binarization threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the noise filter minimums
    pub fn with_min_size(mut self, min_width: usize, min_height: usize) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }

    /// Set the word merge gap
    pub fn with_horizontal_threshold(mut self, horizontal_threshold: usize) -> Self {
        self.horizontal_threshold = horizontal_threshold;
        self
    }

    /// Set the line assignment distance
    pub fn with_vertical_threshold(mut self, vertical_threshold: usize) -> Self {
        self.vertical_threshold = vertical_threshold;
        self
    }

    /// Enable or disable the parallel binarizer
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
