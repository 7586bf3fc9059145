//! word_regions - locate word-sized regions in scanned document images
//!
//! Turns a color raster into tight per-word bounding boxes so a downstream
//! recognizer can run on each region instead of the whole page. The pipeline
//! is `group(label(binarize(raster)))`:
//!
//! 1. Binarize: unweighted RGB mean, fixed global threshold
//! 2. Label: 4-connected flood fill, small components dropped as noise
//! 3. Group: first-fit line assignment, then horizontal word merging
//!
//! ```
//! use word_regions::{BoundingBox, Raster, detect_words};
//!
//! let mut page = Raster::filled(100, 100, 3, 255).unwrap();
//! page.fill_rect(0, 0, 9, 9, &[0, 0, 0]);
//! page.fill_rect(50, 0, 59, 9, &[0, 0, 0]);
//!
//! assert_eq!(detect_words(&page), vec![BoundingBox::new(0, 0, 59, 9)]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Detection thresholds and environment overrides
pub mod config;
/// Component labeling and line/word grouping
pub mod detector;
/// Error type and result alias
pub mod error;
/// Core data structures (Raster, BinaryMask, BoundingBox)
pub mod models;
/// Image loading, overlay drawing and cropping helpers for tools
pub mod tools;
/// Utility functions (grayscale, binarization)
pub mod utils;

pub use config::DetectorConfig;
pub use detector::connected_components::{Component, Labeling, label, label_components};
pub use detector::grouping::{Line, Word, group, group_words};
pub use error::{Error, Result};
pub use models::{BinaryMask, BoundingBox, Raster};
pub use utils::binarization::binarize;

use detector::connected_components::filter_components;
use detector::grouping::{assign_lines, merge_line};
use image::DynamicImage;
use utils::binarization::{binarize_parallel, binarize_with_threshold};

/// Detect word boxes with the default thresholds
pub fn detect_words(raster: &Raster) -> Vec<BoundingBox> {
    detect_words_with_config(raster, &DetectorConfig::default())
}

/// Detect word boxes with explicit thresholds
pub fn detect_words_with_config(raster: &Raster, config: &DetectorConfig) -> Vec<BoundingBox> {
    let mask = binarize_for(raster, config);
    let components = label(&mask, config.min_width, config.min_height);
    group(
        &components,
        config.horizontal_threshold,
        config.vertical_threshold,
    )
}

fn binarize_for(raster: &Raster, config: &DetectorConfig) -> BinaryMask {
    if config.parallel {
        binarize_parallel(raster, config.threshold)
    } else {
        binarize_with_threshold(raster, config.threshold)
    }
}

/// Everything one pipeline run produced, for diagnostics
#[derive(Debug, Clone, Default)]
pub struct DetectionReport {
    /// Word boxes with the component indices they absorbed
    pub words: Vec<Word>,
    /// Component boxes that survived the noise filter (indexed by `Word::members`)
    pub components: Vec<BoundingBox>,
    /// Components found before filtering
    pub component_count: usize,
    /// Number of text lines
    pub line_count: usize,
    /// Foreground pixels in the binary mask
    pub foreground_pixels: usize,
}

impl DetectionReport {
    /// Word boxes only
    pub fn word_boxes(&self) -> Vec<BoundingBox> {
        self.words.iter().map(|w| w.bbox).collect()
    }
}

/// Detector holding a configuration; keeps no state between calls
#[derive(Debug, Clone, Default)]
pub struct WordDetector {
    config: DetectorConfig,
}

impl WordDetector {
    /// Create a detector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with the given settings
    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect word boxes in a raster
    pub fn detect(&self, raster: &Raster) -> Vec<BoundingBox> {
        detect_words_with_config(raster, &self.config)
    }

    /// Detect word boxes in a decoded image
    pub fn detect_image(&self, img: &DynamicImage) -> Vec<BoundingBox> {
        self.detect(&Raster::from_dynamic(img))
    }

    /// Run the pipeline and keep the intermediate counts and memberships
    pub fn detect_with_report(&self, raster: &Raster) -> DetectionReport {
        let mask = binarize_for(raster, &self.config);
        let foreground_pixels = mask.foreground_count();

        let labeling = label_components(&mask);
        let components = filter_components(
            &labeling.components,
            self.config.min_width,
            self.config.min_height,
        );

        let lines = assign_lines(&components, self.config.vertical_threshold);
        let words: Vec<Word> = lines
            .iter()
            .flat_map(|line| merge_line(&components, line, self.config.horizontal_threshold))
            .collect();

        tracing::debug!(
            width = raster.width(),
            height = raster.height(),
            foreground_pixels,
            components = labeling.components.len(),
            kept = components.len(),
            lines = lines.len(),
            words = words.len(),
            "word detection finished"
        );

        DetectionReport {
            words,
            components,
            component_count: labeling.components.len(),
            line_count: lines.len(),
            foreground_pixels,
        }
    }
}
