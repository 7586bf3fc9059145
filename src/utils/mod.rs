//! Utility functions for image processing
//!
//! This module provides the per-pixel passes that precede labeling:
//! - Grayscale conversion (unweighted RGB mean, alpha ignored)
//! - Binarization (fixed global threshold, fused and parallel variants)

pub mod binarization;
pub mod grayscale;
