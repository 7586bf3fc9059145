//! Word region detection modules
//!
//! This module contains the logic that turns a binary mask into word boxes:
//! - Connected component labeling (4-connected flood fill, noise filter)
//! - Line assignment and word merging of component boxes

/// Connected component labeling with breadth-first flood fill
pub mod connected_components;
/// First-fit line assignment and horizontal word merging
pub mod grouping;
