//! Connected components over a binary mask
//!
//! Foreground cells are grouped into maximal 4-connected regions with a
//! breadth-first flood fill. Seeds are taken in row-major order, so component
//! order is the order in which each region's first pixel is met by the scan.

use crate::models::{BinaryMask, BoundingBox};
use std::collections::VecDeque;

/// Default minimum extent (`x1 - x0`) a component must exceed to be kept
pub const DEFAULT_MIN_WIDTH: usize = 5;
/// Default minimum extent (`y1 - y0`) a component must exceed to be kept
pub const DEFAULT_MIN_HEIGHT: usize = 5;

/// One maximal 4-connected foreground region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Tight box around every pixel of the region
    pub bbox: BoundingBox,
    /// First pixel reached by the row-major scan
    pub seed: (usize, usize),
    /// Number of pixels in the region
    pub pixel_count: usize,
}

/// Result of a full labeling pass, before any size filtering
///
/// `labels` is a dense row-major grid: `0` is background, label `k` (1-based)
/// belongs to `components[k - 1]`.
#[derive(Debug, Clone)]
pub struct Labeling {
    width: usize,
    height: usize,
    labels: Vec<usize>,
    /// Components in seed discovery order
    pub components: Vec<Component>,
}

impl Labeling {
    /// Label of the cell at (x, y); `0` for background or out-of-range cells
    pub fn label_at(&self, x: usize, y: usize) -> usize {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.labels[y * self.width + x]
    }

    /// Grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Boxes of the components that survive the noise filter
    pub fn filtered_boxes(&self, min_width: usize, min_height: usize) -> Vec<BoundingBox> {
        filter_components(&self.components, min_width, min_height)
    }
}

/// Label every foreground region of `mask`.
///
/// The label grid doubles as the visited set: a cell is marked when it is
/// enqueued, so each pixel enters the queue at most once and the whole pass is
/// O(width * height).
pub fn label_components(mask: &BinaryMask) -> Labeling {
    let width = mask.width();
    let height = mask.height();
    let mut labels = vec![0usize; width * height];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if !mask.get(x, y) || labels[y * width + x] != 0 {
                continue;
            }
            let label = components.len() + 1;
            let component = flood_fill(mask, &mut labels, &mut queue, x, y, label);
            components.push(component);
        }
    }

    Labeling {
        width,
        height,
        labels,
        components,
    }
}

/// Breadth-first fill from (sx, sy) over 4-connected foreground cells
fn flood_fill(
    mask: &BinaryMask,
    labels: &mut [usize],
    queue: &mut VecDeque<(usize, usize)>,
    sx: usize,
    sy: usize,
    label: usize,
) -> Component {
    let width = mask.width();
    let height = mask.height();
    let mut bbox = BoundingBox::from_point(sx, sy);
    let mut pixel_count = 0usize;

    labels[sy * width + sx] = label;
    queue.push_back((sx, sy));

    while let Some((cx, cy)) = queue.pop_front() {
        bbox.extend_to(cx, cy);
        pixel_count += 1;

        // Left, right, up, down; diagonals never connect
        let neighbors = [
            (cx.wrapping_sub(1), cy),
            (cx + 1, cy),
            (cx, cy.wrapping_sub(1)),
            (cx, cy + 1),
        ];
        for (nx, ny) in neighbors {
            // wrapping_sub turns -1 into usize::MAX, which fails the range check
            if nx >= width || ny >= height {
                continue;
            }
            let idx = ny * width + nx;
            if labels[idx] == 0 && mask.get(nx, ny) {
                labels[idx] = label;
                queue.push_back((nx, ny));
            }
        }
    }

    Component {
        bbox,
        seed: (sx, sy),
        pixel_count,
    }
}

/// Keep components whose extents strictly exceed the minimums
///
/// Dropped components are discarded outright, never merged into a neighbor.
pub fn filter_components(
    components: &[Component],
    min_width: usize,
    min_height: usize,
) -> Vec<BoundingBox> {
    components
        .iter()
        .filter(|c| c.bbox.width() > min_width && c.bbox.height() > min_height)
        .map(|c| c.bbox)
        .collect()
}

/// Find connected foreground regions and return the boxes of those larger
/// than the noise thresholds, in row-major seed order
pub fn label(mask: &BinaryMask, min_width: usize, min_height: usize) -> Vec<BoundingBox> {
    let labeling = label_components(mask);
    let boxes = labeling.filtered_boxes(min_width, min_height);
    tracing::debug!(
        components = labeling.components.len(),
        kept = boxes.len(),
        min_width,
        min_height,
        "labeled connected components"
    );
    boxes
}

/// [`label`] with the default 5x5 noise thresholds
pub fn label_default(mask: &BinaryMask) -> Vec<BoundingBox> {
    label(mask, DEFAULT_MIN_WIDTH, DEFAULT_MIN_HEIGHT)
}
