//! Line and word grouping of component boxes
//!
//! Stage 1 buckets components into text lines, first-fit against each line's
//! anchor (the `y0` of its first member). Stage 2 sorts each line by `x0` and
//! folds horizontally close boxes into word boxes.

use crate::models::BoundingBox;

/// Default maximum gap (pixels) between a word's right edge and the next box
pub const DEFAULT_HORIZONTAL_THRESHOLD: usize = 70;
/// Default maximum `y0` distance (pixels) from a line's anchor
pub const DEFAULT_VERTICAL_THRESHOLD: usize = 40;

/// A text line: indices into the grouped component list, in assignment order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// `y0` of the first member; never updated afterwards
    pub anchor_y: usize,
    /// Member indices in discovery order
    pub members: Vec<usize>,
}

/// A merged word box and the components it absorbed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Union of the member boxes
    pub bbox: BoundingBox,
    /// Member indices, in x0-sorted order
    pub members: Vec<usize>,
}

/// Stage 1: assign each component to the first line whose anchor is within
/// `vertical_threshold` of the component's `y0`, opening a new line otherwise.
///
/// First-fit, not nearest-fit: lines are scanned in creation order and the
/// first match wins even when a later line's anchor is closer.
pub fn assign_lines(components: &[BoundingBox], vertical_threshold: usize) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, component) in components.iter().enumerate() {
        match lines
            .iter_mut()
            .find(|line| component.y0.abs_diff(line.anchor_y) <= vertical_threshold)
        {
            Some(line) => line.members.push(idx),
            None => lines.push(Line {
                anchor_y: component.y0,
                members: vec![idx],
            }),
        }
    }

    lines
}

/// Stage 2: merge one line's components into words.
///
/// The gap is measured from the accumulated word's right edge, which only
/// grows as components fold in. Overlapping boxes give a negative gap and
/// always merge.
pub fn merge_line(
    components: &[BoundingBox],
    line: &Line,
    horizontal_threshold: usize,
) -> Vec<Word> {
    let mut sorted = line.members.clone();
    // Stable: equal x0 keeps assignment order
    sorted.sort_by_key(|&idx| components[idx].x0);

    let mut words = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return words;
    };
    let mut current = Word {
        bbox: components[first],
        members: vec![first],
    };

    for idx in iter {
        let component = &components[idx];
        let distance = component.x0 as i64 - current.bbox.x1 as i64;
        if distance <= horizontal_threshold as i64 {
            current.bbox = current.bbox.union(component);
            current.members.push(idx);
        } else {
            let finished = std::mem::replace(
                &mut current,
                Word {
                    bbox: *component,
                    members: vec![idx],
                },
            );
            words.push(finished);
        }
    }
    words.push(current);

    words
}

/// Both stages, keeping membership. Words are ordered by line creation, then
/// left to right within each line.
pub fn group_words(
    components: &[BoundingBox],
    horizontal_threshold: usize,
    vertical_threshold: usize,
) -> Vec<Word> {
    let lines = assign_lines(components, vertical_threshold);
    let words: Vec<Word> = lines
        .iter()
        .flat_map(|line| merge_line(components, line, horizontal_threshold))
        .collect();
    tracing::debug!(
        components = components.len(),
        lines = lines.len(),
        words = words.len(),
        "grouped components into words"
    );
    words
}

/// Group component boxes into word boxes
pub fn group(
    components: &[BoundingBox],
    horizontal_threshold: usize,
    vertical_threshold: usize,
) -> Vec<BoundingBox> {
    group_words(components, horizontal_threshold, vertical_threshold)
        .into_iter()
        .map(|w| w.bbox)
        .collect()
}

/// [`group`] with the default thresholds (70 horizontal, 40 vertical)
pub fn group_default(components: &[BoundingBox]) -> Vec<BoundingBox> {
    group(
        components,
        DEFAULT_HORIZONTAL_THRESHOLD,
        DEFAULT_VERTICAL_THRESHOLD,
    )
}
