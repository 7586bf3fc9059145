/// Axis-aligned box with inclusive integer pixel coordinates
///
/// `(x0, y0)` is the top-left pixel and `(x1, y1)` the bottom-right pixel, both
/// part of the region. `x0 <= x1` and `y0 <= y1` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Left column
    pub x0: usize,
    /// Top row
    pub y0: usize,
    /// Right column (inclusive)
    pub x1: usize,
    /// Bottom row (inclusive)
    pub y1: usize,
}

impl BoundingBox {
    /// Create a box from its corners
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "inverted box ({x0},{y0})-({x1},{y1})");
        Self { x0, y0, x1, y1 }
    }

    /// Degenerate box covering a single pixel
    pub fn from_point(x: usize, y: usize) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    /// Grow the box so it covers (x, y)
    #[inline]
    pub fn extend_to(&mut self, x: usize, y: usize) {
        self.x0 = self.x0.min(x);
        self.y0 = self.y0.min(y);
        self.x1 = self.x1.max(x);
        self.y1 = self.y1.max(y);
    }

    /// Coordinate-wise union with another box
    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Horizontal extent `x1 - x0` (zero for a one-pixel-wide box)
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    /// Vertical extent `y1 - y0` (zero for a one-pixel-tall box)
    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }

    /// Number of pixel columns covered
    pub fn pixel_width(&self) -> usize {
        self.width() + 1
    }

    /// Number of pixel rows covered
    pub fn pixel_height(&self) -> usize {
        self.height() + 1
    }

    /// Whether (x, y) lies inside the box
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Whether `other` lies completely inside this box
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.x0, other.y0) && self.contains(other.x1, other.y1)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_and_extent() {
        let mut b = BoundingBox::from_point(5, 5);
        assert_eq!(b.width(), 0);
        assert_eq!(b.pixel_width(), 1);

        b.extend_to(2, 9);
        b.extend_to(7, 4);
        assert_eq!(b, BoundingBox::new(2, 4, 7, 9));
        assert_eq!(b.width(), 5);
        assert_eq!(b.height(), 5);
        assert_eq!(b.pixel_height(), 6);
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::new(0, 0, 9, 9);
        let b = BoundingBox::new(50, 3, 59, 12);
        let u = a.union(&b);
        assert_eq!(u, BoundingBox::new(0, 0, 59, 12));
        assert!(u.encloses(&a) && u.encloses(&b));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = BoundingBox::new(1, 1, 3, 3);
        assert!(b.contains(1, 1));
        assert!(b.contains(3, 3));
        assert!(!b.contains(4, 3));
        assert!(!b.contains(0, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(BoundingBox::new(0, 1, 2, 3).to_string(), "(0, 1)-(2, 3)");
    }
}
