/// Compact two-level mask: `true` = foreground (ink), `false` = background (page)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BinaryMask {
    /// Create an all-background mask with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Build a mask from text rows where `'#'` marks foreground.
    ///
    /// Width is taken from the longest row; shorter rows are padded with background.
    ///
    /// ```
    /// use word_regions::BinaryMask;
    ///
    /// let mask = BinaryMask::from_rows(&["#.", ".#"]);
    /// assert!(mask.get(0, 0));
    /// assert!(!mask.get(1, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut mask = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Get mask width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get mask height
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when the mask has no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get cell at (x, y); cells outside the grid read as background
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set cell at (x, y); writes outside the grid are ignored
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of foreground cells
    pub fn foreground_count(&self) -> usize {
        // Padding bits past width*height are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Get raw packed data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pack a row-major slice of per-cell flags into a mask
    pub(crate) fn from_cells(width: usize, height: usize, cells: &[bool]) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        let mut data = vec![0u8; (width * height).div_ceil(8)];
        for (index, _) in cells.iter().enumerate().filter(|(_, fg)| **fg) {
            data[index / 8] |= 1 << (index % 8);
        }
        Self {
            width,
            height,
            data,
        }
    }
}

impl Default for BinaryMask {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
