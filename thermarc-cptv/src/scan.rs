//! Serpentine scan order.
//!
//! Samples are visited row by row, alternating direction: even rows run
//! left-to-right, odd rows right-to-left. Consecutive scan positions are
//! therefore always adjacent in the image, including across row ends, which
//! keeps the spatial stage of the predictor from seeing an edge-to-edge jump.
//!
//! ```text
//!  row 0:  0 →  1 →  2 →  3
//!                          ↓
//!  row 1:  7 ←  6 ←  5 ←  4
//!          ↓
//!  row 2:  8 →  9 → 10 → 11
//! ```

/// Iterator over flat row-major indices in serpentine order.
#[derive(Debug, Clone)]
pub struct ScanOrder {
    width: usize,
    height: usize,
    row: usize,
    col: usize,
}

impl ScanOrder {
    /// Scan a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height: if width == 0 { 0 } else { height },
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for ScanOrder {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.row >= self.height {
            return None;
        }

        let x = if self.row & 1 == 0 {
            self.col
        } else {
            self.width - 1 - self.col
        };
        let index = self.row * self.width + x;

        self.col += 1;
        if self.col == self.width {
            self.col = 0;
            self.row += 1;
        }
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.row >= self.height {
            0
        } else {
            (self.height - self.row) * self.width - self.col
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanOrder {}
