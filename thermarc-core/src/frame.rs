//! Thermal frame sample grid.

use crate::camera::CameraSpec;
use crate::error::{Result, ThermArcError};

/// A `height` x `width` grid of 16-bit samples, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pix: Vec<u16>,
}

impl Frame {
    /// Create a zeroed frame sized for `spec`.
    pub fn new(spec: &CameraSpec) -> Self {
        Self::with_dimensions(spec.width(), spec.height())
    }

    /// Create a zeroed frame with explicit dimensions.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pix: vec![0; width * height],
        }
    }

    /// Build a frame from rows of samples.
    ///
    /// All rows must have the same length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u16]>,
    {
        let mut pix = Vec::new();
        let mut width = None;
        let mut height = 0;

        for row in rows {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(ThermArcError::invalid_camera(format!(
                        "row {height} has {} samples, expected {w}",
                        row.len()
                    )));
                }
                Some(_) => {}
            }
            pix.extend_from_slice(row);
            height += 1;
        }

        Ok(Self {
            width: width.unwrap_or(0),
            height,
            pix,
        })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether this frame has the resolution of `spec`.
    pub fn matches(&self, spec: &CameraSpec) -> bool {
        self.dimensions() == (spec.width(), spec.height())
    }

    /// Sample at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the frame.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u16 {
        assert!(col < self.width, "column {col} out of bounds");
        self.pix[row * self.width + col]
    }

    /// Overwrite the sample at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the frame.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u16) {
        assert!(col < self.width, "column {col} out of bounds");
        self.pix[row * self.width + col] = value;
    }

    /// One row of samples.
    pub fn row(&self, y: usize) -> &[u16] {
        &self.pix[y * self.width..(y + 1) * self.width]
    }

    /// One row of samples, mutably.
    pub fn row_mut(&mut self, y: usize) -> &mut [u16] {
        &mut self.pix[y * self.width..(y + 1) * self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        // chunks_exact(0) panics; a zero-width frame has no samples anyway.
        self.pix.chunks_exact(self.width.max(1))
    }

    /// All samples in row-major order.
    pub fn pixels(&self) -> &[u16] {
        &self.pix
    }

    /// All samples in row-major order, mutably.
    pub fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.pix
    }
}
