//! Temporal + spatial residual predictor.
//!
//! For each sample in [serpentine scan order](crate::scan) the predictor
//! first takes the temporal delta against the same position in the previous
//! frame, then differences consecutive temporal deltas along the scan. A
//! scene that only drifts smoothly between frames produces second-order
//! residuals that cluster tightly around zero.
//!
//! Before any frame has been seen there is no history and the previous
//! frame is taken to be all [`BASELINE`]. The temporal delta of the first
//! frame is then its raw value, and the second stage degenerates into a
//! plain left-neighbour spatial delta.
//!
//! The temporal delta of the first scan position has no predecessor and is
//! returned as [`Residuals::origin`].

use crate::scan::ScanOrder;
use thermarc_core::error::{Result, ThermArcError};
use thermarc_core::{CameraSpec, Frame};
use tracing::trace;

/// Value assumed for every sample of the frame before the first.
pub const BASELINE: u16 = 0;

/// Predictor output for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Residuals {
    /// Temporal delta of the first scan position.
    pub origin: i32,
    /// Second-order residuals for scan positions `1..sample_count`.
    pub deltas: Vec<i32>,
}

/// Retained predictor history for one stream.
///
/// Each compressor and decompressor owns exactly one of these. The state
/// must see frames in the same order on both sides; feeding a frame out of
/// order silently desynchronizes every later frame.
#[derive(Debug, Clone)]
pub struct PredictorState {
    width: usize,
    height: usize,
    /// Raw samples of the previous frame, row-major.
    history: Option<Vec<u16>>,
}

impl PredictorState {
    /// Fresh state (no history) for frames from `spec`.
    pub fn new(spec: &CameraSpec) -> Self {
        Self::with_dimensions(spec.width(), spec.height())
    }

    /// Fresh state for `width` x `height` frames.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            history: None,
        }
    }

    /// `(width, height)` this state accepts.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Samples per frame.
    pub fn sample_count(&self) -> usize {
        self.width * self.height
    }

    /// Whether a previous frame is retained.
    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    /// Fail with `DimensionMismatch` unless `frame` has this state's shape.
    pub fn check_dimensions(&self, frame: &Frame) -> Result<()> {
        if frame.dimensions() != self.dimensions() {
            return Err(ThermArcError::dimension_mismatch(
                self.dimensions(),
                frame.dimensions(),
            ));
        }
        Ok(())
    }

    #[inline]
    fn previous(&self, index: usize) -> i32 {
        match &self.history {
            Some(prev) => prev[index] as i32,
            None => BASELINE as i32,
        }
    }

    /// Compute the residuals of `frame` against the current history.
    pub fn predict(&self, frame: &Frame) -> Result<Residuals> {
        let mut residuals = Residuals::default();
        self.predict_into(frame, &mut residuals)?;
        Ok(residuals)
    }

    /// Like [`predict`](Self::predict), reusing `residuals`' allocation.
    pub fn predict_into(&self, frame: &Frame, residuals: &mut Residuals) -> Result<()> {
        self.check_dimensions(frame)?;

        let pix = frame.pixels();
        residuals.origin = 0;
        residuals.deltas.clear();
        residuals
            .deltas
            .reserve(self.sample_count().saturating_sub(1));

        let mut last = 0i32;
        for (i, index) in ScanOrder::new(self.width, self.height).enumerate() {
            let temporal = pix[index] as i32 - self.previous(index);
            if i == 0 {
                residuals.origin = temporal;
            } else {
                residuals.deltas.push(temporal - last);
            }
            last = temporal;
        }

        Ok(())
    }

    /// Rebuild raw samples from `residuals` into `out`.
    ///
    /// Does not update the history; call [`advance`](Self::advance) with the
    /// result once it is accepted.
    pub fn reconstruct(&self, residuals: &Residuals, out: &mut Frame) -> Result<()> {
        self.check_dimensions(out)?;

        let expected = self.sample_count().saturating_sub(1);
        if residuals.deltas.len() != expected {
            return Err(ThermArcError::corrupted(
                0,
                format!(
                    "expected {expected} residuals, got {}",
                    residuals.deltas.len()
                ),
            ));
        }

        let mut temporal = residuals.origin as i64;
        for (i, index) in ScanOrder::new(self.width, self.height).enumerate() {
            if i > 0 {
                temporal += residuals.deltas[i - 1] as i64;
            }
            let value = self.previous(index) as i64 + temporal;
            let sample = u16::try_from(value).map_err(|_| {
                ThermArcError::corrupted(
                    i as u64,
                    format!("reconstructed sample {value} is outside the 16-bit range"),
                )
            })?;
            out.pixels_mut()[index] = sample;
        }

        Ok(())
    }

    /// Make `frame` the history for the next frame, replacing any previous one.
    pub fn advance(&mut self, frame: &Frame) -> Result<()> {
        self.check_dimensions(frame)?;

        match &mut self.history {
            Some(prev) => prev.copy_from_slice(frame.pixels()),
            None => {
                trace!("predictor history established");
                self.history = Some(frame.pixels().to_vec());
            }
        }
        Ok(())
    }

    /// Drop the history, as if no frame had been processed.
    pub fn reset(&mut self) {
        if self.history.take().is_some() {
            trace!("predictor history cleared");
        }
    }
}
