//! Frame compressor.

use crate::predictor::{PredictorState, Residuals};
use thermarc_core::bitstream::{BitWriter, packed_len};
use thermarc_core::error::Result;
use thermarc_core::width::select_width;
use thermarc_core::{CameraSpec, Frame};
use tracing::debug;

/// Size of the little-endian origin prefix at the start of every frame.
pub const ORIGIN_BYTES: usize = 4;

/// Encoded size of a frame with `sample_count` samples packed at `bit_width`.
pub fn frame_data_len(sample_count: usize, bit_width: u8) -> usize {
    ORIGIN_BYTES + packed_len(sample_count.saturating_sub(1), bit_width)
}

/// One encoded frame: the width travels out-of-band next to the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedFrame {
    /// Bits per residual, 1 to 16.
    pub bit_width: u8,
    /// Origin prefix followed by the packed residuals.
    pub data: Vec<u8>,
}

impl CompressedFrame {
    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the encoded data is empty (never true for codec output).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Compress one frame against explicit predictor state.
///
/// On success `state` is advanced to `frame`. On error `state` is untouched.
pub fn compress_frame(state: &mut PredictorState, frame: &Frame) -> Result<CompressedFrame> {
    let mut residuals = Residuals::default();
    encode_with(state, frame, &mut residuals)
}

fn encode_with(
    state: &mut PredictorState,
    frame: &Frame,
    residuals: &mut Residuals,
) -> Result<CompressedFrame> {
    state.predict_into(frame, residuals)?;
    let bit_width = select_width(&residuals.deltas)?;

    let mut data = Vec::with_capacity(frame_data_len(state.sample_count(), bit_width));
    data.extend_from_slice(&residuals.origin.to_le_bytes());

    let mut writer = BitWriter::with_buffer(data);
    for &delta in &residuals.deltas {
        writer.write_signed(delta, bit_width)?;
    }
    let data = writer.finish();

    let had_history = state.has_history();
    state.advance(frame)?;

    debug!(
        bit_width,
        bytes = data.len(),
        temporal = had_history,
        "compressed frame"
    );

    Ok(CompressedFrame { bit_width, data })
}

/// Stateful compressor for one frame stream.
///
/// Frames must be fed in capture order. Each call depends on the frame
/// before it; a skipped or reordered frame is not detected here and makes
/// every later frame decode incorrectly.
///
/// # Example
///
/// ```
/// use thermarc_core::{CameraSpec, Frame};
/// use thermarc_cptv::Compressor;
///
/// let spec = CameraSpec::new(4, 2, 9).unwrap();
/// let mut compressor = Compressor::new(&spec);
///
/// let frame = Frame::new(&spec);
/// let encoded = compressor.next(&frame).unwrap();
/// assert_eq!(encoded.bit_width, 1);
/// assert_eq!(encoded.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Compressor {
    spec: CameraSpec,
    state: PredictorState,
    /// Scratch reused between frames.
    residuals: Residuals,
    frames_encoded: u64,
}

impl Compressor {
    /// Create a compressor for frames from `spec`.
    pub fn new(spec: &CameraSpec) -> Self {
        Self {
            spec: *spec,
            state: PredictorState::new(spec),
            residuals: Residuals::default(),
            frames_encoded: 0,
        }
    }

    /// Compress the next frame of the stream.
    ///
    /// Fails with `DimensionMismatch` if `frame` does not match the camera,
    /// or `BitWidthOverflow` if its residuals need more than 16 bits. Either
    /// way the predictor state is unchanged and the stream can continue.
    pub fn next(&mut self, frame: &Frame) -> Result<CompressedFrame> {
        let encoded = encode_with(&mut self.state, frame, &mut self.residuals)?;
        self.frames_encoded += 1;
        Ok(encoded)
    }

    /// Forget the previous frame; the next frame is encoded spatially only.
    pub fn reset(&mut self) {
        self.state.reset();
        self.frames_encoded = 0;
    }

    /// Camera this compressor was built for.
    pub fn spec(&self) -> &CameraSpec {
        &self.spec
    }

    /// Current predictor state.
    pub fn state(&self) -> &PredictorState {
        &self.state
    }

    /// Frames successfully encoded since creation or the last reset.
    pub fn frames_encoded(&self) -> u64 {
        self.frames_encoded
    }
}
