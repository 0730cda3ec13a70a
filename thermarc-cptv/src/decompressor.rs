//! Frame decompressor.

use crate::compressor::ORIGIN_BYTES;
use crate::predictor::{PredictorState, Residuals};
use std::io::Read;
use thermarc_core::bitstream::BitReader;
use thermarc_core::error::{Result, ThermArcError};
use thermarc_core::width::MAX_BIT_WIDTH;
use thermarc_core::{CameraSpec, Frame};
use tracing::{debug, warn};

/// Decompress one frame against explicit predictor state.
///
/// `reader` must yield the bytes produced for this frame by the paired
/// compressor. On success `out` holds the frame and `state` is advanced to
/// it. On error `state` is untouched and the contents of `out` are
/// unspecified.
pub fn decompress_frame<R: Read>(
    state: &mut PredictorState,
    bit_width: u8,
    reader: R,
    out: &mut Frame,
) -> Result<()> {
    let mut residuals = Residuals::default();
    decode_with(state, bit_width, reader, out, &mut residuals)
}

fn decode_with<R: Read>(
    state: &mut PredictorState,
    bit_width: u8,
    reader: R,
    out: &mut Frame,
    residuals: &mut Residuals,
) -> Result<()> {
    state.check_dimensions(out)?;
    if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
        return Err(ThermArcError::InvalidBitWidth(bit_width));
    }

    let mut bits = BitReader::new(reader);

    // The origin prefix is byte-aligned, so 8-bit reads return raw bytes.
    let mut origin = [0u8; ORIGIN_BYTES];
    for byte in &mut origin {
        *byte = bits.read_value(8)? as u8;
    }
    residuals.origin = i32::from_le_bytes(origin);

    let count = state.sample_count().saturating_sub(1);
    residuals.deltas.clear();
    residuals.deltas.reserve(count);
    for _ in 0..count {
        residuals.deltas.push(bits.read_signed(bit_width)?);
    }

    state.reconstruct(residuals, out)?;

    let had_history = state.has_history();
    state.advance(out)?;

    debug!(
        bit_width,
        bits = bits.bits_read(),
        temporal = had_history,
        "decompressed frame"
    );
    Ok(())
}

/// Stateful decompressor for one frame stream.
///
/// Mirrors a [`Compressor`](crate::Compressor): it must receive every
/// `(bit_width, data)` pair in the order the compressor produced them,
/// starting from the first frame. There is no checksum at this layer, so
/// a replayed or reordered frame is not detected.
#[derive(Debug, Clone)]
pub struct Decompressor {
    spec: CameraSpec,
    state: PredictorState,
    /// Scratch reused between frames.
    residuals: Residuals,
    frames_decoded: u64,
}

impl Decompressor {
    /// Create a decompressor for frames from `spec`.
    pub fn new(spec: &CameraSpec) -> Self {
        Self {
            spec: *spec,
            state: PredictorState::new(spec),
            residuals: Residuals::default(),
            frames_decoded: 0,
        }
    }

    /// Decode the next frame of the stream into `out`.
    ///
    /// Fails with `DimensionMismatch` if `out` does not match the camera,
    /// `InvalidBitWidth` for a width outside 1..=16, and `StreamUnderrun`
    /// if `reader` ends before every sample has been read.
    pub fn next<R: Read>(&mut self, bit_width: u8, reader: R, out: &mut Frame) -> Result<()> {
        let result = decode_with(
            &mut self.state,
            bit_width,
            reader,
            out,
            &mut self.residuals,
        );
        match &result {
            Ok(()) => self.frames_decoded += 1,
            Err(err) => warn!(
                error = %err,
                frame = self.frames_decoded,
                bit_width,
                "frame decode failed"
            ),
        }
        result
    }

    /// Forget the previous frame, matching [`Compressor::reset`](crate::Compressor::reset).
    pub fn reset(&mut self) {
        self.state.reset();
        self.frames_decoded = 0;
    }

    /// Camera this decompressor was built for.
    pub fn spec(&self) -> &CameraSpec {
        &self.spec
    }

    /// Current predictor state.
    pub fn state(&self) -> &PredictorState {
        &self.state
    }

    /// Frames successfully decoded since creation or the last reset.
    pub fn frames_decoded(&self) -> u64 {
        self.frames_decoded
    }
}
