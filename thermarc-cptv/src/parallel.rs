//! Parallel compression of independent streams (requires `parallel` feature).
//!
//! Frames inside one stream are inherently sequential, but separate streams
//! share nothing, so each gets its own [`Compressor`](crate::Compressor) on a rayon worker.

use crate::compressor::CompressedFrame;
use crate::sequence::compress_sequence;
use rayon::prelude::*;
use thermarc_core::error::Result;
use thermarc_core::{CameraSpec, Frame};
use tracing::debug;

/// Compress each stream of `streams` concurrently.
///
/// The output for every stream is identical to [`compress_sequence`]. If
/// any stream fails, one of the errors is returned.
pub fn compress_streams_parallel(
    spec: &CameraSpec,
    streams: &[Vec<Frame>],
) -> Result<Vec<Vec<CompressedFrame>>> {
    debug!(streams = streams.len(), "compressing streams in parallel");

    streams
        .par_iter()
        .map(|frames| compress_sequence(spec, frames))
        .collect()
}
