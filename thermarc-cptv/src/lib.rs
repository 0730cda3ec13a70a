//! # ThermArc-CPTV: Lossless Thermal Frame Codec
//!
//! This crate compresses sequences of 16-bit thermal camera frames and
//! reconstructs them bit-for-bit.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Temporal + spatial prediction**: residuals are the scan-order
//!   difference of frame-to-frame deltas
//! - **Adaptive width**: each frame is packed at the smallest two's
//!   complement width that holds all of its residuals
//! - **Parallel streams**: independent streams compress concurrently with
//!   the `parallel` feature
//!
//! ## Frame Format
//!
//! Each frame encodes to a `(bit_width, data)` pair. The width is carried
//! out-of-band by the caller (typically a container format). `data` is:
//!
//! - **Origin**: 4-byte little-endian `i32`, the temporal delta of the first
//!   sample in scan order
//! - **Residuals**: `sample_count - 1` codes of `bit_width` bits each, two's
//!   complement, MSB-first, with no padding except on the final byte
//!
//! Scan order is serpentine: even rows left-to-right, odd rows right-to-left.
//!
//! ## Example
//!
//! ```rust
//! use thermarc_core::{CameraSpec, Frame};
//! use thermarc_cptv::{Compressor, Decompressor};
//!
//! let spec = CameraSpec::new(160, 120, 9).unwrap();
//! let mut frame = Frame::new(&spec);
//! for (i, p) in frame.pixels_mut().iter_mut().enumerate() {
//!     *p = 3000 + (i % 160) as u16;
//! }
//!
//! let mut compressor = Compressor::new(&spec);
//! let encoded = compressor.next(&frame).unwrap();
//!
//! let mut decompressor = Decompressor::new(&spec);
//! let mut decoded = Frame::new(&spec);
//! decompressor
//!     .next(encoded.bit_width, &encoded.data[..], &mut decoded)
//!     .unwrap();
//!
//! assert_eq!(decoded, frame);
//! ```
//!
//! ## Ordering
//!
//! Every frame is predicted from the one before it. A decompressor must be
//! given frames in exactly the order its compressor produced them, starting
//! from the first; nothing in the format detects a skipped or reordered
//! frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod compressor;
mod decompressor;
#[cfg(feature = "parallel")]
mod parallel;
pub mod predictor;
pub mod scan;
mod sequence;

pub use compressor::{CompressedFrame, Compressor, ORIGIN_BYTES, compress_frame, frame_data_len};
pub use decompressor::{Decompressor, decompress_frame};
pub use predictor::{PredictorState, Residuals};
pub use sequence::{compress_sequence, decompress_sequence};

#[cfg(feature = "parallel")]
pub use parallel::compress_streams_parallel;
