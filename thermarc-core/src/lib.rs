//! # ThermArc Core
//!
//! Core components for the ThermArc thermal video codec.
//!
//! This crate provides the building blocks the frame codec is assembled from:
//!
//! - [`bitstream`]: MSB-first variable-width bit packing
//! - [`twos`]: Fixed-width two's complement conversion
//! - [`width`]: Minimal per-frame bit width selection
//! - [`camera`]: Camera resolution and frame rate
//! - [`frame`]: 16-bit sample grids
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Container (out of scope)                                │
//! │     file headers, timestamps, telemetry                 │
//! ├─────────────────────────────────────────────────────────┤
//! │ Codec (thermarc-cptv)                                   │
//! │     temporal + spatial prediction, Compressor           │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitStream (this crate)                                  │
//! │     BitReader/BitWriter, two's complement, widths       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use thermarc_core::bitstream::{BitReader, BitWriter};
//! use thermarc_core::width::select_width;
//!
//! let residuals = [3, -4, 0, 1];
//! let width = select_width(&residuals).unwrap();
//! assert_eq!(width, 3);
//!
//! let mut writer = BitWriter::new();
//! for &r in &residuals {
//!     writer.write_signed(r, width).unwrap();
//! }
//! let packed = writer.finish();
//! assert_eq!(packed.len(), 2);
//!
//! let mut reader = BitReader::new(&packed[..]);
//! for &r in &residuals {
//!     assert_eq!(reader.read_signed(width).unwrap(), r);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod camera;
pub mod error;
pub mod frame;
pub mod twos;
pub mod width;

// Re-exports for convenience
pub use bitstream::{BitReader, BitWriter, packed_len};
pub use camera::CameraSpec;
pub use error::{Result, ThermArcError};
pub use frame::Frame;
pub use width::{MAX_BIT_WIDTH, select_width};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitReader, BitWriter};
    pub use crate::camera::CameraSpec;
    pub use crate::error::{Result, ThermArcError};
    pub use crate::frame::Frame;
}
