//! Error types for ThermArc operations.
//!
//! Every failure the codec can report is a variant of [`ThermArcError`].
//! Errors are returned to the immediate caller; none of them leave a
//! compressor or decompressor with partially updated predictor state.

use std::io;
use thiserror::Error;

/// The main error type for ThermArc operations.
#[derive(Debug, Error)]
pub enum ThermArcError {
    /// I/O error from the underlying reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Frame shape disagrees with the camera the codec was built for.
    #[error(
        "Frame dimensions {found_width}x{found_height} do not match camera {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        /// Columns the codec expects.
        expected_width: usize,
        /// Rows the codec expects.
        expected_height: usize,
        /// Columns of the offending frame.
        found_width: usize,
        /// Rows of the offending frame.
        found_height: usize,
    },

    /// A residual set needs more bits than the format allows.
    #[error("Residuals need {required} bits, maximum supported width is {max}")]
    BitWidthOverflow {
        /// Width the residuals actually require.
        required: u8,
        /// Largest width the format supports.
        max: u8,
    },

    /// A bit width outside the supported range was requested.
    #[error("Invalid bit width: {0} (must be 1-16)")]
    InvalidBitWidth(u8),

    /// The bit reader ran out of input before a value was complete.
    #[error("Stream underrun at bit position {bit_position}: {requested} more bits requested")]
    StreamUnderrun {
        /// Bits successfully consumed before the failure.
        bit_position: u64,
        /// Width of the value that could not be read.
        requested: u8,
    },

    /// Decoded data cannot describe a valid frame.
    #[error("Corrupted data at sample {offset}: {message}")]
    CorruptedData {
        /// Scan position where the problem was detected.
        offset: u64,
        /// Description of the corruption.
        message: String,
    },

    /// Camera description is unusable (zero resolution, ragged rows, ...).
    #[error("Invalid camera spec: {message}")]
    InvalidCameraSpec {
        /// Description of the problem.
        message: String,
    },
}

/// Result type alias for ThermArc operations.
pub type Result<T> = std::result::Result<T, ThermArcError>;

impl ThermArcError {
    /// Create a dimension mismatch error from `(width, height)` pairs.
    pub fn dimension_mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected_width: expected.0,
            expected_height: expected.1,
            found_width: found.0,
            found_height: found.1,
        }
    }

    /// Create a bit width overflow error.
    pub fn bit_width_overflow(required: u8, max: u8) -> Self {
        Self::BitWidthOverflow { required, max }
    }

    /// Create a stream underrun error.
    pub fn stream_underrun(bit_position: u64, requested: u8) -> Self {
        Self::StreamUnderrun {
            bit_position,
            requested,
        }
    }

    /// Create a corrupted data error.
    pub fn corrupted(offset: u64, message: impl Into<String>) -> Self {
        Self::CorruptedData {
            offset,
            message: message.into(),
        }
    }

    /// Create an invalid camera spec error.
    pub fn invalid_camera(message: impl Into<String>) -> Self {
        Self::InvalidCameraSpec {
            message: message.into(),
        }
    }

    /// True for errors caused by running out of input.
    pub fn is_underrun(&self) -> bool {
        matches!(self, Self::StreamUnderrun { .. })
    }
}
