//! Camera capability description.
//!
//! The codec only needs the sensor resolution to size and validate frames;
//! the frame rate is carried for callers and containers. A `CameraSpec` is
//! plain data so it can be loaded from a device configuration file with any
//! serde format:
//!
//! ```
//! use thermarc_core::CameraSpec;
//!
//! let spec = CameraSpec::new(160, 120, 9).unwrap();
//! assert_eq!(spec.sample_count(), 19200);
//! ```

use crate::error::{Result, ThermArcError};
use serde::{Deserialize, Serialize};

/// Resolution and frame rate of a thermal camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CameraSpec {
    /// Horizontal resolution (columns).
    pub res_x: u32,
    /// Vertical resolution (rows).
    pub res_y: u32,
    /// Frames per second.
    pub fps: u32,
}

impl CameraSpec {
    /// Lepton 3 class sensor: 160x120 at 9 fps.
    pub const LEPTON3: Self = Self {
        res_x: 160,
        res_y: 120,
        fps: 9,
    };

    /// Create a validated camera description.
    pub fn new(res_x: u32, res_y: u32, fps: u32) -> Result<Self> {
        let spec = Self { res_x, res_y, fps };
        spec.validate()?;
        Ok(spec)
    }

    /// Check that every field is positive.
    ///
    /// Call this after deserializing, since serde bypasses [`CameraSpec::new`].
    pub fn validate(&self) -> Result<()> {
        if self.res_x == 0 || self.res_y == 0 {
            return Err(ThermArcError::invalid_camera(format!(
                "resolution must be non-zero, got {}x{}",
                self.res_x, self.res_y
            )));
        }
        if self.fps == 0 {
            return Err(ThermArcError::invalid_camera("frame rate must be non-zero"));
        }
        Ok(())
    }

    /// Columns per frame.
    pub fn width(&self) -> usize {
        self.res_x as usize
    }

    /// Rows per frame.
    pub fn height(&self) -> usize {
        self.res_y as usize
    }

    /// Samples per frame.
    pub fn sample_count(&self) -> usize {
        self.width() * self.height()
    }
}
