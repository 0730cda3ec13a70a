//! Per-frame bit width selection.
//!
//! A frame is packed with a single width for all of its residuals. The
//! width is the smallest two's complement size that holds both the largest
//! and the smallest residual. The negative side of the range is one wider
//! than the positive side, so `-8` fits in 4 bits while `8` needs 5.

use crate::error::{Result, ThermArcError};

/// Largest width a frame may be packed with.
pub const MAX_BIT_WIDTH: u8 = 16;

/// Minimum two's complement width that can represent `value`.
///
/// Zero and `-1` need a single bit.
#[inline]
pub fn required_bits(value: i32) -> u8 {
    // For negatives, !value == -value - 1 has the same magnitude bits.
    let magnitude = (if value < 0 { !value } else { value }) as u32;
    (u32::BITS - magnitude.leading_zeros()) as u8 + 1
}

/// Smallest width in `1..=16` that represents every residual.
///
/// An empty or all-zero set selects 1. Residuals needing more than
/// [`MAX_BIT_WIDTH`] bits are reported as [`ThermArcError::BitWidthOverflow`]
/// rather than truncated.
pub fn select_width(residuals: &[i32]) -> Result<u8> {
    let (min, max) = residuals
        .iter()
        .fold((0i32, 0i32), |(lo, hi), &r| (lo.min(r), hi.max(r)));

    let width = required_bits(min).max(required_bits(max));
    if width > MAX_BIT_WIDTH {
        return Err(ThermArcError::bit_width_overflow(width, MAX_BIT_WIDTH));
    }
    Ok(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_bits() {
        assert_eq!(required_bits(0), 1);
        assert_eq!(required_bits(-1), 1);
        assert_eq!(required_bits(1), 2);
        assert_eq!(required_bits(-2), 2);
        assert_eq!(required_bits(7), 4);
        assert_eq!(required_bits(-8), 4);
        assert_eq!(required_bits(8), 5);
        assert_eq!(required_bits(-9), 5);
        assert_eq!(required_bits(8191), 14);
        assert_eq!(required_bits(-8192), 14);
        assert_eq!(required_bits(8192), 15);
        assert_eq!(required_bits(i32::MAX), 32);
        assert_eq!(required_bits(i32::MIN), 32);
    }

    #[test]
    fn test_select_width_small_sets() {
        assert_eq!(select_width(&[]).unwrap(), 1);
        assert_eq!(select_width(&[0, 0, 0]).unwrap(), 1);
        assert_eq!(select_width(&[-1, 0]).unwrap(), 1);
        assert_eq!(select_width(&[-1, 0, 1]).unwrap(), 2);
        assert_eq!(select_width(&[-128, 127]).unwrap(), 8);
        assert_eq!(select_width(&[-129]).unwrap(), 9);
        assert_eq!(select_width(&[3, -16, 2]).unwrap(), 5);
    }

    #[test]
    fn test_select_width_limits() {
        assert_eq!(select_width(&[-32768, 32767]).unwrap(), 16);

        let err = select_width(&[0, 32768]).unwrap_err();
        assert!(matches!(
            err,
            ThermArcError::BitWidthOverflow {
                required: 17,
                max: 16
            }
        ));

        let err = select_width(&[-131070]).unwrap_err();
        assert!(matches!(
            err,
            ThermArcError::BitWidthOverflow { required: 18, .. }
        ));
    }
}
