//! Fixed-width two's complement conversion.
//!
//! Residuals are signed, the bitstream only carries unsigned codes. For a
//! width `w` the representable range is `[-2^(w-1), 2^(w-1) - 1]`; a
//! negative value is stored as `value + 2^w`.
//!
//! ```
//! use thermarc_core::twos;
//!
//! assert_eq!(twos::encode(-1, 4), 15);
//! assert_eq!(twos::decode(15, 4), -1);
//! assert_eq!(twos::encode(-8192, 14), 8192);
//! ```

#[inline]
fn mask(width: u8) -> u64 {
    (1u64 << width) - 1
}

/// Encode `value` as a `width`-bit two's complement code.
///
/// `value` must fit in `width` bits (see [`fits`]) and `width` must be in
/// `1..=32`. Bits above `width` are always zero in the result.
#[inline]
pub fn encode(value: i32, width: u8) -> u32 {
    debug_assert!((1..=32).contains(&width), "width {width} out of range");
    debug_assert!(fits(value, width), "{value} does not fit in {width} bits");

    ((value as i64 as u64) & mask(width)) as u32
}

/// Decode a `width`-bit two's complement code back to a signed value.
///
/// Bits of `code` above `width` are ignored.
#[inline]
pub fn decode(code: u32, width: u8) -> i32 {
    debug_assert!((1..=32).contains(&width), "width {width} out of range");

    let code = code as u64 & mask(width);
    let sign_bit = 1u64 << (width - 1);
    if code & sign_bit != 0 {
        (code as i64 - (1i64 << width)) as i32
    } else {
        code as i32
    }
}

/// Check whether `value` is representable in `width` bits.
#[inline]
pub fn fits(value: i32, width: u8) -> bool {
    if width == 0 {
        return false;
    }
    let half = 1i64 << (width - 1);
    (-half..half).contains(&(value as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let cases: &[(i32, u8, u32)] = &[
            (-1, 4, 15),
            // Width 8
            (0, 8, 0),
            (1, 8, 1),
            (-1, 8, 255),
            (15, 8, 15),
            (-15, 8, 241),
            (127, 8, 127),
            (-127, 8, 129),
            (-128, 8, 128),
            (-12, 9, 500),
            // Width 5
            (0, 5, 0),
            (1, 5, 1),
            (-1, 5, 31),
            (15, 5, 15),
            (-15, 5, 17),
            (-16, 5, 16),
            // Width 14
            (0, 14, 0),
            (1, 14, 1),
            (-1, 14, 16383),
            (15, 14, 15),
            (-15, 14, 16369),
            (8191, 14, 8191),
            (-8192, 14, 8192),
        ];

        for &(value, width, expected) in cases {
            let code = encode(value, width);
            assert_eq!(code, expected, "encode({value}, {width})");
            assert_eq!(decode(code, width), value, "decode({code}, {width})");
        }
    }

    #[test]
    fn test_width_one() {
        assert_eq!(encode(0, 1), 0);
        assert_eq!(encode(-1, 1), 1);
        assert_eq!(decode(1, 1), -1);
        assert!(!fits(1, 1));
    }

    #[test]
    fn test_width_32_extremes() {
        assert_eq!(encode(i32::MIN, 32), 0x8000_0000);
        assert_eq!(decode(0x8000_0000, 32), i32::MIN);
        assert_eq!(encode(i32::MAX, 32), 0x7FFF_FFFF);
        assert_eq!(decode(u32::MAX, 32), -1);
    }

    #[test]
    fn test_decode_ignores_high_bits() {
        assert_eq!(decode(0xFFFF_0003, 4), 3);
        assert_eq!(decode(0x1F, 4), -1);
    }

    #[test]
    fn test_fits_boundaries() {
        assert!(fits(127, 8));
        assert!(fits(-128, 8));
        assert!(!fits(128, 8));
        assert!(!fits(-129, 8));
        assert!(!fits(0, 0));
    }
}
