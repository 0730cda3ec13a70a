//! Property tests for two's complement, width selection and bit packing.

use proptest::prelude::*;
use thermarc_core::bitstream::{BitReader, BitWriter, packed_len};
use thermarc_core::twos;
use thermarc_core::width::{required_bits, select_width};

/// A width in 1..=16 together with a value representable at that width.
fn width_and_value() -> impl Strategy<Value = (u8, i32)> {
    (1u8..=16).prop_flat_map(|w| {
        let half = 1i32 << (w - 1);
        (Just(w), -half..half)
    })
}

proptest! {
    #[test]
    fn prop_twos_bijection((width, value) in width_and_value()) {
        let code = twos::encode(value, width);
        prop_assert!(code < (1u32 << width));
        prop_assert_eq!(twos::decode(code, width), value);
    }

    #[test]
    fn prop_selected_width_is_minimal(
        residuals in prop::collection::vec(-32768i32..32768, 1..200)
    ) {
        let width = select_width(&residuals).unwrap();
        prop_assert!((1..=16).contains(&width));
        prop_assert!(residuals.iter().all(|&r| twos::fits(r, width)));
        if width > 1 {
            prop_assert!(
                !residuals.iter().all(|&r| twos::fits(r, width - 1)),
                "width {} is not minimal", width
            );
        }
    }

    #[test]
    fn prop_required_bits_matches_fits(value in any::<i32>()) {
        let bits = required_bits(value);
        prop_assert!(twos::fits(value, bits));
        if bits > 1 {
            prop_assert!(!twos::fits(value, bits - 1));
        }
    }

    #[test]
    fn prop_packing_density(
        width in 1u8..=16,
        raw in prop::collection::vec(any::<u32>(), 0..300)
    ) {
        let mask = (1u32 << width) - 1;
        let values: Vec<u32> = raw.iter().map(|v| v & mask).collect();

        let mut writer = BitWriter::new();
        for &v in &values {
            writer.write_value(v, width).unwrap();
        }
        let data = writer.finish();
        prop_assert_eq!(data.len(), packed_len(values.len(), width));

        let mut reader = BitReader::new(&data[..]);
        for &v in &values {
            prop_assert_eq!(reader.read_value(width).unwrap(), v);
        }
    }

    #[test]
    fn prop_mixed_width_sequence(
        items in prop::collection::vec((1u8..=16, any::<u32>()), 1..100)
    ) {
        let mut writer = BitWriter::new();
        for &(w, v) in &items {
            writer.write_value(v, w).unwrap();
        }
        let total_bits: u64 = items.iter().map(|&(w, _)| w as u64).sum();
        prop_assert_eq!(writer.bits_written(), total_bits);
        let data = writer.finish();

        let mut reader = BitReader::new(&data[..]);
        for &(w, v) in &items {
            prop_assert_eq!(reader.read_value(w).unwrap(), v & ((1u32 << w) - 1));
        }
    }
}
