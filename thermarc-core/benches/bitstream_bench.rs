//! Benchmarks for MSB-first bit packing.
//!
//! Measures pack/unpack throughput at the widths thermal frames actually
//! use: wide first frames (14 bits) and tight temporal frames (2-6 bits).

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use thermarc_core::bitstream::{BitReader, BitWriter};

/// One Lepton-sized frame worth of values.
const VALUES: usize = 160 * 120;

const WIDTHS: [u8; 4] = [2, 6, 14, 16];

fn test_values(width: u8) -> Vec<u32> {
    let mask = (1u32 << width) - 1;
    let mut seed: u64 = 0x5EED_CAFE_F00D_BEEF;
    (0..VALUES)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u32 & mask
        })
        .collect()
}

fn pack(values: &[u32], width: u8) -> Vec<u8> {
    let mut writer = BitWriter::new();
    for &v in values {
        writer.write_value(v, width).unwrap();
    }
    writer.finish()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for width in WIDTHS {
        let values = test_values(width);
        group.throughput(Throughput::Elements(VALUES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &values, |b, values| {
            b.iter(|| black_box(pack(black_box(values), width)));
        });
    }

    group.finish();
}

fn bench_unpack(c: &mut Criterion) {
    let mut group = c.benchmark_group("unpack");

    for width in WIDTHS {
        let packed = pack(&test_values(width), width);
        group.throughput(Throughput::Elements(VALUES as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &packed, |b, packed| {
            b.iter(|| {
                let mut reader = BitReader::new(&packed[..]);
                for _ in 0..VALUES {
                    black_box(reader.read_value(width).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pack, bench_unpack);
criterion_main!(benches);
