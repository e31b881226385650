//! Benchmarks for the stimulus generators.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use delta_mod::dsp::stimulus::{Ramp, SineU8};

use crate::BLOCK_SIZES;

pub fn bench_stimulus(c: &mut Criterion) {
    let mut group = c.benchmark_group("dm/stimulus");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0u8; size];

        let mut ramp = Ramp::new(3);
        group.bench_with_input(BenchmarkId::new("ramp", size), &size, |b, _| {
            b.iter(|| {
                ramp.fill(black_box(&mut buffer));
            })
        });

        let mut sine = SineU8::new(256);
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                sine.fill(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
