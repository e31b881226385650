//! Benchmarks for modulator block encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use delta_mod::dsp::stimulus::{Ramp, SineU8};
use delta_mod::{Modulator, SpikeOut};

use crate::BLOCK_SIZES;

pub fn bench_modulator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dm/modulator");

    for &size in BLOCK_SIZES {
        let mut out = vec![SpikeOut::SILENT; size];

        // Silent path: constant input, nothing ever fires.
        let inputs = vec![128u8; size];
        let mut dm = Modulator::default();
        dm.step(128, 0, true, true);
        group.bench_with_input(BenchmarkId::new("silent", size), &size, |b, _| {
            b.iter(|| {
                dm.process_block(black_box(&inputs), black_box(10), black_box(&mut out));
            })
        });

        // Dense path: steep ramp, a spike nearly every cycle.
        let mut ramp = Ramp::new(40);
        let mut inputs = vec![0u8; size];
        ramp.fill(&mut inputs);
        let mut dm = Modulator::default();
        group.bench_with_input(BenchmarkId::new("dense", size), &size, |b, _| {
            b.iter(|| {
                dm.process_block(black_box(&inputs), black_box(10), black_box(&mut out));
            })
        });

        // Tracking path: sine input, mixed silent and firing cycles.
        let mut sine = SineU8::new(256);
        let mut inputs = vec![0u8; size];
        sine.fill(&mut inputs);
        let mut dm = Modulator::default();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                dm.process_block(black_box(&inputs), black_box(10), black_box(&mut out));
            })
        });
    }

    group.finish();
}
