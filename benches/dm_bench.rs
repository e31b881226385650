//! Benchmarks for the delta-modulation primitives.
//!
//! Run with: cargo bench
//!
//! The modulator is meant to sit inside an acquisition loop, so block
//! encoding has to stay far below the sample-clock budget. Block sizes
//! mirror typical DMA transfer lengths.
//!
//! Benchmark groups:
//!   - dm/modulator   Block encoding across spike densities
//!   - dm/stimulus    Signal generation (the benches' own overhead floor)

use criterion::{criterion_group, criterion_main};

mod dm;

/// Common block sizes for block-processing benches.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(benches, dm::bench_modulator, dm::bench_stimulus);
criterion_main!(benches);
