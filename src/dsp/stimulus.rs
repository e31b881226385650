//! 8-bit test-signal generators for driving the modulator.

/*
Stimulus Sources
================

The modulator is only interesting when something moves on its input. These
generators produce deterministic 8-bit waveforms for tests, benches and the
scope binary. They follow the same shape as the modulator itself: small
structs, per-sample `next_sample`, a `fill` block helper, `reset`.

  Ramp      Wrapping up-count by a fixed step. The classic delta-modulation
            workout: a slope the encoder either keeps up with (slope below
            threshold per cycle: sparse spikes) or can't (dense spikes).

  StepSeq   Cycles through a list of levels, holding each for a fixed number
            of samples. Square-ish, exercises the large-jump snap behavior.

  SineU8    Phase-accumulator sine mapped onto 0..=255. Smooth bidirectional
            motion; spike density follows the slope through the cycle.

All three are allocation-free after construction and produce the same
sequence after `reset` - tests rely on that determinism.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use core::f32::consts::TAU;

/// Wrapping ramp: starts at 0, adds `step` each sample, wraps at 256.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct Ramp {
    step: u8,
    value: u8,
}

impl Ramp {
    pub fn new(step: u8) -> Self {
        Self { step, value: 0 }
    }

    #[inline]
    pub fn next_sample(&mut self) -> u8 {
        let out = self.value;
        self.value = self.value.wrapping_add(self.step);
        out
    }

    pub fn fill(&mut self, buffer: &mut [u8]) {
        for slot in buffer.iter_mut() {
            *slot = self.next_sample();
        }
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Steps through `levels`, holding each for `hold` samples, then repeats.
pub struct StepSeq {
    levels: Vec<u8>,
    hold: u32,
    index: usize,
    elapsed: u32,
}

impl StepSeq {
    /// `levels` must be non-empty; `hold` is clamped to at least 1 sample.
    pub fn new(levels: Vec<u8>, hold: u32) -> Self {
        debug_assert!(!levels.is_empty());
        Self {
            levels,
            hold: hold.max(1),
            index: 0,
            elapsed: 0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> u8 {
        let out = self.levels[self.index];
        self.elapsed += 1;
        if self.elapsed >= self.hold {
            self.elapsed = 0;
            self.index = (self.index + 1) % self.levels.len();
        }
        out
    }

    pub fn fill(&mut self, buffer: &mut [u8]) {
        for slot in buffer.iter_mut() {
            *slot = self.next_sample();
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0;
    }
}

/// Sine wave quantized to the u8 range, `period` samples per cycle.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct SineU8 {
    period: u32,
    phase: u32,
}

impl SineU8 {
    /// `period` is clamped to at least 2 samples per cycle.
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(2),
            phase: 0,
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> u8 {
        let angle = TAU * self.phase as f32 / self.period as f32;
        self.phase = (self.phase + 1) % self.period;

        // Map [-1, +1] onto [0, 255], rounding to nearest.
        let unipolar = (angle.sin() + 1.0) * 0.5;
        (unipolar * 255.0).round() as u8
    }

    pub fn fill(&mut self, buffer: &mut [u8]) {
        for slot in buffer.iter_mut() {
            *slot = self.next_sample();
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_counts_and_wraps() {
        let mut ramp = Ramp::new(100);
        assert_eq!(ramp.next_sample(), 0);
        assert_eq!(ramp.next_sample(), 100);
        assert_eq!(ramp.next_sample(), 200);
        assert_eq!(ramp.next_sample(), 44, "ramp must wrap modulo 256");
    }

    #[test]
    fn ramp_repeats_after_reset() {
        let mut ramp = Ramp::new(7);
        let mut first = [0u8; 16];
        ramp.fill(&mut first);

        ramp.reset();
        let mut second = [0u8; 16];
        ramp.fill(&mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn step_seq_holds_then_advances() {
        let mut seq = StepSeq::new(vec![10, 250], 3);
        let mut out = [0u8; 8];
        seq.fill(&mut out);
        assert_eq!(out, [10, 10, 10, 250, 250, 250, 10, 10]);
    }

    #[test]
    fn sine_spans_the_u8_range() {
        let mut sine = SineU8::new(64);
        let mut out = [0u8; 64];
        sine.fill(&mut out);

        assert_eq!(out[0], 128, "phase 0 must sit at mid-scale");
        assert!(out.iter().any(|&s| s >= 250), "peak should approach 255");
        assert!(out.iter().any(|&s| s <= 5), "trough should approach 0");
    }

    #[test]
    fn sine_period_is_exact() {
        let mut sine = SineU8::new(48);
        let mut a = [0u8; 48];
        let mut b = [0u8; 48];
        sine.fill(&mut a);
        sine.fill(&mut b);
        assert_eq!(a, b, "consecutive periods must be identical");
    }
}
