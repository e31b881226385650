//! Receiver-side estimate rebuilt from the spike stream.

/*
Reconstruction
==============

The telemetry use case has two ends: the modulator on the sensor side, and a
receiver that only ever sees the spike stream. This module is that receiver.

The receiver knows three things per cycle: did spike_on fire, did spike_off
fire, and what the shared threshold currently is. It does NOT see data_in.
That asymmetry matters:

  encoder   snaps ref_val to the exact input when a spike fires
  decoder   can only step its estimate by the threshold in the spike's
            direction - the exact input value never crossed the wire

So reconstruction is approximate. For an input that moves less than one
threshold per cycle the estimate stays within one threshold of the encoder's
reference. A large jump costs the decoder several cycles' worth of error:
the encoder catches up in one spike, the decoder gains only one threshold
step per spike and the input typically goes quiet before it closes the gap.
That loss is inherent to the encoding, not a defect here - applications that
need exact tracking transmit an occasional absolute sample out of band.

Arithmetic is saturating at the u8 range bounds: a stream of spike_off events
parks the estimate at 0, spike_on at 255, with no wraparound.
*/

use crate::dsp::modulator::SpikeOut;

/// Rebuilds a signal estimate from spike_on/spike_off events alone.
pub struct Reconstructor {
    estimate: u8,
}

impl Default for Reconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl Reconstructor {
    pub fn new() -> Self {
        Self { estimate: 0 }
    }

    /// Consume one cycle's output pair, stepping the estimate by `threshold`
    /// in the spike's direction. Returns the updated estimate.
    ///
    /// `threshold` must be the value the encoder used on that same cycle;
    /// the two ends share it by contract.
    pub fn feed(&mut self, out: SpikeOut, threshold: u8) -> u8 {
        if out.spike_on {
            self.estimate = self.estimate.saturating_add(threshold);
        } else if out.spike_off {
            self.estimate = self.estimate.saturating_sub(threshold);
        }
        self.estimate
    }

    pub fn estimate(&self) -> u8 {
        self.estimate
    }

    /// Return to the power-on estimate (matches the encoder's reset value).
    pub fn reset(&mut self) {
        self.estimate = 0;
    }
}
