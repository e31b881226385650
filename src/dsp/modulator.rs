//! Synchronous delta modulator: threshold-crossing spike encoder.

/*
Delta Modulator
===============

This module implements the crate's core primitive: a behavioral model of a
synchronous delta modulator. Instead of transmitting an 8-bit sample every
cycle, the modulator tracks the input with an internal reference and emits a
one-cycle "spike" only when the input has moved far enough away from that
reference. Slow or static signals produce (almost) no traffic.

Vocabulary
----------

  ref_val     The modulator's internal estimate of the input. A single 8-bit
              register, the only persistent state. Updated only when a spike
              fires, and then it snaps to the exact input value.

  data_in     The live 8-bit input sample. Read fresh each cycle, never stored.

  threshold   Minimum deviation required to fire. Also 8-bit, read fresh each
              cycle, so the sensitivity can be retuned on the fly.

  error       The signed difference data_in - ref_val, recomputed each cycle.
              Needs more than 8 bits: two u8 operands subtract into the range
              [-255, +255], so we widen to i16 before subtracting.

  spike_on    One-cycle event: the input rose at least `threshold` above the
              reference.

  spike_off   One-cycle event: the input fell at least `threshold` below the
              reference. Complementary channel to spike_on.


The Update Rule
---------------

Evaluated once per rising clock edge (one `step` call = one edge):

    error = data_in - ref_val          (signed, i16)

    error >= +threshold   →  spike_on,  ref_val := data_in
    error <= -threshold   →  spike_off, ref_val := data_in
    otherwise             →  no spike,  ref_val unchanged

The reference snaps to the input in full - no partial step toward it. After
any spike the error is exactly zero, so a well-behaved input goes quiet for
at least one cycle.

    input      ____/‾‾‾‾\____          spikes:
              ·    ↑    ↓    ·             on   at the rise
    ref_val   ____/‾‾‾‾\____               off  at the fall

Tie-break: the positive branch is tested first. With threshold = 0 every
cycle fires, and an error of exactly 0 lands on spike_on. That ordering is
deliberate and covered by a test, not an accident of implementation.


Registered Outputs
------------------

spike_on / spike_off are registered outputs: the pair returned by a `step`
call is what an observer sees after that clock edge, and it reflects the
inputs sampled at that same edge. There is no extra pipeline stage - change
data_in or threshold and the very next `step` acts on the new values.


Reset and Enable
----------------

rst_n is an active-low synchronous reset: while it is held low, every edge
forces ref_val to 0 and both outputs low, and the input is not sampled.
Reset overrides everything, including enable.

enable models power gating / a shared output bus. While low, ref_val is
frozen and the input is not sampled. What the outputs show is a build-time
choice (`EnablePolicy`): `Hold` keeps the last registered pair visible,
`Clear` drives both lines inactive. Real hardware may tristate the bus
instead; a software model has no undriven state, so Clear is the stand-in.


Failure Semantics
-----------------

None. Every bit pattern on every input is legal, the rule is total, and the
arithmetic cannot overflow in i16. `step` never panics and returns no Result.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MAX_BLOCK_SIZE;

/// One cycle's registered output pair.
///
/// Mutually exclusive for any threshold > 0 (a consequence of the update
/// rule, not an enforced invariant - threshold = 0 still picks one side via
/// the tie-break).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpikeOut {
    pub spike_on: bool,
    pub spike_off: bool,
}

impl SpikeOut {
    /// Both channels low.
    pub const SILENT: Self = Self {
        spike_on: false,
        spike_off: false,
    };

    /// True when neither channel fired this cycle.
    #[inline]
    pub fn is_silent(self) -> bool {
        !self.spike_on && !self.spike_off
    }
}

/// What the outputs show while `enable` is low.
///
/// State is frozen and the input unsampled either way; this only selects the
/// visible output convention. See the module notes on tristate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnablePolicy {
    /// Outputs keep their last registered value.
    #[default]
    Hold,
    /// Outputs driven inactive (both low).
    Clear,
}

/// The delta modulator state machine.
///
/// One `ref_val` register plus the registered output pair. `step` is the
/// clock edge; everything else is accessors and block-processing sugar.
pub struct Modulator {
    ref_val: u8,
    out: SpikeOut,
    policy: EnablePolicy,
}

impl Default for Modulator {
    fn default() -> Self {
        Self::new(EnablePolicy::Hold)
    }
}

impl Modulator {
    pub fn new(policy: EnablePolicy) -> Self {
        Self {
            ref_val: 0,
            out: SpikeOut::SILENT,
            policy,
        }
    }

    /// Advance one clock edge.
    ///
    /// Samples `data_in` and `threshold`, applies the update rule, and
    /// returns the registered outputs as observed after this edge.
    /// `rst_n` is active-low and overrides `enable`.
    pub fn step(&mut self, data_in: u8, threshold: u8, enable: bool, rst_n: bool) -> SpikeOut {
        if !rst_n {
            self.ref_val = 0;
            self.out = SpikeOut::SILENT;
            return self.out;
        }

        if !enable {
            if matches!(self.policy, EnablePolicy::Clear) {
                self.out = SpikeOut::SILENT;
            }
            return self.out;
        }

        // i16 holds the full [-255, +255] difference without wraparound.
        let error = data_in as i16 - self.ref_val as i16;
        let threshold = threshold as i16;

        self.out = if error >= threshold {
            // Positive branch first: threshold = 0 with error = 0 lands here.
            self.ref_val = data_in;
            SpikeOut {
                spike_on: true,
                spike_off: false,
            }
        } else if error <= -threshold {
            self.ref_val = data_in;
            SpikeOut {
                spike_on: false,
                spike_off: true,
            }
        } else {
            SpikeOut::SILENT
        };

        self.out
    }

    /// Encode a block of samples at a fixed threshold, one output per input.
    ///
    /// Models steady-state streaming: enable high, reset deasserted. Wiggle
    /// the control lines per cycle through `step` instead. Blocks are capped
    /// at [`MAX_BLOCK_SIZE`] samples; split longer transfers.
    pub fn process_block(&mut self, inputs: &[u8], threshold: u8, out: &mut [SpikeOut]) {
        debug_assert_eq!(inputs.len(), out.len());
        debug_assert!(inputs.len() <= MAX_BLOCK_SIZE);

        for (sample, slot) in inputs.iter().zip(out.iter_mut()) {
            *slot = self.step(*sample, threshold, true, true);
        }
    }

    /// Hold reset for one cycle (software convenience for `rst_n` low).
    pub fn reset(&mut self) {
        self.ref_val = 0;
        self.out = SpikeOut::SILENT;
    }

    /// Current registered output pair.
    pub fn output(&self) -> SpikeOut {
        self.out
    }

    /// Current reference value. Read-only; only `step`/`reset` mutate it.
    pub fn reference(&self) -> u8 {
        self.ref_val
    }

    pub fn policy(&self) -> EnablePolicy {
        self.policy
    }
}
