// Purpose - external interfaces: output bus mapping, spike events, transport

/*
The Output Bus
==============

On the wire the modulator drives an 8-bit output bus:

    bit 0   spike_on
    bit 1   spike_off
    bits 2-7  reserved, tied to 0

Reserved bits are driven low rather than left floating so the bus reads
deterministically; `from_bus` ignores them so a future revision can claim
them without breaking today's receivers.

Spike Events
============

A spike stream is sparse by construction: most cycles carry nothing. The
event representation keeps only the cycles that fired - a tick number plus
a polarity - which is what actually crosses a telemetry link. Behind the
default `rtrb` feature the crate provides a lock-free SPSC ring for handing
events from an acquisition thread to a consumer without blocking or
allocating on the realtime side. A full ring drops the event and tells the
caller; it never blocks.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::modulator::SpikeOut;

/// Bus bit positions for the two spike channels.
pub const SPIKE_ON_BIT: u8 = 0;
pub const SPIKE_OFF_BIT: u8 = 1;

/// Pack an output pair onto the 8-bit bus. Reserved bits 2-7 read 0.
#[inline]
pub fn to_bus(out: SpikeOut) -> u8 {
    (out.spike_on as u8) << SPIKE_ON_BIT | (out.spike_off as u8) << SPIKE_OFF_BIT
}

/// Decode the two spike channels from the bus, ignoring reserved bits.
#[inline]
pub fn from_bus(bus: u8) -> SpikeOut {
    SpikeOut {
        spike_on: bus & (1 << SPIKE_ON_BIT) != 0,
        spike_off: bus & (1 << SPIKE_OFF_BIT) != 0,
    }
}

/// Direction of a spike.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Input rose at least one threshold above the reference.
    On,
    /// Input fell at least one threshold below the reference.
    Off,
}

/// One spike, stamped with the clock cycle it fired on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpikeEvent {
    pub tick: u64,
    pub polarity: Polarity,
}

impl SpikeEvent {
    /// Convert one cycle's output pair into an event, if anything fired.
    ///
    /// Silent cycles return `None` - that is the sparseness of the encoding.
    /// spike_on wins if both bits are somehow set (only reachable through a
    /// hand-built `SpikeOut`; the modulator never emits both).
    pub fn from_output(out: SpikeOut, tick: u64) -> Option<Self> {
        if out.is_silent() {
            return None;
        }

        let polarity = if out.spike_on {
            Polarity::On
        } else {
            Polarity::Off
        };
        Some(Self { tick, polarity })
    }
}

/// Sink for spike events. Returns false if the event was dropped.
pub trait EventSink {
    fn push(&mut self, event: SpikeEvent) -> bool;
}

impl EventSink for Vec<SpikeEvent> {
    fn push(&mut self, event: SpikeEvent) -> bool {
        Vec::push(self, event);
        true
    }
}

/// Source of spike events on the receiving side.
pub trait EventSource {
    fn pop(&mut self) -> Option<SpikeEvent>;
}

#[cfg(feature = "rtrb")]
impl EventSink for rtrb::Producer<SpikeEvent> {
    /// Non-blocking push; a full ring drops the event.
    fn push(&mut self, event: SpikeEvent) -> bool {
        rtrb::Producer::push(self, event).is_ok()
    }
}

#[cfg(feature = "rtrb")]
impl EventSource for rtrb::Consumer<SpikeEvent> {
    fn pop(&mut self) -> Option<SpikeEvent> {
        rtrb::Consumer::pop(self).ok()
    }
}

/// Lock-free SPSC channel for handing spikes off the acquisition thread.
#[cfg(feature = "rtrb")]
pub fn spike_channel(
    capacity: usize,
) -> (rtrb::Producer<SpikeEvent>, rtrb::Consumer<SpikeEvent>) {
    rtrb::RingBuffer::new(capacity)
}
