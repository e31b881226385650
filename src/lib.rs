pub mod dsp;
pub mod io; // External interface: bus mapping, spike events, realtime channel

pub use dsp::modulator::{EnablePolicy, Modulator, SpikeOut};
pub use dsp::reconstruct::Reconstructor;

/// Largest block `process_block`-style helpers are expected to see per call.
pub const MAX_BLOCK_SIZE: usize = 2048;
