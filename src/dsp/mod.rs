//! Low-level signal primitives for the delta-modulation pipeline.
//!
//! These components are allocation-free and realtime-safe after
//! construction, so they can sit directly inside an acquisition loop. They
//! intentionally stay focused on the state-transition math; the io layer
//! handles bus mapping and event transport.

/// The core: synchronous delta modulator state machine.
pub mod modulator;
/// Receiver-side estimate rebuilt from the spike stream.
pub mod reconstruct;
/// Deterministic 8-bit test-signal generators.
pub mod stimulus;

pub use modulator::{EnablePolicy, Modulator, SpikeOut};
pub use reconstruct::Reconstructor;
