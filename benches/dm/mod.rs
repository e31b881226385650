mod modulator;
mod stimulus;

pub use modulator::bench_modulator;
pub use stimulus::bench_stimulus;
