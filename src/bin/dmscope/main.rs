//! dmscope - terminal scope for the delta modulator
//!
//! Run with: cargo run --bin dmscope
//!
//! Drives a Modulator from a built-in stimulus generator and shows the input
//! waveform, the tracked reference, the receiver-side reconstruction and a
//! two-row spike raster, live.

mod ui;

use ui::ScopeApp;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut terminal = ratatui::init();
    let result = ScopeApp::new().run(&mut terminal);
    ratatui::restore();
    result
}
