//! Scope UI: event loop, stimulus wiring, chart rendering.

use std::time::Duration;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    DefaultTerminal, Frame,
};

use delta_mod::dsp::reconstruct::Reconstructor;
use delta_mod::dsp::stimulus::{Ramp, SineU8, StepSeq};
use delta_mod::{EnablePolicy, Modulator, SpikeOut};

/// Samples kept on screen.
const TRACE_LEN: usize = 512;
/// Clock cycles advanced per rendered frame.
const CYCLES_PER_FRAME: usize = 4;

/// Which generator is feeding data_in.
enum Stimulus {
    Sine(SineU8),
    Ramp(Ramp),
    Steps(StepSeq),
}

impl Stimulus {
    fn next_sample(&mut self) -> u8 {
        match self {
            Stimulus::Sine(s) => s.next_sample(),
            Stimulus::Ramp(r) => r.next_sample(),
            Stimulus::Steps(s) => s.next_sample(),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Stimulus::Sine(_) => "sine",
            Stimulus::Ramp(_) => "ramp",
            Stimulus::Steps(_) => "steps",
        }
    }
}

/// One on-screen sample: everything the modulator saw and produced.
#[derive(Clone, Copy)]
struct TracePoint {
    input: u8,
    reference: u8,
    estimate: u8,
    out: SpikeOut,
}

pub struct ScopeApp {
    modulator: Modulator,
    reconstructor: Reconstructor,
    stimulus: Stimulus,
    threshold: u8,
    enable: bool,
    trace: Vec<TracePoint>,
    should_quit: bool,
}

impl ScopeApp {
    pub fn new() -> Self {
        Self {
            modulator: Modulator::new(EnablePolicy::Hold),
            reconstructor: Reconstructor::new(),
            stimulus: Stimulus::Sine(SineU8::new(256)),
            threshold: 10,
            enable: true,
            trace: Vec::with_capacity(TRACE_LEN),
            should_quit: false,
        }
    }

    /// Run the UI event loop: advance the model, draw, poll keys at ~60fps.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.advance();

            terminal.draw(|frame| self.render(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Clock the modulator a few cycles and append to the scrolling trace.
    fn advance(&mut self) {
        for _ in 0..CYCLES_PER_FRAME {
            let input = self.stimulus.next_sample();
            let out = self.modulator.step(input, self.threshold, self.enable, true);
            let estimate = self.reconstructor.feed(out, self.threshold);

            self.trace.push(TracePoint {
                input,
                reference: self.modulator.reference(),
                estimate,
                out,
            });
        }

        if self.trace.len() > TRACE_LEN {
            let excess = self.trace.len() - TRACE_LEN;
            self.trace.drain(0..excess);
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => self.threshold = self.threshold.saturating_add(1),
            KeyCode::Down => self.threshold = self.threshold.saturating_sub(1),
            KeyCode::Char('e') => self.enable = !self.enable,
            KeyCode::Char('r') => {
                self.modulator.reset();
                self.reconstructor.reset();
            }
            KeyCode::Char('s') => self.cycle_stimulus(),
            _ => {}
        }
    }

    fn cycle_stimulus(&mut self) {
        self.stimulus = match self.stimulus {
            Stimulus::Sine(_) => Stimulus::Ramp(Ramp::new(2)),
            Stimulus::Ramp(_) => {
                Stimulus::Steps(StepSeq::new(vec![5, 15, 0, 200, 195, 175], 64))
            }
            Stimulus::Steps(_) => Stimulus::Sine(SineU8::new(256)),
        };
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(10),   // Waveforms
                Constraint::Length(4), // Spike raster
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        self.render_status(frame, chunks[0]);
        self.render_waveforms(frame, chunks[1]);
        self.render_raster(frame, chunks[2]);

        let help = Paragraph::new(" [Q] Quit  [↑/↓] Threshold  [E] Enable  [R] Reset  [S] Stimulus")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = format!(
            " threshold: {:>3}   enable: {} ({:?})   stimulus: {}   reference: {:>3}",
            self.threshold,
            if self.enable { "on " } else { "OFF" },
            self.modulator.policy(),
            self.stimulus.label(),
            self.modulator.reference(),
        );
        let widget = Paragraph::new(status)
            .block(Block::default().title(" dmscope ").borders(Borders::ALL));
        frame.render_widget(widget, area);
    }

    /// Input, tracked reference and reconstruction as overlaid charts.
    fn render_waveforms(&self, frame: &mut Frame, area: Rect) {
        let as_points = |select: fn(&TracePoint) -> u8| -> Vec<(f64, f64)> {
            self.trace
                .iter()
                .enumerate()
                .map(|(i, point)| (i as f64, select(point) as f64))
                .collect()
        };

        let input = as_points(|p| p.input);
        let reference = as_points(|p| p.reference);
        let estimate = as_points(|p| p.estimate);

        let datasets = vec![
            Dataset::default()
                .name("data_in")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&input),
            Dataset::default()
                .name("ref_val")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(&reference),
            Dataset::default()
                .name("reconstructed")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Magenta))
                .data(&estimate),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().title(" Tracking ").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .bounds([0.0, TRACE_LEN as f64])
                    .style(Style::default().fg(Color::DarkGray)),
            )
            .y_axis(
                Axis::default()
                    .bounds([0.0, 255.0])
                    .style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_widget(chart, area);
    }

    /// Two text rows, one per spike channel, aligned with the waveform.
    fn render_raster(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Spikes ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cols = inner.width as usize;
        if cols == 0 || self.trace.is_empty() {
            return;
        }

        // Downsample the trace to terminal columns; a column shows a spike
        // if any cycle it covers fired.
        let row = |fired: fn(&TracePoint) -> bool| -> String {
            (0..cols)
                .map(|col| {
                    let lo = col * self.trace.len() / cols;
                    let hi = ((col + 1) * self.trace.len() / cols).max(lo + 1);
                    if self.trace[lo..hi.min(self.trace.len())].iter().any(fired) {
                        '│'
                    } else {
                        '·'
                    }
                })
                .collect()
        };

        let on_row = Line::styled(row(|p| p.out.spike_on), Style::default().fg(Color::Green));
        let off_row = Line::styled(row(|p| p.out.spike_off), Style::default().fg(Color::Red));
        frame.render_widget(Paragraph::new(vec![on_row, off_row]), inner);
    }
}
