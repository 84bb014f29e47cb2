//! Terminal rendering of time-series figures.
//!
//! Feature-gated behind `tui`. [`show`] opens an interactive viewer;
//! [`save`] draws the same figure off-screen and writes it as text.

mod controls;
/// Figure widget and chart construction.
pub mod layout;
/// Viewer paging state.
pub mod runtime;
mod style;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Widget;

use crate::data::TimeSeriesSet;
use crate::options::PlotStyle;
use layout::Figure;
use runtime::{MIN_CHART_ROWS, Viewer};

/// Width of saved figures in columns.
pub const SAVE_WIDTH: u16 = 100;

const FOOTER_HINT: &str = " q:Quit  n/→:Next  p/←:Previous";

/// Displays the figure until the user quits.
///
/// Sets up the terminal (raw mode, alternate screen), runs the event loop,
/// and restores the terminal on exit.
///
/// # Errors
///
/// Returns the I/O error that stopped terminal setup or drawing.
pub fn show(title: &str, set: &TimeSeriesSet, style: &PlotStyle) -> io::Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e);
        }
    };

    let result = event_loop(&mut terminal, title, set, style);

    // Teardown, always restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    set: &TimeSeriesSet,
    style: &PlotStyle,
) -> io::Result<()> {
    let rows = terminal.size()?.height.saturating_sub(2);
    let mut viewer = Viewer::new(set.len(), rows);

    loop {
        terminal.draw(|frame| {
            let figure = Figure {
                title,
                set,
                style,
                visible: viewer.visible(),
                footer: Some(FOOTER_HINT),
            };
            frame.render_widget(&figure, frame.area());
        })?;

        if viewer.quit {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => controls::handle_key(&mut viewer, key),
            Event::Resize(_, height) => viewer.resize(height.saturating_sub(2)),
            _ => {}
        }
    }
}

/// Draws every series into an off-screen buffer and returns it as text.
pub fn render_text(title: &str, set: &TimeSeriesSet, style: &PlotStyle) -> String {
    let charts = u16::try_from(set.len().max(1)).unwrap_or(u16::MAX);
    let height = (MIN_CHART_ROWS * 2).saturating_mul(charts).saturating_add(1);
    let area = Rect::new(0, 0, SAVE_WIDTH, height);
    let mut buf = Buffer::empty(area);
    let figure = Figure {
        title,
        set,
        style,
        visible: 0..set.len(),
        footer: None,
    };
    (&figure).render(area, &mut buf);

    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buf.cell(Position::new(x, y)).map_or(" ", |c| c.symbol()))
            .collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Writes the rendered figure to `path`.
///
/// # Errors
///
/// Returns an `io::Error` if the file cannot be written.
pub fn save(path: &Path, title: &str, set: &TimeSeriesSet, style: &PlotStyle) -> io::Result<()> {
    fs::write(path, render_text(title, set, style))
}
