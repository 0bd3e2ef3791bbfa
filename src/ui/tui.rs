// src/ui/tui.rs
//! Terminal setup and the main event loop.

use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::{
    app::App,
    config::PlayerConfig,
    ui::layout::{chart_inner, compute_layout},
};

/// Redraw often enough for a smooth playhead.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Play `path` in the terminal until the user quits.
pub fn run(path: &Path, config: PlayerConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, path, config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: &Path,
    config: PlayerConfig,
) -> Result<()> {
    let size = terminal.size()?;
    let chart = compute_layout(Rect::new(0, 0, size.width, size.height)).chart;
    let mut app = App::new(path, config, chart_inner(chart))?;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.draw(f))?;
        let timeout = TICK_RATE.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.on_key(key) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            if app.is_loading() {
                app.poll_load();
            }
        }
    }
}
