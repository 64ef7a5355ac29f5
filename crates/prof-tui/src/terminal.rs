//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Instant;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use prof_session::NarrativeService;
use ratatui::prelude::*;
use tracing::info;

use crate::app::TuiApp;
use crate::views;

/// Launch the TUI application.
pub fn run<S: NarrativeService + 'static>(mut app: TuiApp<S>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    info!("Terminal UI started");
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    info!("Terminal UI stopped");

    result
}

/// Main event loop. Redraws every tick so the reveal and finished
/// requests show up without input.
fn run_loop<S: NarrativeService + 'static>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<S>,
) -> Result<(), String> {
    let mut last_tick = Instant::now();
    loop {
        app.poll_completions();
        let now = Instant::now();
        app.screen.tick(now - last_tick);
        last_tick = now;

        terminal
            .draw(|frame| views::draw(frame, &app.screen))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if !event::poll(app.config.tick_rate).map_err(|e| format!("event error: {e}"))? {
            continue;
        }
        let event = event::read().map_err(|e| format!("event error: {e}"))?;
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size().map_err(|e| format!("terminal error: {e}"))?;
                app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
        }
    }
}
