//! Interactive terminal loop.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::app::App;
use crate::config::Palette;
use crate::input::map_event;
use crate::ui::{self, ScreenLayout};

/// Restores the terminal on drop, including when the loop errors.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_terminal(palette: Palette) -> Result<()> {
    info!("Starting terminal UI");
    let mut guard = TerminalGuard::new()?;
    let res = run_app(&mut guard.terminal, App::new(), &palette);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    palette: &Palette,
) -> Result<()> {
    let mut layout = ScreenLayout::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            layout = ScreenLayout::new(frame.area());
            ui::draw(frame, &layout, &app, palette);
        })?;

        // Events arrive one at a time; block until the next one.
        let event = event::read().context("Failed to read terminal event")?;
        if let Some(action) = map_event(&event, &layout) {
            app.handle(action);
        }
    }

    info!(status = %app.state().status(), "Leaving game loop");
    Ok(())
}
