//! Lobby system: category selection, rounds and the play-again loop.

mod controller;
mod round;
mod screen;
mod screens;

pub use controller::{ActiveScreen, LobbyController};
pub use round::Round;
pub use screen::{Screen, ScreenTransition};
pub use screens::{CategorySelectScreen, InGameScreen, Notice, RoundOverScreen};

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

/// Takes over the terminal, runs the controller and restores the terminal,
/// even when the loop fails.
#[instrument(skip(controller))]
pub fn run_tui(controller: &mut LobbyController) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = controller.run(&mut terminal);
    if let Err(e) = &result {
        error!(error = %e, "Lobby loop failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Terminal restored");

    result
}
