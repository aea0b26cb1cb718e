//! Terminal UI.
//!
//! A synchronous loop: draw the view of the current state, block on one
//! terminal event, turn it into at most one game event, repeat.

pub mod app;
pub mod input;
pub mod ui;

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

pub use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game in the terminal until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    crate::logging::init_file(config)?;
    info!("Starting Tic-Tac-Toe Replay TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.state().history().latest_step(),
        "Leaving Tic-Tac-Toe Replay TUI"
    );
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        let view = app.view();
        let cursor = app.cursor();
        let area = terminal.draw(|f| ui::draw(f, &view, cursor))?.area;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            TermEvent::Mouse(mouse) => app.handle_mouse(mouse, area),
            _ => {}
        }
    }
}
