//! Headless replay: apply moves from the command line and print the view.

use crate::cli::ReplayArgs;
use crate::config::AppConfig;
use anyhow::Result;
use tictactoe_replay_core::{Event, GameState, ViewModel};
use tracing::{info, instrument};

/// Builds the state a replay ends in.
///
/// Moves that the game rejects are skipped, as they would be in the TUI.
#[instrument(skip_all, fields(moves = args.moves.len(), jump = ?args.jump))]
pub fn replay_state(config: &AppConfig, args: &ReplayArgs) -> GameState {
    let ascending = *config.moves_ascending() && !args.descending;
    let state = args
        .moves
        .iter()
        .map(|pos| Event::Play(*pos))
        .chain(args.jump.map(Event::JumpTo))
        .fold(GameState::new().with_ascending(ascending), GameState::reduce);
    info!(step = state.step(), len = state.history().len(), "Replay finished");
    state
}

/// Plain-text rendering of a state: board, status line and move list.
pub fn render_text(state: &GameState) -> String {
    let view = ViewModel::from(state);
    let mut out = String::new();
    out.push_str(&state.board().display());
    out.push_str("\n\n");
    out.push_str(&view.status_line);
    out.push_str("\n\nMove History ");
    out.push_str(view.sort_indicator());
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.text()));
    }
    out
}

/// Runs the `replay` command.
pub fn run(config: &AppConfig, args: &ReplayArgs) -> Result<()> {
    crate::logging::init_stderr(config);
    let state = replay_state(config, args);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&ViewModel::from(&state))?);
    } else {
        print!("{}", render_text(&state));
    }
    Ok(())
}
