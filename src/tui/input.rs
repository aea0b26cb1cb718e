//! Keyboard and mouse input mapping.

use super::ui::{Regions, contains, list_offset};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_replay_core::{Event, Position, ViewModel};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed an event to the game.
    Game(Event),
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the board cursor.
    PlayCursor,
    /// Show the previous history step.
    StepBack,
    /// Show the next history step.
    StepForward,
    /// Show the empty starting board.
    JumpStart,
    /// Show the latest move.
    JumpLatest,
    /// Leave the app.
    Quit,
}

/// Maps a key press to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(|pos| Action::Game(Event::Play(pos))),
        KeyCode::Char('s') => Some(Action::Game(Event::ToggleSort)),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key.code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1).max(1), col),
        KeyCode::Down => ((row + 1).min(3), col),
        KeyCode::Left => (row, col.saturating_sub(1).max(1)),
        KeyCode::Right => (row, (col + 1).min(3)),
        _ => (row, col),
    };
    Position::from_row_column(row, col).unwrap_or(cursor)
}

/// Maps a left click at terminal cell (`x`, `y`) to a game event.
pub fn hit_test(regions: &Regions, view: &ViewModel, x: u16, y: u16) -> Option<Event> {
    if let Some(pos) = Position::ALL
        .iter()
        .copied()
        .find(|pos| contains(regions.cells[pos.to_index()], x, y))
    {
        return Some(Event::Play(pos));
    }

    if contains(regions.sort_toggle, x, y) {
        return Some(Event::ToggleSort);
    }

    if contains(regions.moves, x, y) {
        let offset = list_offset(view, regions.moves.height as usize);
        let row = usize::from(y - regions.moves.y);
        return view.moves.get(offset + row).map(|entry| Event::JumpTo(entry.step));
    }

    None
}
