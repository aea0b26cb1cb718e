//! Pure projection of a [`GameState`] into what a frontend draws.
//!
//! Nothing here is cached: a frontend rebuilds the [`ViewModel`] from the
//! state after every event.

use crate::rules::GameStatus;
use crate::{GameState, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// Label of one move-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveLabel {
    /// The empty starting board.
    Start,
    /// The board after move `number`.
    Move {
        /// Move number, equal to its history step.
        number: usize,
        /// The square filled by this move.
        position: Option<Position>,
    },
}

impl MoveLabel {
    /// Location text of the move, e.g. `(Col: 2, Row: 3)`.
    pub fn location(&self) -> Option<String> {
        match self {
            MoveLabel::Start => None,
            MoveLabel::Move { position, .. } => position
                .map(|pos| format!("(Col: {}, Row: {})", pos.column(), pos.row())),
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveLabel::Start => write!(f, "Go to game start"),
            MoveLabel::Move { number, .. } => write!(f, "Go to move #{}", number),
        }
    }
}

/// One clickable row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// What the entry says.
    pub label: MoveLabel,
    /// Whether this entry is the displayed step.
    pub current: bool,
}

impl MoveEntry {
    /// Full text of the entry, label followed by location when there is one.
    pub fn text(&self) -> String {
        match self.label.location() {
            Some(location) => format!("{} {}", self.label, location),
            None => self.label.to_string(),
        }
    }
}

/// Builds the move list in display order.
///
/// One entry per history snapshot, oldest first unless the state's sort
/// flag is off.
#[instrument(skip(state), fields(len = state.history().len(), ascending = state.ascending()))]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let history = state.history();
    let mut entries: Vec<MoveEntry> = (0..history.len())
        .map(|step| MoveEntry {
            step,
            label: if step == 0 {
                MoveLabel::Start
            } else {
                MoveLabel::Move {
                    number: step,
                    position: history.changed_square(step),
                }
            },
            current: step == state.step(),
        })
        .collect();

    if !state.ascending() {
        entries.reverse();
    }
    entries
}

/// One cell as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Cell position.
    pub position: Position,
    /// Cell content.
    pub square: Square,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// The nine cells in board order.
    pub cells: [CellView; 9],
    /// Status of the displayed board.
    pub status: GameStatus,
    /// Status line text.
    pub status_line: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Whether the move list is oldest first.
    pub ascending: bool,
}

impl ViewModel {
    /// Arrow shown on the sort toggle.
    pub fn sort_indicator(&self) -> &'static str {
        if self.ascending { "\u{25B2}" } else { "\u{25BC}" }
    }
}

/// Status line text for a state.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won { player, .. } => format!("Winner: {}", player),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", state.to_move()),
    }
}

impl From<&GameState> for ViewModel {
    #[instrument(skip(state), fields(step = state.step()))]
    fn from(state: &GameState) -> Self {
        let board = state.board();
        let status = state.status();
        let line = status.line();
        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|l| l.contains(position)),
        });

        Self {
            cells,
            status,
            status_line: status_line(state),
            moves: move_list(state),
            ascending: state.ascending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_start_label() {
        let entries = move_list(&GameState::new());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, MoveLabel::Start);
        assert_eq!(entries[0].text(), "Go to game start");
        assert!(entries[0].current);
    }

    #[test]
    fn test_center_move_label() {
        let state = GameState::new().play(Position::Center);
        let entries = move_list(&state);
        assert_eq!(
            entries[1].label,
            MoveLabel::Move { number: 1, position: Some(Position::Center) }
        );
        assert_eq!(entries[1].text(), "Go to move #1 (Col: 2, Row: 2)");
    }

    #[test]
    fn test_label_column_and_row_not_swapped() {
        // Index 5 is row 2, column 3.
        let state = GameState::new().play(Position::MiddleRight);
        assert_eq!(move_list(&state)[1].label.location().as_deref(), Some("(Col: 3, Row: 2)"));
    }

    #[test]
    fn test_descending_order() {
        let state = GameState::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .toggle_sort();
        let steps: Vec<usize> = move_list(&state).iter().map(|e| e.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }

    #[test]
    fn test_current_entry_follows_step() {
        let state = GameState::new()
            .play(Position::TopLeft)
            .play(Position::Center)
            .jump_to(1);
        let current: Vec<usize> = move_list(&state)
            .iter()
            .filter(|e| e.current)
            .map(|e| e.step)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_status_lines() {
        let state = GameState::new();
        assert_eq!(status_line(&state), "Next player: X");
        let state = state.play(Position::Center);
        assert_eq!(status_line(&state), "Next player: O");
    }

    #[test]
    fn test_view_highlights_winning_line() {
        let state = [0, 3, 1, 4, 2]
            .iter()
            .filter_map(|i| Position::from_index(*i))
            .fold(GameState::new(), GameState::play);
        let view = ViewModel::from(&state);
        let highlighted: Vec<usize> = view
            .cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.position.to_index())
            .collect();
        assert_eq!(highlighted, vec![0, 1, 2]);
        assert_eq!(view.status_line, "Winner: X");
        assert_eq!(view.cells[3].square, Square::Occupied(Player::O));
        assert_eq!(view.sort_indicator(), "\u{25B2}");
    }
}
