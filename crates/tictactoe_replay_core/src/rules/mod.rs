//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Nothing here knows about history
//! or whose turn it is; status is recomputed from the board every time it is
//! asked for.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, winning_line};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one empty square and no completed line.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winner.
        player: Player,
        /// The first completed line in evaluation order.
        line: WinningLine,
    },
    /// Every square filled, no completed line.
    Draw,
}

impl GameStatus {
    /// Whether no further moves may be made.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the status of a board.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((player, line)) = winning_line(board) {
        return GameStatus::Won { player, line };
    }
    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
