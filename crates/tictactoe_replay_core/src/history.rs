//! Snapshot history of a game.

use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Ordered board snapshots from game start to the latest move.
///
/// Entry 0 is always the empty board and is never removed. Entry `i` is the
/// board after move `i`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Builds a history from raw snapshots without validation.
    #[cfg(test)]
    pub(crate) fn from_boards_unchecked(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the starting board is always present.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Index of the latest snapshot.
    pub fn latest_step(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    /// Snapshot at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The square that changed between `step - 1` and `step`.
    ///
    /// `None` for the starting board or an out-of-range step.
    #[instrument(skip(self))]
    pub fn changed_square(&self, step: usize) -> Option<Position> {
        let previous = self.boards.get(step.checked_sub(1)?)?;
        let current = self.boards.get(step)?;
        current.diff(previous).first().copied()
    }

    /// Drops every snapshot after `step`, then appends `board`.
    #[instrument(skip(self, board))]
    pub(crate) fn branch(&mut self, step: usize, board: Board) {
        let keep = step + 1;
        if keep < self.boards.len() {
            debug!(
                discarded = self.boards.len() - keep,
                "Discarding snapshots after step"
            );
            self.boards.truncate(keep);
        }
        self.boards.push(board);
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
