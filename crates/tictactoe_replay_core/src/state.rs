//! Game state and its pure transition function.
//!
//! A [`GameState`] is a value. Every input is an [`Event`]; applying one with
//! [`GameState::reduce`] yields the next state. Invalid inputs produce the
//! same state back: callers never see an error, the reason only goes to the
//! log.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::{GameStatus, evaluate};
use crate::{Board, History, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A user input the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Place the current player's mark.
    Play(Position),
    /// Show the snapshot at the given history step.
    JumpTo(usize),
    /// Flip the display order of the move list.
    ToggleSort,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// Why a history jump was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum NavigationRejection {
    /// The requested step does not exist.
    #[display("Step {} is outside history of length {}", requested, len)]
    OutOfRange {
        /// The requested step.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for NavigationRejection {}

/// Complete game state: history, the displayed step and the list order.
///
/// Whose turn it is follows from `step` alone; nothing derived is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    step: usize,
    ascending: bool,
}

impl GameState {
    /// Creates a new game with the move list in ascending order.
    pub fn new() -> Self {
        Self {
            history: History::new(),
            step: 0,
            ascending: true,
        }
    }

    /// Sets the initial move list order.
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Builds a game by playing `positions` in order from the start.
    ///
    /// Rejected moves are skipped, exactly as interactive input would be.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        positions
            .into_iter()
            .fold(Self::new(), |state, pos| state.reduce(Event::Play(pos)))
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the displayed history step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether the move list is shown oldest first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the displayed board.
    pub fn board(&self) -> &Board {
        // step is kept within bounds by every transition
        &self.history.boards()[self.step]
    }

    /// Player to move on the displayed board.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Status of the displayed board, recomputed on every call.
    pub fn status(&self) -> GameStatus {
        evaluate(self.board())
    }

    /// Applies one event.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn reduce(self, event: Event) -> Self {
        match event {
            Event::Play(pos) => self.play(pos),
            Event::JumpTo(step) => self.jump_to(step),
            Event::ToggleSort => self.toggle_sort(),
        }
    }

    /// Places the current player's mark, or returns the state unchanged.
    pub fn play(self, pos: Position) -> Self {
        match self.check_play(pos) {
            Ok(()) => self.apply_play(pos),
            Err(reason) => {
                debug!(%reason, position = %pos, "Ignoring move");
                self
            }
        }
    }

    /// Places the current player's mark.
    ///
    /// Any snapshots after the displayed step are discarded first.
    ///
    /// # Errors
    ///
    /// Rejects occupied squares and boards that already have a winner.
    pub fn try_play(self, pos: Position) -> Result<Self, MoveRejection> {
        self.check_play(pos)?;
        Ok(self.apply_play(pos))
    }

    /// Whether the current player may mark `pos` on the displayed board.
    ///
    /// # Errors
    ///
    /// Rejects occupied squares and boards that already have a winner.
    pub fn check_play(&self, pos: Position) -> Result<(), MoveRejection> {
        let board = self.board();
        if evaluate(board).winner().is_some() {
            return Err(MoveRejection::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveRejection::SquareOccupied(pos));
        }
        Ok(())
    }

    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    fn apply_play(mut self, pos: Position) -> Self {
        let player = self.to_move();
        let next = self.board().with_mark(pos, player);
        self.history.branch(self.step, next);
        self.step += 1;
        info!(step = self.step, %player, position = %pos, "Move applied");

        self.debug_check();
        self
    }

    /// Shows the snapshot at `step`, or returns the state unchanged.
    pub fn jump_to(self, step: usize) -> Self {
        match self.check_jump(step) {
            Ok(()) => self.apply_jump(step),
            Err(reason) => {
                debug!(%reason, "Ignoring history jump");
                self
            }
        }
    }

    /// Shows the snapshot at `step` without touching history.
    ///
    /// # Errors
    ///
    /// Rejects steps past the end of history.
    pub fn try_jump_to(self, step: usize) -> Result<Self, NavigationRejection> {
        self.check_jump(step)?;
        Ok(self.apply_jump(step))
    }

    /// Whether `step` exists in history.
    ///
    /// # Errors
    ///
    /// Rejects steps past the end of history.
    pub fn check_jump(&self, step: usize) -> Result<(), NavigationRejection> {
        if step >= self.history.len() {
            return Err(NavigationRejection::OutOfRange {
                requested: step,
                len: self.history.len(),
            });
        }
        Ok(())
    }

    #[instrument(skip(self), fields(from = self.step))]
    fn apply_jump(mut self, step: usize) -> Self {
        self.step = step;
        debug!(to = step, "Jumped in history");
        self
    }

    /// One step back, if not already at the start.
    pub fn step_back(self) -> Self {
        match self.step.checked_sub(1) {
            Some(step) => self.jump_to(step),
            None => self,
        }
    }

    /// One step forward, if not already at the latest move.
    pub fn step_forward(self) -> Self {
        let step = self.step + 1;
        self.jump_to(step)
    }

    /// Flips the move list order.
    pub fn toggle_sort(mut self) -> Self {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Toggled move order");
        self
    }

    fn debug_check(&self) {
        debug_assert!(self.step < self.history.len());
        debug_assert_eq!(
            <HistoryInvariants as InvariantSet<History>>::check_all(&self.history),
            Ok(())
        );
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
