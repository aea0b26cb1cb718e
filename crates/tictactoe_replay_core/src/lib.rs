//! Pure tic-tac-toe logic with snapshot history.
//!
//! The game is a value plus a transition function:
//!
//! - [`GameState`] holds the board snapshots, the displayed step and the
//!   move-list order.
//! - [`GameState::reduce`] applies one [`Event`] and returns the next state.
//! - [`ViewModel`] projects a state into what a frontend draws.
//!
//! Whose turn it is, who won and which line won are never stored; they are
//! derived from the displayed board on demand.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay_core::{Event, GameState, GameStatus, Player, Position};
//!
//! let state = [0, 4, 1, 5, 2]
//!     .into_iter()
//!     .filter_map(Position::from_index)
//!     .fold(GameState::new(), |state, pos| state.reduce(Event::Play(pos)));
//!
//! assert_eq!(state.status().winner(), Some(Player::X));
//! assert_eq!(state.status().line().map(|l| l.indices()), Some([0, 1, 2]));
//!
//! let earlier = state.reduce(Event::JumpTo(2));
//! assert_eq!(earlier.status(), GameStatus::InProgress);
//! assert_eq!(earlier.to_move(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use history::History;
pub use position::Position;
pub use rules::{GameStatus, WinningLine, evaluate};
pub use state::{Event, GameState, MoveRejection, NavigationRejection};
pub use types::{Board, Player, Square};
pub use view::{CellView, MoveEntry, MoveLabel, ViewModel, move_list, status_line};
