//! Tic-Tac-Toe Replay - terminal tic-tac-toe with time travel
//!
//! Every move is kept as a board snapshot. Any earlier position can be shown
//! again, and playing from it discards the moves that followed.
//!
//! # Architecture
//!
//! - **Core** ([`tictactoe_replay_core`]): pure state and reducer
//! - **TUI** ([`tui`]): ratatui frontend with keyboard and mouse input
//! - **Replay** ([`replay`]): headless runs from the command line
//! - **Config** ([`config`]): TOML settings
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::replay::render_text;
//! use tictactoe_replay_core::{GameState, Position};
//!
//! let state = GameState::replay([Position::Center]);
//! assert!(render_text(&state).contains("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError};
