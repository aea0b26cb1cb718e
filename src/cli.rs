//! Command-line interface for tictactoe_replay.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_replay_core::Position;

/// Tic-tac-toe with move history, time travel and move-order reversal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Terminal tic-tac-toe with a clickable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, global = true, default_value = "tictactoe_replay.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves headlessly and print the resulting view
    Replay(ReplayArgs),
}

/// Arguments for the `replay` command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReplayArgs {
    /// Cells to play in order: indices 0-8 or labels like `center`
    #[arg(value_delimiter = ',', value_parser = parse_position)]
    pub moves: Vec<Position>,

    /// History step to display after the moves are applied
    #[arg(long)]
    pub jump: Option<usize>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_position(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (use 0-8 or a label like top-left)", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["tictactoe_replay"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictactoe_replay.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "tictactoe_replay",
            "replay",
            "0,4",
            "center",
            "--jump",
            "1",
            "--descending",
            "--config",
            "other.toml",
        ])
        .unwrap();
        let Some(Command::Replay(args)) = cli.command else {
            panic!("expected replay");
        };
        assert_eq!(args.moves, vec![Position::TopLeft, Position::Center, Position::Center]);
        assert_eq!(args.jump, Some(1));
        assert!(args.descending);
        assert!(!args.json);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
    }

    #[test]
    fn test_replay_rejects_bad_cell() {
        assert!(Cli::try_parse_from(["tictactoe_replay", "replay", "9"]).is_err());
    }
}
