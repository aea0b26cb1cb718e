//! Tic-Tac-Toe Replay - CLI entry point

use anyhow::Result;
use clap::Parser;
use tictactoe_replay::AppConfig;
use tictactoe_replay::cli::{Cli, Command};
use tictactoe_replay::{replay, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay(args) => replay::run(&config, &args),
    }
}
