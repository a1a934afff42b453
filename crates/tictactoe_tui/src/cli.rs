//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively with mouse or keyboard
    Play,

    /// Apply a list of moves and print the result
    Script {
        /// Comma-separated cell indices (0-8, row-major), X moves first
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
