//! tictactoe - terminal tic-tac-toe

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{
    Cli, Command, TuiConfig, init_file_logging, init_stderr_logging, run_script, run_terminal,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(config.log_file(), config.log_filter())?;
            let palette = config.theme().palette()?;
            run_terminal(palette)
        }
        Command::Script { moves, json } => {
            init_stderr_logging(config.log_filter());
            run_script(&moves, json, &mut std::io::stdout().lock())
        }
    }
}
