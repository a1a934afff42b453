//! Headless play of a move list.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe::{GameState, Position};
use tracing::{info, instrument, warn};

/// Plays `moves` (board indices) from a fresh game and writes the result.
///
/// Occupied cells and moves after the game ended are skipped, as in the
/// interactive game. Indices outside 0-8 are an error.
#[instrument(skip(out))]
pub fn run_script(moves: &[usize], json: bool, out: &mut impl Write) -> Result<()> {
    let mut state = GameState::new();
    for &index in moves {
        let pos = Position::try_from(index)?;
        let step = state.play(pos);
        if step.is_noop() {
            warn!(index, "Move ignored");
        }
        state = step.into_state();
    }
    info!(status = %state.status(), "Script finished");

    if json {
        serde_json::to_writer_pretty(&mut *out, &state).context("Failed to encode game state")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", state.board().display())?;
        writeln!(out)?;
        writeln!(out, "Status: {}", state.status())?;
        match state.winning_line() {
            Some(line) => writeln!(out, "Winning line: {}", line)?,
            None if !state.is_over() => writeln!(out, "Next: {}", state.turn())?,
            None => {}
        }
    }
    Ok(())
}
