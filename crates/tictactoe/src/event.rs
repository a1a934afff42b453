//! State-change events emitted by game transitions.
//!
//! Front ends never inspect the engine's internals to decide what to redraw;
//! they apply these events in order.

use crate::{GameStatus, Player, Position, WinLine};
use serde::{Deserialize, Serialize};

/// A single observable change to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameEvent {
    /// A player's mark was placed.
    #[display("{player} played {position}")]
    MarkPlaced {
        /// Cell that was marked.
        position: Position,
        /// Player who moved.
        player: Player,
    },
    /// The turn passed to a player.
    #[display("{_0} to move")]
    TurnChanged(Player),
    /// The game status changed.
    #[display("status: {_0}")]
    StatusChanged(GameStatus),
    /// A line was completed.
    #[display("winning line {_0}")]
    WinningLine(WinLine),
    /// Board cleared for a new game.
    #[display("reset")]
    Reset,
}
