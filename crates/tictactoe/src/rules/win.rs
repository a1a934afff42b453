//! Win lines and win detection.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of this line.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }

    /// Board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        match board.get(a) {
            Square::Occupied(p) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(p)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// The 8 winning lines, checked in this order.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine::new([TopLeft, TopCenter, TopRight]),
        WinLine::new([MiddleLeft, Center, MiddleRight]),
        WinLine::new([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine::new([TopLeft, MiddleLeft, BottomLeft]),
        WinLine::new([TopCenter, Center, BottomCenter]),
        WinLine::new([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine::new([TopLeft, Center, BottomRight]),
        WinLine::new([TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first completed line and its owner.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}
