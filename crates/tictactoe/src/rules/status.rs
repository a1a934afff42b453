//! Status evaluation: maps a board to a [`GameStatus`].

use super::{WinLine, is_full, winning_line};
use crate::{Board, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    status: GameStatus,
    winning_line: Option<WinLine>,
}

impl Evaluation {
    /// Status derived from the board.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The completed line, present only for a win.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }
}

/// Evaluates a board.
///
/// Lines are checked in [`WIN_LINES`](super::WIN_LINES) order and the first
/// completed line wins. A full board without a line is a draw; anything else
/// is still playing.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, line)) = winning_line(board) {
        return Evaluation {
            status: GameStatus::win_for(player),
            winning_line: Some(line),
        };
    }

    let status = if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::Playing
    };
    Evaluation {
        status,
        winning_line: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    fn board(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(marks.chars()) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_is_playing() {
        let eval = evaluate(&Board::new());
        assert_eq!(eval.status(), GameStatus::Playing);
        assert_eq!(eval.winning_line(), None);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let eval = evaluate(&board("XOXOXXOXO"));
        assert_eq!(eval.status(), GameStatus::Draw);
        assert_eq!(eval.winning_line(), None);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let eval = evaluate(&board("XXXOOXXOO"));
        assert_eq!(eval.status(), GameStatus::XWin);
        assert_eq!(eval.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_win_for_o() {
        let eval = evaluate(&board(".OX.OX.O."));
        assert_eq!(eval.status(), GameStatus::OWin);
        assert_eq!(eval.winning_line().map(|l| l.indices()), Some([1, 4, 7]));
    }
}
