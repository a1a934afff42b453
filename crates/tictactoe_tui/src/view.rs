//! Visual state driven by game events.
//!
//! `BoardView` is what the screen shows: marks, highlighted cells, the turn
//! marker, status text and whether the replay control is visible. It is
//! only ever updated through [`BoardView::apply`], never by reading the
//! engine's state directly.

use tictactoe::{GameEvent, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Render-side mirror of the game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardView {
    marks: [Option<Player>; 9],
    highlighted: [bool; 9],
    turn: Player,
    status: GameStatus,
    replay_visible: bool,
}

impl BoardView {
    /// Creates the view of a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event.
    #[instrument(skip(self))]
    pub fn apply(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::MarkPlaced { position, player } => {
                self.marks[position.to_index()] = Some(player);
            }
            GameEvent::TurnChanged(player) => self.turn = player,
            GameEvent::StatusChanged(status) => {
                self.status = status;
                self.replay_visible = status.is_terminal();
            }
            GameEvent::WinningLine(line) => self.highlight_win_cells(line.positions()),
            GameEvent::Reset => {
                debug!("Clearing board view");
                *self = Self::new();
            }
        }
    }

    /// Applies events in order.
    pub fn apply_all(&mut self, events: &[GameEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Highlights the cells of a winning line.
    ///
    /// # Panics
    ///
    /// Panics unless exactly three cells are given.
    pub fn highlight_win_cells(&mut self, cells: &[Position]) {
        assert!(cells.len() == 3, "Invalid win cell positions: {:?}", cells);
        for cell in cells {
            self.highlighted[cell.to_index()] = true;
        }
    }

    /// Mark shown at `pos`.
    pub fn mark(&self, pos: Position) -> Option<Player> {
        self.marks[pos.to_index()]
    }

    /// True if `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted[pos.to_index()]
    }

    /// Player shown in the turn marker.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Status shown in the status bar.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the replay control is shown.
    pub fn replay_visible(&self) -> bool {
        self.replay_visible
    }

    /// Text for the status bar.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::Playing => format!("Playing: {} to move", self.turn),
            GameStatus::Draw => "Draw! Nobody wins.".to_string(),
            status => format!("{}!", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe::WIN_LINES;

    #[test]
    fn test_win_events_highlight_and_show_replay() {
        let mut view = BoardView::new();
        view.apply_all(&[
            GameEvent::StatusChanged(GameStatus::OWin),
            GameEvent::WinningLine(WIN_LINES[7]),
        ]);

        assert!(view.replay_visible());
        assert_eq!(view.status_text(), "O wins!");
        let lit: Vec<usize> = Position::ALL
            .iter()
            .filter(|p| view.is_highlighted(**p))
            .map(|p| p.to_index())
            .collect();
        assert_eq!(lit, vec![2, 4, 6]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut view = BoardView::new();
        view.apply(&GameEvent::MarkPlaced {
            position: Position::Center,
            player: Player::X,
        });
        view.apply(&GameEvent::StatusChanged(GameStatus::Draw));
        view.apply(&GameEvent::Reset);

        assert_eq!(view, BoardView::new());
        assert!(!view.replay_visible());
    }

    #[test]
    #[should_panic(expected = "Invalid win cell positions")]
    fn test_highlight_requires_three_cells() {
        BoardView::new().highlight_win_cells(&[Position::TopLeft, Position::Center]);
    }
}
