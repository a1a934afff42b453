//! Turn state machine for tic-tac-toe.
//!
//! [`GameState`] is an owned value threaded through pure transitions:
//! [`GameState::play`] and [`GameState::replay`] consume the state and return
//! a [`Step`] holding the next state and the events that describe the change.
//! Invalid moves (occupied square, finished game) are no-ops: the state comes
//! back unchanged with no events.

use crate::rules::{WinLine, evaluate};
use crate::{Board, GameEvent, GameStatus, Player, Position, Square};
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    status: GameStatus,
    winning_line: Option<WinLine>,
}

/// Outcome of a transition: the next state and what changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Dissolve)]
pub struct Step {
    /// State after the transition.
    state: GameState,
    /// Ordered changes; empty when the transition was ignored.
    events: Vec<GameEvent>,
}

impl Step {
    fn ignored(state: GameState) -> Self {
        Self {
            state,
            events: Vec::new(),
        }
    }

    /// True if the transition changed nothing.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the step, returning the state.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the completed line if the game was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty positions, or none once the game is over.
    pub fn available_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Marks `pos` for the player to move.
    ///
    /// Ignored if the game is over or the square is already taken.
    #[instrument(skip(self), fields(position = ?pos, turn = ?self.turn, status = ?self.status))]
    pub fn play(mut self, pos: Position) -> Step {
        if self.is_over() {
            debug!("Move ignored: game is over");
            return Step::ignored(self);
        }
        if !self.board.is_empty(pos) {
            debug!("Move ignored: square occupied");
            return Step::ignored(self);
        }

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        let mut events = vec![GameEvent::MarkPlaced {
            position: pos,
            player,
        }];

        let evaluation = evaluate(&self.board);
        self.status = evaluation.status();
        self.winning_line = evaluation.winning_line();

        match (self.status, self.winning_line) {
            (GameStatus::Playing, _) => {
                self.turn = player.opponent();
                events.push(GameEvent::TurnChanged(self.turn));
            }
            (status, Some(line)) => {
                info!(%status, %line, "Game won");
                events.push(GameEvent::StatusChanged(status));
                events.push(GameEvent::WinningLine(line));
            }
            (status, None) => {
                info!(%status, "Game ended");
                events.push(GameEvent::StatusChanged(status));
            }
        }

        Step {
            state: self,
            events,
        }
    }

    /// Resets to a fresh game. Accepted in any state.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn replay(self) -> Step {
        info!("Replaying");
        let state = GameState::new();
        let events = vec![
            GameEvent::Reset,
            GameEvent::TurnChanged(state.turn),
            GameEvent::StatusChanged(state.status),
        ];
        Step { state, events }
    }
}
