//! Tic-tac-toe game logic.
//!
//! Pure, front-end agnostic rules for a 3x3 game:
//!
//! - [`Board`], [`Player`], [`Square`], [`Position`]: the data model
//! - [`evaluate`]: maps a board to a [`GameStatus`] and the winning [`WinLine`]
//! - [`GameState`]: owned state threaded through [`GameState::play`] and
//!   [`GameState::replay`], each returning a [`Step`] with [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Position};
//!
//! let mut state = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     let pos = Position::try_from(index).unwrap();
//!     state = state.play(pos).into_state();
//! }
//! assert_eq!(state.status(), GameStatus::XWin);
//! assert_eq!(state.winning_line().unwrap().indices(), [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod event;
mod game;
mod position;
pub mod rules;
mod types;

pub use error::PositionError;
pub use event::GameEvent;
pub use game::{GameState, Step};
pub use position::Position;
pub use rules::{Evaluation, WIN_LINES, WinLine, evaluate};
pub use types::{Board, GameStatus, Player, Square};
