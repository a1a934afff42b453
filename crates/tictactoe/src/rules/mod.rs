//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! the state machine so the evaluator can be tested on arbitrary boards.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::is_full;
pub use status::{Evaluation, evaluate};
pub use win::{WIN_LINES, WinLine, winning_line};
