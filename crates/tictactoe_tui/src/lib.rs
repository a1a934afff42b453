//! Terminal front end for tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the [`tictactoe::GameState`] and routes actions through it
//! - **View**: visual state updated only from game events
//! - **UI**: stateless ratatui drawing plus the layout used for mouse clicks
//! - **Input**: crossterm events to actions
//! - **Script**: headless play for shells and tests

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod script;
mod terminal;
mod ui;
mod view;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Palette, Theme, TuiConfig};
pub use input::{Action, map_event, move_cursor};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::run_script;
pub use terminal::run_terminal;
pub use ui::{HitTarget, ScreenLayout, draw};
pub use view::BoardView;
