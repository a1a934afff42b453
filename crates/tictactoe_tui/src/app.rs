//! Application state and logic.

use tictactoe::{GameState, Position, Step};
use tracing::{debug, info, instrument};

use crate::input::{Action, move_cursor};
use crate::view::BoardView;

/// Main application state.
///
/// Owns the game and routes every transition's events into the view.
#[derive(Debug)]
pub struct App {
    state: GameState,
    view: BoardView,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            view: BoardView::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current visual state.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Replay if self.view.replay_visible() => {
                let step = std::mem::take(&mut self.state).replay();
                self.commit(step);
            }
            Action::Replay => debug!("Replay ignored: game still in progress"),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        let step = std::mem::take(&mut self.state).play(pos);
        self.commit(step);
    }

    fn commit(&mut self, step: Step) {
        let (state, events) = step.dissolve();
        debug!(events = events.len(), "Applying step");
        self.view.apply_all(&events);
        self.state = state;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
