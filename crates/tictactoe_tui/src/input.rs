//! Keyboard and mouse input.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use tictactoe::Position;

use crate::ui::{HitTarget, ScreenLayout};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell.
    Play(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor (arrow key).
    MoveCursor(KeyCode),
    /// Start a new game.
    Replay,
    /// Leave the program.
    Quit,
}

/// Maps a terminal event to an action.
///
/// Mouse clicks are resolved against the layout of the last drawn frame.
pub fn map_event(event: &Event, layout: &ScreenLayout) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Replay),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .and_then(|digit| Position::from_index(digit as usize - 1))
                .map(Action::Play),
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                Some(Action::MoveCursor(code))
            }
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            match layout.hit(mouse.column, mouse.row)? {
                HitTarget::Cell(pos) => Some(Action::Play(pos)),
                HitTarget::Replay => Some(Action::Replay),
            }
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        // No change for other keys
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        let layout = ScreenLayout::default();
        assert_eq!(
            map_event(&key(KeyCode::Char('1')), &layout),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('9')), &layout),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(map_event(&key(KeyCode::Char('0')), &layout), None);
    }

    #[test]
    fn test_click_on_cell_and_replay() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 60, 24));
        let center = layout.cells[4];
        assert_eq!(
            map_event(&click(center.x, center.y), &layout),
            Some(Action::Play(Position::Center))
        );
        let replay = layout.replay;
        assert_eq!(
            map_event(&click(replay.x + 1, replay.y + 1), &layout),
            Some(Action::Replay)
        );
        assert_eq!(map_event(&click(0, 0), &layout), None);
    }
}
