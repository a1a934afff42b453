//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictactoe::Position;
use tictactoe_tui::{Action, App, Palette, ScreenLayout, draw};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn render(app: &App) -> (Buffer, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut layout = ScreenLayout::default();
    terminal
        .draw(|frame| {
            layout = ScreenLayout::new(frame.area());
            draw(frame, &layout, app, &Palette::default());
        })
        .unwrap();
    (terminal.backend().buffer().clone(), layout)
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_center(layout: &ScreenLayout, pos: Position) -> (u16, u16) {
    let cell = layout.cells[pos.to_index()];
    (cell.x + cell.width / 2, cell.y + 1)
}

#[test]
fn test_fresh_game_screen() {
    let (buffer, layout) = render(&App::new());
    let screen = text(&buffer);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Turn: X"));
    assert!(screen.contains("Playing: X to move"));
    assert!(!screen.contains("Replay"));

    let (x, y) = cell_center(&layout, Position::BottomRight);
    assert_eq!(buffer[(x, y)].symbol(), "9");
}

#[test]
fn test_marks_use_player_colours() {
    let mut app = App::new();
    app.handle(Action::Play(Position::TopLeft));
    app.handle(Action::Play(Position::BottomRight));

    let (buffer, layout) = render(&app);

    let (x, y) = cell_center(&layout, Position::TopLeft);
    assert_eq!(buffer[(x, y)].symbol(), "X");
    assert_eq!(buffer[(x, y)].fg, Palette::default().x);

    let (x, y) = cell_center(&layout, Position::BottomRight);
    assert_eq!(buffer[(x, y)].symbol(), "O");
    assert_eq!(buffer[(x, y)].fg, Palette::default().o);
}

#[test]
fn test_win_screen_highlights_line_and_shows_replay() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        app.handle(Action::Play(Position::from_index(index).unwrap()));
    }

    let (buffer, layout) = render(&app);
    let screen = text(&buffer);

    assert!(screen.contains("X wins!"));
    assert!(screen.contains("Replay"));
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        let (x, y) = cell_center(&layout, pos);
        assert_eq!(buffer[(x, y)].bg, Palette::default().win, "{pos}");
    }
    let (x, y) = cell_center(&layout, Position::MiddleLeft);
    assert_eq!(buffer[(x, y)].bg, Color::Reset);
}

#[test]
fn test_cursor_on_mark_keeps_player_colour() {
    let mut app = App::new();
    app.handle(Action::Play(Position::Center));
    assert_eq!(app.cursor(), Position::Center);

    let (buffer, layout) = render(&app);

    let (x, y) = cell_center(&layout, Position::Center);
    assert_eq!(buffer[(x, y)].symbol(), "X");
    assert_eq!(buffer[(x, y)].fg, Palette::default().x);
    assert_eq!(buffer[(x, y)].bg, Palette::default().cursor);
}

#[test]
fn test_cursor_on_empty_cell_shows_black_number() {
    let (buffer, layout) = render(&App::new());

    let (x, y) = cell_center(&layout, Position::Center);
    assert_eq!(buffer[(x, y)].symbol(), "5");
    assert_eq!(buffer[(x, y)].fg, Color::Black);
    assert_eq!(buffer[(x, y)].bg, Palette::default().cursor);
}

#[test]
fn test_winning_marks_keep_player_colour() {
    let mut app = App::new();
    for index in [0, 3, 1, 4, 2] {
        app.handle(Action::Play(Position::from_index(index).unwrap()));
    }

    let (buffer, layout) = render(&app);

    let (x, y) = cell_center(&layout, Position::TopRight);
    assert_eq!(buffer[(x, y)].fg, Palette::default().x);
    assert_eq!(buffer[(x, y)].bg, Palette::default().win);
}
