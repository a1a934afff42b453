//! Stateless rendering of the board view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{Player, Position};

use crate::app::App;
use crate::config::Palette;
use crate::view::BoardView;

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const REPLAY_WIDTH: u16 = 14;
const REPLAY_LABEL: &str = "Replay";
const HELP: &str = "1-9/click: play  arrows+enter: move  r: replay  q: quit";

/// Clickable element under a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A board cell.
    Cell(Position),
    /// The replay control.
    Replay,
}

/// Screen areas for one frame. Shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Turn marker line.
    pub turn: Rect,
    /// The 9 cells in index order.
    pub cells: [Rect; 9],
    /// Status bar.
    pub status: Rect,
    /// Replay control.
    pub replay: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(1), // Turn
                Constraint::Min(BOARD_HEIGHT), // Board
                Constraint::Length(3), // Status
                Constraint::Length(3), // Replay
                Constraint::Length(1), // Help
            ])
            .split(area);

        Self {
            title: chunks[0],
            turn: chunks[1],
            cells: cell_rects(center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT)),
            status: chunks[3],
            replay: center_rect(chunks[4], REPLAY_WIDTH, 3),
            help: chunks[5],
        }
    }

    /// Finds what lies under a screen coordinate.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = ScreenPosition::new(column, row);
        if let Some(index) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(index).map(HitTarget::Cell);
        }
        if self.replay.contains(point) {
            return Some(HitTarget::Replay);
        }
        None
    }
}

fn cell_rects(board_area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = col_area;
        }
    }
    cells
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, layout: &ScreenLayout, app: &App, palette: &Palette) {
    let view = app.view();

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let turn = Paragraph::new(Line::from(vec![
        Span::raw("Turn: "),
        Span::styled(view.turn().to_string(), mark_style(view.turn(), palette)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(turn, layout.turn);

    draw_board(frame, layout, view, app.cursor(), palette);

    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if view.replay_visible() {
        let replay = Paragraph::new(REPLAY_LABEL)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(replay, layout.replay);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(
    frame: &mut Frame,
    layout: &ScreenLayout,
    view: &BoardView,
    cursor: Position,
    palette: &Palette,
) {
    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], view, cursor, pos, palette);
    }

    // Grid lines sit in the one-cell gaps between cells.
    let grid = Style::default().fg(Color::DarkGray);
    for row in 0..2 {
        let above = layout.cells[row * 3];
        let y = above.y + above.height;
        let width = layout.cells[row * 3 + 2].right().saturating_sub(above.x);
        let area = Rect::new(above.x, y, width, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new("─".repeat(width as usize)).style(grid), area);
    }
    for col in 0..2 {
        let left = layout.cells[col];
        let x = left.x + left.width;
        let height = layout.cells[6 + col].bottom().saturating_sub(left.y);
        let area = Rect::new(x, left.y, 1, height).intersection(frame.area());
        let lines: Vec<Line> = (0..height).map(|_| Line::from("│")).collect();
        frame.render_widget(Paragraph::new(lines).style(grid), area);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    cursor: Position,
    pos: Position,
    palette: &Palette,
) {
    let (symbol, base_style) = match view.mark(pos) {
        None => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => (player.to_string(), mark_style(player, palette)),
    };

    // Marks keep their player colour; only empty cell numbers go black.
    let base_style = match view.mark(pos) {
        None if view.is_highlighted(pos) || pos == cursor => base_style.fg(Color::Black),
        _ => base_style,
    };
    let style = if view.is_highlighted(pos) {
        base_style.bg(palette.win)
    } else if pos == cursor && !view.status().is_terminal() {
        base_style.bg(palette.cursor)
    } else {
        base_style
    };

    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_style(player: Player, palette: &Palette) -> Style {
    let color = match player {
        Player::X => palette.x,
        Player::O => palette.o,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
