//! Stateless UI rendering.
//!
//! [`layout`] is the single source of screen geometry: drawing and mouse
//! hit-testing both derive their rectangles from it.

mod board;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_replay_core::{GameStatus, Position, ViewModel};

pub use board::render_board;
pub use history::{list_offset, render_history};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// The 3x3 grid including separators.
    pub board: Rect,
    /// Each cell, in board order.
    pub cells: [Rect; 9],
    /// Status line box.
    pub status: Rect,
    /// Move history panel including its border.
    pub history: Rect,
    /// The sort toggle row inside the history panel.
    pub sort_toggle: Rect,
    /// Rows of the move list.
    pub moves: Rect,
    /// Key help bar.
    pub help: Rect,
}

/// Splits the terminal area into regions.
pub fn layout(area: Rect) -> Regions {
    let [title, body, help] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .areas(area);
    let [left, history] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(body);
    let [board_panel, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(left);

    let board = center_rect(board_panel, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = Position::ALL.map(|pos| cell_rect(board, pos));

    let inner = Block::default().borders(Borders::ALL).inner(history);
    let sort_toggle = Rect {
        height: inner.height.min(1),
        ..inner
    };
    let list_top = inner.y.saturating_add(2).min(inner.bottom());
    let moves = Rect {
        y: list_top,
        height: inner.bottom() - list_top,
        ..inner
    };

    Regions {
        title,
        board,
        cells,
        status,
        history,
        sort_toggle,
        moves,
        help,
    }
}

/// Whether the terminal cell at (`x`, `y`) lies inside `rect`.
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// Draws one frame.
pub fn draw(frame: &mut Frame, view: &ViewModel, cursor: Position) {
    let regions = layout(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe Replay")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    render_board(frame, &regions, view, cursor);

    let status_color = match view.status {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress => Color::Yellow,
    };
    let status = Paragraph::new(view.status_line.as_str())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, regions.status);

    render_history(frame, &regions, view);

    let help = Paragraph::new("1-9/Enter: play | [ ]: step | Home/End | s: sort | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, regions.help);
}

fn cell_rect(board: Rect, pos: Position) -> Rect {
    let col = (pos.column() - 1) as u16;
    let row = (pos.row() - 1) as u16;
    Rect::new(
        board.x + col * (CELL_WIDTH + 1),
        board.y + row * (CELL_HEIGHT + 1),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
