//! Board and cell rendering.

use super::{CELL_HEIGHT, CELL_WIDTH, Regions};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use tictactoe_replay_core::{CellView, Player, Position, Square, ViewModel};

/// Renders the 3x3 grid with separators, win highlight and cursor.
pub fn render_board(frame: &mut Frame, regions: &Regions, view: &ViewModel, cursor: Position) {
    for cell in &view.cells {
        let area = regions.cells[cell.position.to_index()];
        render_cell(frame, area, cell, cell.position == cursor);
    }

    let board = regions.board;
    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        render_separator(frame, Rect::new(board.x, y, board.width, 1).intersection(board));
    }
    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = board.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(board);
            render_separator_vertical(frame, area);
        }
    }
}

/// Renders one cell: its mark, or its key number when empty.
fn render_cell(frame: &mut Frame, area: Rect, cell: &CellView, under_cursor: bool) {
    let (symbol, mut style) = match cell.square {
        Square::Empty => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.highlighted {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let pad = usize::from(CELL_HEIGHT / 2);
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::from(symbol));
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
