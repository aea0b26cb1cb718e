//! Move history panel.

use super::Regions;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_replay_core::ViewModel;

/// First move-list entry shown when `visible` rows are available.
///
/// Scrolls just far enough to keep the current entry on screen.
pub fn list_offset(view: &ViewModel, visible: usize) -> usize {
    let current = view.moves.iter().position(|e| e.current).unwrap_or(0);
    if visible == 0 || current < visible {
        0
    } else {
        current + 1 - visible
    }
}

/// Renders the sort toggle and the clickable move list.
pub fn render_history(frame: &mut Frame, regions: &Regions, view: &ViewModel) {
    let block = Block::default().borders(Borders::ALL).title("Move History");
    frame.render_widget(block, regions.history);

    let toggle = Paragraph::new(format!("Sort {} (s)", view.sort_indicator()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(toggle, regions.sort_toggle);

    let visible = regions.moves.height as usize;
    let offset = list_offset(view, visible);
    let lines: Vec<Line> = view
        .moves
        .iter()
        .skip(offset)
        .take(visible)
        .map(|entry| {
            let style = if entry.current {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::styled(entry.text(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), regions.moves);
}
