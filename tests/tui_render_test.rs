//! Rendering and mouse tests against ratatui's test backend.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use tictactoe_replay::AppConfig;
use tictactoe_replay::tui::App;
use tictactoe_replay::tui::ui::{self, layout};
use tictactoe_replay_core::{GameState, GameStatus, Player, Position};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let view = app.view();
    terminal
        .draw(|f| ui::draw(f, &view, app.cursor()))
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn click(app: &mut App, rect: Rect, row_offset: u16) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + row_offset,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(mouse, area());
}

fn app_after(indices: &[usize]) -> App {
    let state = GameState::replay(indices.iter().filter_map(|i| Position::from_index(*i)));
    App::from_state(state)
}

#[test]
fn test_initial_screen() {
    let text = screen_text(&render(&App::new(&AppConfig::default())));
    assert!(text.contains("Tic-Tac-Toe Replay"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Move History"));
    assert!(text.contains("Go to game start"));
    assert!(text.contains("Sort \u{25B2}"));
}

#[test]
fn test_marks_drawn_in_cells() {
    let app = app_after(&[0, 4]);
    let buffer = render(&app);
    let regions = layout(area());

    let mark_row = |pos: Position| {
        let rect = regions.cells[pos.to_index()];
        (rect.x..rect.right())
            .filter_map(|x| buffer.cell((x, rect.y + 1)).map(|c| c.symbol().to_string()))
            .collect::<String>()
            .trim()
            .to_string()
    };
    assert_eq!(mark_row(Position::TopLeft), "X");
    assert_eq!(mark_row(Position::Center), "O");
    assert_eq!(mark_row(Position::BottomRight), "9");
}

#[test]
fn test_winner_status_and_moves_listed() {
    let text = screen_text(&render(&app_after(&[0, 4, 1, 5, 2])));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Go to move #5 (Col: 3, Row: 1)"));
}

#[test]
fn test_click_cell_plays() {
    let mut app = App::new(&AppConfig::default());
    let regions = layout(area());
    click(&mut app, regions.cells[Position::MiddleRight.to_index()], 1);
    assert_eq!(app.state().step(), 1);
    assert_eq!(app.state().history().changed_square(1), Some(Position::MiddleRight));
    assert_eq!(app.cursor(), Position::MiddleRight);
}

#[test]
fn test_click_occupied_cell_ignored() {
    let mut app = app_after(&[4]);
    let before = app.state().clone();
    let regions = layout(area());
    click(&mut app, regions.cells[Position::Center.to_index()], 0);
    assert_eq!(app.state(), &before);
}

#[test]
fn test_click_history_entry_jumps() {
    let mut app = app_after(&[0, 4, 1]);
    let regions = layout(area());
    // Rows are oldest first: start, #1, #2, #3.
    click(&mut app, regions.moves, 1);
    assert_eq!(app.state().step(), 1);
    assert_eq!(app.state().to_move(), Player::O);
    assert_eq!(app.state().history().len(), 4);
}

#[test]
fn test_click_sort_toggle_reverses_list() {
    let mut app = app_after(&[0, 4, 1]);
    let regions = layout(area());
    click(&mut app, regions.sort_toggle, 0);
    assert!(!app.state().ascending());

    // Newest first now, so the top row is move #3.
    let buffer = render(&app);
    assert!(row_text(&buffer, regions.moves.y).contains("Go to move #3"));
    assert!(screen_text(&buffer).contains("Sort \u{25BC}"));

    click(&mut app, regions.moves, 3);
    assert_eq!(app.state().step(), 0);
}

#[test]
fn test_click_below_list_ignored() {
    let mut app = app_after(&[0]);
    let regions = layout(area());
    click(&mut app, regions.moves, 5);
    assert_eq!(app.state().step(), 1);
}

#[test]
fn test_right_click_ignored() {
    let mut app = App::new(&AppConfig::default());
    let rect = layout(area()).cells[0];
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(mouse, area());
    assert_eq!(app.state().status(), GameStatus::InProgress);
    assert_eq!(app.state().step(), 0);
}
