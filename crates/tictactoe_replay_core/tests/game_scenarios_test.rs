//! End-to-end scenarios driven through the reducer.

use tictactoe_replay_core::invariants::{HistoryInvariants, InvariantSet};
use tictactoe_replay_core::{
    Board, Event, GameState, GameStatus, History, MoveLabel, Player, Position, Square, ViewModel,
    evaluate, move_list,
};

fn play_all(indices: &[usize]) -> GameState {
    indices
        .iter()
        .map(|i| Event::Play(Position::from_index(*i).expect("index in range")))
        .fold(GameState::new(), GameState::reduce)
}

fn board_from(marks: &str) -> Board {
    let squares: Vec<Square> = marks
        .chars()
        .map(|c| match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        })
        .collect();
    Board::from_squares(squares.try_into().expect("nine squares"))
}

#[test]
fn test_top_row_win_scenario() {
    let state = play_all(&[0, 4, 1, 5, 2]);
    match state.status() {
        GameStatus::Won { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("expected a win, got {:?}", other),
    }
}

#[test]
fn test_full_board_draw_scenario() {
    let state = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(state.history().len(), 10);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(ViewModel::from(&state).status_line, "Draw");
}

#[test]
fn test_every_line_detected_for_both_players() {
    let lines = [
        ("XXX      ", [0, 1, 2]),
        ("   OOO   ", [3, 4, 5]),
        ("      XXX", [6, 7, 8]),
        ("O  O  O  ", [0, 3, 6]),
        (" X  X  X ", [1, 4, 7]),
        ("  O  O  O", [2, 5, 8]),
        ("X   X   X", [0, 4, 8]),
        ("  O O O  ", [2, 4, 6]),
    ];
    for (marks, indices) in lines {
        let status = evaluate(&board_from(marks));
        assert_eq!(status.line().map(|l| l.indices()), Some(indices), "{marks:?}");
        let expected = if marks.contains('X') { Player::X } else { Player::O };
        assert_eq!(status.winner(), Some(expected));
    }
}

#[test]
fn test_partial_boards_in_progress() {
    for marks in ["         ", "XO       ", "XOXOXO   ", "XOXXOOOX "] {
        assert_eq!(evaluate(&board_from(marks)), GameStatus::InProgress, "{marks:?}");
    }
}

#[test]
fn test_rejected_inputs_leave_state_alone() {
    let won = play_all(&[0, 4, 1, 5, 2]);
    let after = won.clone().reduce(Event::Play(Position::BottomLeft));
    assert_eq!(after, won);

    let mid = play_all(&[0, 4]);
    assert_eq!(mid.clone().reduce(Event::Play(Position::TopLeft)), mid);
    assert_eq!(mid.clone().reduce(Event::JumpTo(10)), mid);
}

#[test]
fn test_branching_from_the_past() {
    let state = play_all(&[0, 4, 1, 5, 2]).reduce(Event::JumpTo(2));
    assert_eq!(state.history().len(), 6);
    assert_eq!(state.status(), GameStatus::InProgress);

    let state = state.reduce(Event::Play(Position::BottomRight));
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.step(), 3);
    assert_eq!(state.history().changed_square(3), Some(Position::BottomRight));
    assert!(<HistoryInvariants as InvariantSet<History>>::check_all(state.history()).is_ok());
}

#[test]
fn test_turn_always_matches_step_parity() {
    let events = [
        Event::Play(Position::Center),
        Event::Play(Position::TopLeft),
        Event::JumpTo(1),
        Event::Play(Position::TopLeft),
        Event::ToggleSort,
        Event::Play(Position::TopLeft),
        Event::JumpTo(0),
        Event::JumpTo(2),
        Event::Play(Position::BottomRight),
    ];
    let mut state = GameState::new();
    for event in events {
        state = state.reduce(event);
        let expected = if state.step() % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(state.to_move(), expected, "after {event:?}");
        assert_eq!(state.board().occupied(), state.step());
    }
}

#[test]
fn test_toggle_sort_reverses_list_only() {
    let state = play_all(&[0, 4, 8]);
    let before = move_list(&state);
    let toggled = state.clone().reduce(Event::ToggleSort);
    let mut after = move_list(&toggled);
    after.reverse();

    assert_eq!(after, before);
    assert_eq!(toggled.history(), state.history());
    assert_eq!(toggled.step(), state.step());
}

#[test]
fn test_move_labels_track_changed_square() {
    let state = play_all(&[4, 0, 8]);
    let labels: Vec<MoveLabel> = move_list(&state).into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            MoveLabel::Start,
            MoveLabel::Move { number: 1, position: Some(Position::Center) },
            MoveLabel::Move { number: 2, position: Some(Position::TopLeft) },
            MoveLabel::Move { number: 3, position: Some(Position::BottomRight) },
        ]
    );
}

#[test]
fn test_view_model_serializes() {
    let view = ViewModel::from(&play_all(&[4]));
    let json = serde_json::to_value(&view).expect("view model serializes");
    assert_eq!(json["status_line"], "Next player: O");
    assert_eq!(json["moves"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["ascending"], true);
}
