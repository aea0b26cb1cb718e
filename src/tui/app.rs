//! Application state and input handling.

use super::input::{Action, hit_test, map_key, move_cursor};
use super::ui::layout;
use crate::config::AppConfig;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_replay_core::{Event, GameState, Position, ViewModel};
use tracing::{debug, instrument};

/// Main application state: the game plus UI-only bits.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &AppConfig) -> Self {
        Self::from_state(GameState::new().with_ascending(*config.moves_ascending()))
    }

    /// Creates an application around an existing game.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Projects the current game for drawing.
    pub fn view(&self) -> ViewModel {
        ViewModel::from(&self.state)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = map_key(key) {
            self.dispatch(action);
        }
    }

    /// Handles a mouse event on a screen of size `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let regions = layout(area);
        let view = self.view();
        if let Some(event) = hit_test(&regions, &view, mouse.column, mouse.row) {
            if let Event::Play(pos) = event {
                self.cursor = pos;
            }
            self.apply(event);
        }
    }

    /// Performs an action.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatching action");
        match action {
            Action::Game(event) => self.apply(event),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.apply(Event::Play(self.cursor)),
            Action::StepBack => self.update(GameState::step_back),
            Action::StepForward => self.update(GameState::step_forward),
            Action::JumpStart => self.apply(Event::JumpTo(0)),
            Action::JumpLatest => {
                let latest = self.state.history().latest_step();
                self.apply(Event::JumpTo(latest));
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn apply(&mut self, event: Event) {
        self.update(|state| state.reduce(event));
    }

    fn update(&mut self, transition: impl FnOnce(GameState) -> GameState) {
        let state = std::mem::take(&mut self.state);
        self.state = transition(state);
    }
}
