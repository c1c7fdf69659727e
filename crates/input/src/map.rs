//! Key mapping from terminal events to gallery signals.

use crate::types::{Direction, Signal};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a signal for the gallery.
pub fn handle_key_event(key: KeyEvent) -> Option<Signal> {
    match key.code {
        // Steering: arrows, WASD and vim keys
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Signal::Steer(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Signal::Steer(Direction::Down)),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Signal::Steer(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Signal::Steer(Direction::Right)),

        // Lifecycle
        KeyCode::Enter | KeyCode::Char(' ') => Some(Signal::Start),
        KeyCode::Esc | KeyCode::Backspace => Some(Signal::Stop),

        // Focus
        KeyCode::Tab => Some(Signal::FocusNext),
        KeyCode::BackTab => Some(Signal::FocusPrev),

        _ => None,
    }
}

/// Check if key should quit the gallery.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
