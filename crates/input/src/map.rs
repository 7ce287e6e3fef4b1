//! Key mapping from terminal events to drill input.

use crate::types::GameEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Quit,
}

impl InputEvent {
    /// Engine event while a session is running.
    ///
    /// Arrow keys and Enter have no meaning during play.
    pub fn to_game_event(self) -> Option<GameEvent> {
        match self {
            InputEvent::Char(c) => Some(GameEvent::TextInput(c.to_string())),
            InputEvent::Backspace => Some(GameEvent::Backspace),
            InputEvent::Quit => Some(GameEvent::Quit),
            _ => None,
        }
    }
}

/// Map a key press to drill input.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab => Some(InputEvent::Up),
        KeyCode::Down | KeyCode::Tab => Some(InputEvent::Down),
        KeyCode::Left => Some(InputEvent::Left),
        KeyCode::Right => Some(InputEvent::Right),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        // Romaji is ASCII; the input box draws one column per char.
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => Some(InputEvent::Char(c)),
        _ => None,
    }
}

/// Check if key should quit the program (Esc or Ctrl+C).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
