// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Transport actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransportAction {
    TogglePlay,
    Stop,
    VolumeUp,
    VolumeDown,
    Quit,
    None,
}

/// Convert a key event to a transport action.
pub fn key_to_action(key: &KeyEvent) -> TransportAction {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => TransportAction::TogglePlay,
        KeyCode::Char('s') => TransportAction::Stop,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => TransportAction::VolumeUp,
        KeyCode::Char('-') | KeyCode::Down => TransportAction::VolumeDown,
        KeyCode::Char('q') | KeyCode::Esc => TransportAction::Quit,
        _ => TransportAction::None,
    }
}
