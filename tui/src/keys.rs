//! Keyboard normalization for deck navigation.

use crossterm::event::{KeyCode, KeyEvent};
use deck_core::NavCommand;

/// Map a key event to a navigation command. A mapped key is consumed by
/// the caller; anything else falls through to app-level bindings.
pub fn nav_command(key: &KeyEvent) -> Option<NavCommand> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::PageDown => Some(NavCommand::Next),
        KeyCode::Left | KeyCode::PageUp => Some(NavCommand::Previous),
        KeyCode::Home => Some(NavCommand::First),
        KeyCode::End => Some(NavCommand::Last),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_forward_keys() {
        for code in [KeyCode::Right, KeyCode::Char(' '), KeyCode::PageDown] {
            assert_eq!(nav_command(&key(code)), Some(NavCommand::Next));
        }
    }

    #[test]
    fn test_backward_keys() {
        for code in [KeyCode::Left, KeyCode::PageUp] {
            assert_eq!(nav_command(&key(code)), Some(NavCommand::Previous));
        }
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(nav_command(&key(KeyCode::Home)), Some(NavCommand::First));
        assert_eq!(nav_command(&key(KeyCode::End)), Some(NavCommand::Last));
    }

    #[test]
    fn test_unmapped_keys_fall_through() {
        for code in [KeyCode::Char('x'), KeyCode::Up, KeyCode::Down, KeyCode::Enter] {
            assert_eq!(nav_command(&key(code)), None);
        }
    }
}
