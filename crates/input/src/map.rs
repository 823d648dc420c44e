//! Key mapping from terminal events to game input.

use crate::types::{InputEvent, Key};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a game event.
///
/// Arrows drive the game, with `h/j/k/l` and `a/s/d/w` as alternates.
/// `q`, `Esc` and `Ctrl-C` quit.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Key::Left,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Key::Right,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Key::Down,
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Key::Up,
        _ => return None,
    };
    Some(InputEvent::KeyDown(key))
}

/// Map any terminal event.
///
/// Auto-repeat counts as a press: there is no DAS handling, so holding a key
/// repeats at the terminal's rate. Releases and non-key events are ignored.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            map_key(*key)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
