//! Input device: blocking key reads behind a narrow trait.
//!
//! [`TermInput`] translates crossterm events into the widget-level
//! [`Key`] alphabet; everything the widgets don't distinguish collapses
//! to [`Key::Other`].

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The key alphabet the widgets distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    /// An unmodified printable character, space included.
    Char(char),
    /// Anything else.
    Other,
}

/// Blocking source of key events.
pub trait InputSource {
    /// Block until the next key arrives. The wait is indefinite; only the
    /// arrival of an event ends it.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Crossterm-backed input source.
#[derive(Debug, Default)]
pub struct TermInput {
    _private: (),
}

impl TermInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSource for TermInput {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    return Ok(translate(key));
                }
                // Releases, mouse, resize, focus: not part of the alphabet.
                _ => {}
            }
        }
    }
}

/// Map a crossterm key event to the widget alphabet.
///
/// Ctrl-C arrives as a plain key event in raw mode (the signal is
/// swallowed); it maps to [`Key::Esc`] so a session can still be
/// abandoned.
pub fn translate(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Esc;
    }

    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(c)
            if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Key::Char(c)
        }
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(translate(plain(KeyCode::Up)), Key::Up);
        assert_eq!(translate(plain(KeyCode::Down)), Key::Down);
        assert_eq!(translate(plain(KeyCode::Left)), Key::Left);
        assert_eq!(translate(plain(KeyCode::Right)), Key::Right);
    }

    #[test]
    fn letters_pass_through_as_chars() {
        for c in ['h', 'j', 'k', 'l', 'z'] {
            assert_eq!(translate(plain(KeyCode::Char(c))), Key::Char(c));
        }
    }

    #[test]
    fn space_is_a_char() {
        assert_eq!(translate(plain(KeyCode::Char(' '))), Key::Char(' '));
    }

    #[test]
    fn enter_and_esc_map_directly() {
        assert_eq!(translate(plain(KeyCode::Enter)), Key::Enter);
        assert_eq!(translate(plain(KeyCode::Esc)), Key::Esc);
    }

    #[test]
    fn ctrl_c_cancels_like_esc() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(translate(key), Key::Esc);
    }

    #[test]
    fn other_control_chords_collapse_to_other() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(translate(key), Key::Other);
    }

    #[test]
    fn shifted_chars_stay_chars() {
        let key = KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT);
        assert_eq!(translate(key), Key::Char('K'));
    }

    #[test]
    fn unrelated_keys_are_other() {
        assert_eq!(translate(plain(KeyCode::Backspace)), Key::Other);
        assert_eq!(translate(plain(KeyCode::F(5))), Key::Other);
        assert_eq!(translate(plain(KeyCode::Tab)), Key::Other);
    }
}
