//! Key events as the editor sees them.

use std::collections::VecDeque;
use std::fmt;

use crate::{EditError, EditResult};

/// The key part of a key event, without modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    /// Function key `F1` through `F12`.
    F(u8),
    Escape,
    Backspace,
    Up,
    Down,
    Right,
    Left,
    Home,
    Insert,
    Delete,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Escape => f.write_str("Escape"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::Insert => f.write_str("Insert"),
            KeyCode::Delete => f.write_str("Delete"),
            KeyCode::End => f.write_str("End"),
            KeyCode::PageUp => f.write_str("PageUp"),
            KeyCode::PageDown => f.write_str("PageDown"),
        }
    }
}

/// A key with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
}

impl Key {
    pub const fn plain(code: KeyCode) -> Self {
        Key {
            code,
            ctrl: false,
            alt: false,
        }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Key {
            code,
            ctrl: true,
            alt: false,
        }
    }

    #[must_use]
    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Decode one rune read from a terminal in raw mode.
    ///
    /// Control runes map to the Ctrl chord that produces them; `0x7f` is
    /// Backspace. Everything else is a plain character.
    pub fn from_control_rune(r: char) -> Self {
        match r {
            '\u{0}' => Key::ctrl(KeyCode::Char('`')),
            '\u{1d}' => Key::ctrl(KeyCode::Char('6')),
            '\u{1f}' => Key::ctrl(KeyCode::Char('/')),
            '\u{7f}' => Key::plain(KeyCode::Backspace),
            '\u{1}'..='\u{1c}' => match char::from_u32(u32::from(r) + 0x40) {
                Some(c) => Key::ctrl(KeyCode::Char(c)),
                None => Key::plain(KeyCode::Char(r)),
            },
            _ => Key::plain(KeyCode::Char(r)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl-")?;
        }
        if self.alt {
            f.write_str("Alt-")?;
        }
        write!(f, "{}", self.code)
    }
}

/// Anything the editor can read keys from.
pub trait KeySource {
    fn read_key(&mut self) -> EditResult<Key>;
}

/// Keys decoded from a stream of runes, with room to push keys back.
pub struct RuneKeys<I> {
    runes: I,
    read_ahead: VecDeque<Key>,
}

impl<I: Iterator<Item = char>> RuneKeys<I> {
    pub fn new(runes: I) -> Self {
        RuneKeys {
            runes,
            read_ahead: VecDeque::new(),
        }
    }

    /// Queue `key` to be returned before any further rune is read.
    pub fn unread(&mut self, key: Key) {
        self.read_ahead.push_back(key);
    }
}

impl<I: Iterator<Item = char>> KeySource for RuneKeys<I> {
    fn read_key(&mut self) -> EditResult<Key> {
        if let Some(key) = self.read_ahead.pop_front() {
            return Ok(key);
        }
        self.runes
            .next()
            .map(Key::from_control_rune)
            .ok_or(EditError::Eof)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
