//! Input events delivered to a [`Model`](crate::app::Model): [`Msg`] and
//! [`Key`].

use crate::geom::Direction;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Space,
    /// A printable character.
    Char(char),
}

impl Key {
    /// The movement a key stands for: arrows, or vi-style `h/j/k/l`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowUp | Self::Char('k') => Some(Direction::Up),
            Self::ArrowDown | Self::Char('j') => Some(Direction::Down),
            Self::ArrowLeft | Self::Char('h') => Some(Direction::Left),
            Self::ArrowRight | Self::Char('l') => Some(Direction::Right),
            _ => None,
        }
    }
}

/// A message delivered to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once before the first draw.
    Init,
    /// A key was pressed.
    Key(Key),
    /// The terminal was resized.
    Resize { rows: i32, cols: i32 },
    /// Request to quit (Ctrl-C, window close).
    Quit,
}

impl Msg {
    #[inline]
    pub fn key(key: Key) -> Self {
        Self::Key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_vi_keys_map_to_directions() {
        assert_eq!(Key::ArrowUp.direction(), Some(Direction::Up));
        assert_eq!(Key::Char('j').direction(), Some(Direction::Down));
        assert_eq!(Key::Char('h').direction(), Some(Direction::Left));
        assert_eq!(Key::ArrowRight.direction(), Some(Direction::Right));
        assert_eq!(Key::Char('q').direction(), None);
        assert_eq!(Key::Enter.direction(), None);
    }
}
