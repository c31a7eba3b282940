#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Events model the discrete external stimuli that drive a render pass:
//! key presses, mouse clicks, and terminal resizes. The runtime converts
//! them into model messages via `From<Event>`.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

/// A key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

/// Whether a key event is a press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// A single keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A plain key press with no modifiers.
    #[must_use]
    pub const fn press(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Check for an unmodified character press.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        self.kind == KeyEventKind::Press
            && self.modifiers.is_empty()
            && self.code == KeyCode::Char(c)
    }
}

/// Mouse button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A mouse click at a cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse click (down + up at the same position).
    Click(MouseEvent),
    /// Terminal resize to the given dimensions.
    Resize { width: u16, height: u16 },
}

impl Event {
    /// Convenience constructor for an unmodified character press.
    #[must_use]
    pub const fn key(c: char) -> Self {
        Self::Key(KeyEvent::press(KeyCode::Char(c)))
    }

    /// Convenience constructor for a left click.
    #[must_use]
    pub const fn click(x: u16, y: u16) -> Self {
        Self::Click(MouseEvent {
            x,
            y,
            button: MouseButton::Left,
        })
    }
}
