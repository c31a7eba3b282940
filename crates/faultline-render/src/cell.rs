#![forbid(unsafe_code)]

//! A single terminal cell.

use crate::style::Style;

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing drawn yet.
    #[default]
    Empty,
    /// A glyph anchored at this cell.
    Glyph(char),
    /// The trailing half of a double-width glyph anchored one cell left.
    Continuation,
}

/// A styled cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub content: CellContent,
    pub style: Style,
}

impl Cell {
    /// A cell holding the given character with default style.
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self {
            content: CellContent::Glyph(ch),
            style: Style::new(),
        }
    }

    /// A cell holding the given character and style.
    #[must_use]
    pub const fn styled(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Glyph(ch),
            style,
        }
    }

    /// The continuation marker for a preceding wide glyph.
    #[must_use]
    pub const fn continuation(style: Style) -> Self {
        Self {
            content: CellContent::Continuation,
            style,
        }
    }

    /// The anchored glyph, if any.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self.content {
            CellContent::Glyph(ch) => Some(ch),
            _ => None,
        }
    }

    /// True when nothing has been drawn here.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_roundtrip() {
        assert_eq!(Cell::from_char('x').as_char(), Some('x'));
    }

    #[test]
    fn default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::default().as_char(), None);
    }

    #[test]
    fn continuation_has_no_char() {
        assert_eq!(Cell::continuation(Style::new()).as_char(), None);
        assert!(!Cell::continuation(Style::new()).is_empty());
    }
}
