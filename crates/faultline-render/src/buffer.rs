#![forbid(unsafe_code)]

//! Row-major cell grid with headless assertion helpers.
//!
//! `Buffer` is the render target for one pass. Writes are clipped at the
//! grid edge; double-width graphemes occupy a glyph cell plus a
//! continuation cell. The text helpers (`row_text`, `assert_matches`)
//! exist so CI tests can verify rendered output without a terminal.

use crate::cell::{Cell, CellContent};
use crate::style::Style;
use faultline_core::geometry::Rect;
use faultline_core::text_width::grapheme_width;
use unicode_segmentation::UnicodeSegmentation;

/// A width × height grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "width must be > 0");
        assert!(height > 0, "height must be > 0");
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Buffer width in columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area as a rect at the origin.
    #[inline]
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y), or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Set the cell at (x, y). Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a region with the given cell, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let Some(clipped) = area.intersection(&self.area()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Write a string starting at (x, y), clipped at `max_x` (exclusive).
    ///
    /// Double-width graphemes emit a glyph cell plus a continuation cell;
    /// a wide glyph that would straddle the clip edge is dropped rather
    /// than half-drawn. Returns the x position after the last cell written.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cursor = x;
        for grapheme in text.graphemes(true) {
            let w = grapheme_width(grapheme) as u16;
            if w == 0 {
                continue;
            }
            if cursor >= max_x || cursor.saturating_add(w) > max_x {
                break;
            }
            // Grid cells hold one scalar; multi-scalar clusters keep the base.
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(cursor, y, Cell::styled(ch, style));
            if w == 2 {
                self.set(cursor + 1, y, Cell::continuation(style));
            }
            cursor += w;
        }
        cursor
    }

    /// The visible text of a row, with trailing whitespace trimmed.
    ///
    /// Empty and continuation cells read as spaces.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            match self.get(x, y).map(|c| c.content) {
                Some(CellContent::Glyph(ch)) => out.push(ch),
                Some(CellContent::Continuation) => {}
                _ => out.push(' '),
            }
        }
        out.trim_end().to_string()
    }

    /// Whether any row's visible text contains `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    /// Assert every row matches the expected lines (trailing blanks trimmed).
    ///
    /// # Panics
    ///
    /// Panics with a per-row diff when the grid differs.
    pub fn assert_matches(&self, expected: &[&str]) {
        assert_eq!(
            expected.len(),
            self.height as usize,
            "expected {} rows, buffer has {}",
            expected.len(),
            self.height
        );
        for (y, want) in expected.iter().enumerate() {
            let got = self.row_text(y as u16);
            assert_eq!(
                &got, want,
                "row {y} mismatch:\n  got:  {got:?}\n  want: {want:?}"
            );
        }
    }

    /// Copy the cells of `area` from another buffer of identical size.
    ///
    /// Used to commit a supervised scratch render: the scratch pass draws
    /// into its own buffer, and only a successful outcome is blitted back.
    pub fn copy_area_from(&mut self, src: &Buffer, area: Rect) {
        debug_assert_eq!(self.width, src.width);
        debug_assert_eq!(self.height, src.height);
        let Some(clipped) = area.intersection(&self.area()) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = src.get(x, y) {
                    self.set(x, y, *cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_get_roundtrip() {
        let mut buf = Buffer::new(4, 2);
        buf.set(1, 1, Cell::from_char('z'));
        assert_eq!(buf.get(1, 1).unwrap().as_char(), Some('z'));
    }

    #[test]
    fn out_of_bounds_ignored() {
        let mut buf = Buffer::new(4, 2);
        buf.set(10, 10, Cell::from_char('z'));
        assert!(buf.get(10, 10).is_none());
    }

    #[test]
    fn set_string_basic() {
        let mut buf = Buffer::new(10, 1);
        let end = buf.set_string(0, 0, "hello", Style::new(), 10);
        assert_eq!(end, 5);
        assert_eq!(buf.row_text(0), "hello");
    }

    #[test]
    fn set_string_clips_at_max_x() {
        let mut buf = Buffer::new(10, 1);
        buf.set_string(0, 0, "abcdef", Style::new(), 3);
        assert_eq!(buf.row_text(0), "abc");
    }

    #[test]
    fn set_string_wide_glyph_uses_two_cells() {
        let mut buf = Buffer::new(6, 1);
        let end = buf.set_string(0, 0, "\u{1F4A3}!", Style::new(), 6);
        assert_eq!(end, 3);
        assert_eq!(buf.get(0, 0).unwrap().as_char(), Some('\u{1F4A3}'));
        assert_eq!(buf.get(1, 0).unwrap().content, CellContent::Continuation);
        assert_eq!(buf.get(2, 0).unwrap().as_char(), Some('!'));
    }

    #[test]
    fn set_string_drops_straddling_wide_glyph() {
        let mut buf = Buffer::new(6, 1);
        // Width 3 leaves one cell after "ab"; the bomb needs two.
        buf.set_string(0, 0, "ab\u{1F4A3}", Style::new(), 3);
        assert_eq!(buf.row_text(0), "ab");
    }

    #[test]
    fn set_string_carries_style() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(0, 0, "x", Style::new().fg(Color::Red), 4);
        assert_eq!(buf.get(0, 0).unwrap().style.fg, Some(Color::Red));
    }

    #[test]
    fn fill_clips_to_buffer() {
        let mut buf = Buffer::new(4, 2);
        buf.fill(Rect::new(2, 0, 10, 10), Cell::from_char('#'));
        assert_eq!(buf.row_text(0), "  ##");
        assert_eq!(buf.row_text(1), "  ##");
    }

    #[test]
    fn row_text_trims_trailing() {
        let mut buf = Buffer::new(8, 1);
        buf.set_string(1, 0, "hi", Style::new(), 8);
        assert_eq!(buf.row_text(0), " hi");
    }

    #[test]
    fn contains_text_scans_rows() {
        let mut buf = Buffer::new(10, 3);
        buf.set_string(0, 2, "needle", Style::new(), 10);
        assert!(buf.contains_text("need"));
        assert!(!buf.contains_text("haystack"));
    }

    #[test]
    fn assert_matches_full_grid() {
        let mut buf = Buffer::new(5, 2);
        buf.set_string(0, 0, "ab", Style::new(), 5);
        buf.assert_matches(&["ab", ""]);
    }

    #[test]
    fn copy_area_from_commits_region() {
        let mut dst = Buffer::new(6, 2);
        let mut src = Buffer::new(6, 2);
        src.set_string(0, 0, "AAAAAA", Style::new(), 6);
        src.set_string(0, 1, "BBBBBB", Style::new(), 6);
        dst.copy_area_from(&src, Rect::new(0, 0, 6, 1));
        assert_eq!(dst.row_text(0), "AAAAAA");
        assert_eq!(dst.row_text(1), "");
    }

    #[test]
    #[should_panic(expected = "width must be > 0")]
    fn zero_width_panics() {
        let _ = Buffer::new(0, 5);
    }
}
