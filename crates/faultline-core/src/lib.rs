#![forbid(unsafe_code)]

//! Core vocabulary: input events, geometry, and semantic roles.
//!
//! # Role in Faultline
//! `faultline-core` is the input layer. It owns the normalized event types
//! the runtime consumes and the geometric/semantic primitives the render
//! kernel and widgets share.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, mouse, resize).
//! - **Rect**: layout bounds and hit testing.
//! - **Role**: semantic annotations widgets attach to rendered regions,
//!   most importantly the alert role a fault fallback must expose.
//!
//! # How it fits in the system
//! The runtime (`faultline-runtime`) converts `Event` values into model
//! messages. The render kernel (`faultline-render`) is independent of
//! input; it consumes `Rect` and `Role` only.

pub mod event;
pub mod geometry;
pub mod role;

pub mod text_width {
    //! Shared display width helpers for rendering.
    //!
    //! Centralizes glyph width calculation so buffer writes and fallback
    //! layout stay in lockstep. Relies on Unicode data tables rather than
    //! ad-hoc emoji heuristics.

    use unicode_display_width::width as unicode_display_width;
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthChar;

    /// Fast-path width for pure printable ASCII.
    #[inline]
    #[must_use]
    pub fn ascii_width(text: &str) -> Option<usize> {
        if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
            Some(text.len())
        } else {
            None
        }
    }

    /// Width of a single grapheme cluster.
    #[inline]
    #[must_use]
    pub fn grapheme_width(grapheme: &str) -> usize {
        if let Some(width) = ascii_width(grapheme) {
            return width;
        }
        unicode_display_width(grapheme) as usize
    }

    /// Width of a single Unicode scalar.
    #[inline]
    #[must_use]
    pub fn char_width(ch: char) -> usize {
        if ch.is_ascii() {
            return match ch {
                ' '..='~' => 1,
                _ => 0,
            };
        }
        ch.width().unwrap_or(0)
    }

    /// Width of a string in terminal cells.
    #[inline]
    #[must_use]
    pub fn display_width(text: &str) -> usize {
        if let Some(width) = ascii_width(text) {
            return width;
        }
        text.graphemes(true).map(grapheme_width).sum()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn ascii_fast_path() {
            assert_eq!(ascii_width("hello"), Some(5));
            assert_eq!(ascii_width("héllo"), None);
        }

        #[test]
        fn emoji_is_double_width() {
            assert_eq!(display_width("\u{1F4A3}"), 2); // 💣
            assert_eq!(display_width("\u{1F4A5}"), 2); // 💥
        }

        #[test]
        fn mixed_text_width() {
            assert_eq!(display_width("[ \u{1F4A3} ]"), 6);
        }

        #[test]
        fn char_width_ascii_and_wide() {
            assert_eq!(char_width('a'), 1);
            assert_eq!(char_width('\u{1F4A3}'), 2);
            assert_eq!(char_width('\u{0301}'), 0);
        }
    }
}
