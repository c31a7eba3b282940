#![forbid(unsafe_code)]

//! The demo trigger: a button that detonates its own render pass.

use crate::Widget;
use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use faultline_render::frame::Frame;
use faultline_render::style::Style;
use std::cell::Cell;

/// The fixed panic payload the bomb raises, a `&'static str` so report
/// consumers can downcast and verify the value survived unwrapped.
pub const BOMB_PANIC_MESSAGE: &str = "\u{1F4A5} boom";

/// The activation control's on-screen label.
pub const BOMB_LABEL: &str = "[ \u{1F4A3} ]";

/// A leaf widget that deterministically panics during render once
/// pressed.
///
/// The press itself is an ordinary state change; the failure is raised
/// synchronously in the *next* render pass, which is exactly the seam a
/// supervising [`FaultBoundary`](crate::FaultBoundary) watches. The bomb
/// performs no recovery of its own.
#[derive(Debug, Default)]
pub struct BombButton {
    armed: Cell<bool>,
}

impl BombButton {
    /// A new, unarmed bomb.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The discrete user action: arm the bomb. The next render panics.
    pub fn press(&self) {
        self.armed.set(true);
    }

    /// Whether the bomb will detonate on its next render.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}

impl Widget for BombButton {
    fn render(&self, area: Rect, frame: &mut Frame) {
        frame.push_component("BombButton");
        if self.armed.get() {
            // Raised before any output is produced for this pass; the
            // component entry above stays on the path for diagnostics.
            std::panic::panic_any(BOMB_PANIC_MESSAGE);
        }
        frame
            .buffer
            .set_string(area.x, area.y, BOMB_LABEL, Style::new(), area.right());
        frame.annotate(
            Rect::new(area.x, area.y, area.width.min(6), 1),
            Role::Button,
        );
        frame.pop_component();
    }
}
