#![forbid(unsafe_code)]

use crate::Widget;
use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use faultline_core::text_width::display_width;
use faultline_render::frame::Frame;
use faultline_render::style::Style;
use std::borrow::Cow;

/// Horizontal text alignment within the widget area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A widget that renders a single line of styled text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: Cow<'static, str>,
    style: Style,
    alignment: Alignment,
    role: Role,
}

impl Label {
    /// Create a new label from the given text.
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            alignment: Alignment::Left,
            role: Role::Generic,
        }
    }

    /// Set the text style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the text alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the semantic role annotated over the rendered area.
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// The label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn start_x(&self, area: Rect) -> u16 {
        let width = u16::try_from(display_width(&self.text)).unwrap_or(u16::MAX);
        match self.alignment {
            Alignment::Left => area.x,
            Alignment::Center => area
                .x
                .saturating_add(area.width.saturating_sub(width) / 2),
            Alignment::Right => area.x.saturating_add(area.width.saturating_sub(width)),
        }
    }
}

impl Widget for Label {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let _span = tracing::debug_span!(
            "widget_render",
            widget = "Label",
            x = area.x,
            y = area.y,
            w = area.width,
            h = area.height
        )
        .entered();

        frame.push_component("Label");
        if !area.is_empty() {
            let x = self.start_x(area);
            frame
                .buffer
                .set_string(x, area.y, &self.text, self.style, area.right());
            if self.role != Role::Generic {
                frame.annotate(area, self.role);
            }
        }
        frame.pop_component();
    }
}
