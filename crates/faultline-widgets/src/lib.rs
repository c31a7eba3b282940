#![forbid(unsafe_code)]

//! Widgets and the fault boundary.
//!
//! # Role in Faultline
//! This crate holds the `Widget` trait, the small widget set the demos
//! use, and the mechanism the project exists for: [`FaultBoundary`], a
//! container that supervises one child subtree's render pass, intercepts
//! panics before any output is committed, substitutes a fallback view,
//! and reports the fault exactly once to an injected [`FaultSink`].
//!
//! # Containment model
//! A widget's `render` is allowed to panic; the boundary runs the child
//! against a scratch frame under `catch_unwind` and only commits the
//! scratch on success. Panics raised *outside* a supervised render (in
//! update handlers, background tasks, the fallback itself) are not this
//! crate's business and propagate unchanged.

pub mod boundary;
pub mod label;
pub mod report;
pub mod trigger;

pub use boundary::{
    BoundaryState, FailureRecord, FallbackSpec, FaultBoundary, RenderFault, DEFAULT_FALLBACK_TEXT,
};
pub use label::Label;
pub use report::{FaultMetadata, FaultSink, JsonlFaultSink, MemorySink, NullSink};
pub use trigger::{BombButton, BOMB_LABEL, BOMB_PANIC_MESSAGE};

use faultline_core::geometry::Rect;
use faultline_render::frame::Frame;

/// A renderable component.
///
/// `render` takes `&self`; widgets that need render-observable state
/// (the boundary's fault latch, the bomb's armed flag) use interior
/// mutability, keeping composition free of borrow gymnastics.
pub trait Widget {
    /// Draw the widget into `area` of the frame.
    ///
    /// Implementations may panic; a supervising [`FaultBoundary`] is the
    /// designated place for such a panic to stop.
    fn render(&self, area: Rect, frame: &mut Frame);
}

impl<W: Widget + ?Sized> Widget for Box<W> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        (**self).render(area, frame);
    }
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, area: Rect, frame: &mut Frame) {
        (**self).render(area, frame);
    }
}

/// Shared handles render through to the inner widget. A caller that keeps
/// a clone can drive interior-mutable state (press a bomb) while a
/// boundary owns the other handle.
impl<W: Widget + ?Sized> Widget for std::sync::Arc<W> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        (**self).render(area, frame);
    }
}
