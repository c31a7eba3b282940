#![forbid(unsafe_code)]

//! The fault boundary: supervised renders, fallback substitution, and
//! one-shot reporting.
//!
//! # Supervision model
//! A [`FaultBoundary`] owns exactly one child widget. While healthy it
//! renders the child into a *scratch* frame under `catch_unwind`; only a
//! successful pass is committed to the real frame, so a panicking child
//! can never leave half-drawn output behind. On a panic the boundary
//! captures the payload, the component path frozen at the failure site,
//! and a timestamp; reports once to its [`FaultSink`]; latches into the
//! faulted state; and renders the fallback — all inside the same render
//! pass, so no observer ever sees an intermediate state.
//!
//! # Recovery
//! The faulted state is sticky. Swapping the child of a faulted boundary
//! does not clear it; the owner recovers by constructing a fresh
//! boundary (the re-keying analogue). See `replace_child`.
//!
//! # What is NOT contained
//! Panics raised outside a supervised render (update handlers, tasks,
//! the fallback's own render) propagate unchanged.

use crate::report::{FaultMetadata, FaultSink, NullSink};
use crate::{Label, Widget};
use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use faultline_render::frame::Frame;
use faultline_render::style::Style;
use std::any::Any;
use std::borrow::Cow;
use std::cell::RefCell;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use web_time::{SystemTime, UNIX_EPOCH};

/// Default fallback text. Deployments that need different wording set a
/// per-boundary override instead of patching this constant.
pub const DEFAULT_FALLBACK_TEXT: &str = "Something went wrong.";

/// A captured render panic: the original payload plus a best-effort
/// extracted message.
///
/// The payload is carried unwrapped so report consumers can downcast to
/// the exact value the subtree raised; nothing is lost in transit.
pub struct RenderFault {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl RenderFault {
    /// Build a fault from a payload captured by `catch_unwind`.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<opaque panic payload>".to_string()
        };
        Self { message, payload }
    }

    /// The extracted panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The raised value, exactly as the subtree panicked with it.
    #[must_use]
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Downcast the payload to its concrete type.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl fmt::Debug for RenderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderFault")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RenderFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Immutable record of one contained failure.
#[derive(Debug)]
pub struct FailureRecord {
    fault: RenderFault,
    metadata: FaultMetadata,
}

impl FailureRecord {
    /// The captured fault.
    #[must_use]
    pub fn fault(&self) -> &RenderFault {
        &self.fault
    }

    /// Metadata captured at interception time.
    #[must_use]
    pub fn metadata(&self) -> &FaultMetadata {
        &self.metadata
    }
}

/// Boundary lifecycle state.
#[derive(Debug, Default)]
pub enum BoundaryState {
    /// No captured failure; the child renders normally.
    #[default]
    Healthy,
    /// A failure has been captured; only the fallback renders.
    Faulted(FailureRecord),
}

impl BoundaryState {
    /// Whether a failure has been captured.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        matches!(self, Self::Faulted(_))
    }
}

/// What to render in place of a faulted subtree.
pub enum FallbackSpec {
    /// The built-in alert: [`DEFAULT_FALLBACK_TEXT`] with [`Role::Alert`].
    Default,
    /// Override text, still rendered as an alert.
    Text(Cow<'static, str>),
    /// Caller-supplied substitute widget; takes full control of the area
    /// including role annotations.
    Widget(Box<dyn Widget>),
}

impl fmt::Debug for FallbackSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::Widget(_) => write!(f, "Widget(..)"),
        }
    }
}

/// A stateful container that supervises exactly one child subtree.
///
/// State lives behind a `RefCell` because `Widget::render` takes `&self`
/// while interception must latch the failure; the render cycle is
/// single-threaded and the boundary is the only reader and writer.
pub struct FaultBoundary {
    child: Box<dyn Widget>,
    fallback: FallbackSpec,
    sink: Arc<dyn FaultSink>,
    state: RefCell<BoundaryState>,
}

impl FaultBoundary {
    /// Supervise `child` with the default fallback and a discard sink.
    pub fn new(child: impl Widget + 'static) -> Self {
        Self {
            child: Box::new(child),
            fallback: FallbackSpec::Default,
            sink: Arc::new(NullSink),
            state: RefCell::new(BoundaryState::Healthy),
        }
    }

    /// Inject the reporting collaborator.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn FaultSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Override the fallback text.
    #[must_use]
    pub fn with_fallback_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.fallback = FallbackSpec::Text(text.into());
        self
    }

    /// Supply a substitute widget as the fallback.
    #[must_use]
    pub fn with_fallback_widget(mut self, widget: impl Widget + 'static) -> Self {
        self.fallback = FallbackSpec::Widget(Box::new(widget));
        self
    }

    /// Whether a failure has been captured.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.state.borrow().is_faulted()
    }

    /// Inspect the captured failure, if any.
    pub fn with_failure<R>(&self, f: impl FnOnce(&FailureRecord) -> R) -> Option<R> {
        match &*self.state.borrow() {
            BoundaryState::Faulted(record) => Some(f(record)),
            BoundaryState::Healthy => None,
        }
    }

    /// Swap the supervised child.
    ///
    /// Deliberately does NOT clear a captured failure: changing children
    /// under a faulted boundary keeps the fallback. Recovery requires a
    /// fresh boundary instance.
    pub fn replace_child(&mut self, child: impl Widget + 'static) {
        self.child = Box::new(child);
    }

    fn render_fallback(&self, area: Rect, frame: &mut Frame) {
        match &self.fallback {
            FallbackSpec::Default => {
                Label::new(DEFAULT_FALLBACK_TEXT)
                    .style(Style::new().bold())
                    .role(Role::Alert)
                    .render(area, frame);
            }
            FallbackSpec::Text(text) => {
                Label::new(text.clone())
                    .style(Style::new().bold())
                    .role(Role::Alert)
                    .render(area, frame);
            }
            // A panic here is fatal by contract; the handler does not
            // supervise its own substitute.
            FallbackSpec::Widget(widget) => widget.render(area, frame),
        }
    }

    fn intercept(&self, payload: Box<dyn Any + Send>, scratch: &Frame) -> FailureRecord {
        let fault = RenderFault::from_payload(payload);
        let metadata = FaultMetadata {
            component_stack: scratch.component_stack_string(),
            timestamp_ms: epoch_millis(),
        };

        tracing::error!(
            fault = fault.message(),
            component_stack = %metadata.component_stack,
            "render fault contained"
        );

        // Report before the fallback is committed, but never let the sink
        // take the render pass down with it.
        let sink = Arc::clone(&self.sink);
        let report = catch_unwind(AssertUnwindSafe(|| sink.report(&fault, &metadata)));
        if report.is_err() {
            tracing::warn!("fault sink panicked; report dropped");
        }

        FailureRecord { fault, metadata }
    }
}

impl Widget for FaultBoundary {
    fn render(&self, area: Rect, frame: &mut Frame) {
        frame.push_component("FaultBoundary");

        if self.state.borrow().is_faulted() {
            // Already latched: fallback only, no re-report.
            self.render_fallback(area, frame);
            frame.pop_component();
            return;
        }

        // Supervised render: the child draws into a scratch frame seeded
        // with the ambient component path. Nothing is committed until the
        // outcome is known.
        let mut scratch = Frame::new(frame.width(), frame.height());
        scratch.seed_component_path(frame.component_path());

        let outcome = {
            let child = &self.child;
            catch_unwind(AssertUnwindSafe(|| child.render(area, &mut scratch)))
        };

        match outcome {
            Ok(()) => {
                frame.commit(&scratch, area);
            }
            Err(payload) => {
                let record = self.intercept(payload, &scratch);
                *self.state.borrow_mut() = BoundaryState::Faulted(record);
                frame.clear_annotations_in(area);
                self.render_fallback(area, frame);
            }
        }

        frame.pop_component();
    }
}

fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
