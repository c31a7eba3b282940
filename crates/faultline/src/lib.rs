#![forbid(unsafe_code)]

//! Faultline public facade.
//!
//! Re-exports the member crates under one roof and provides a prelude
//! for the common case: build a widget tree, wrap the risky subtree in a
//! [`FaultBoundary`](faultline_widgets::FaultBoundary), drive it with
//! the runtime.
//!
//! ```ignore
//! use faultline::prelude::*;
//!
//! let boundary = FaultBoundary::new(BombButton::new())
//!     .with_sink(Arc::new(MemorySink::new()));
//! ```

pub use faultline_core as core;
pub use faultline_render as render;
#[cfg(feature = "runtime")]
pub use faultline_runtime as runtime;
pub use faultline_widgets as widgets;

/// The commonly needed names, one `use` away.
pub mod prelude {
    pub use faultline_core::event::{Event, KeyCode, KeyEvent, Modifiers};
    pub use faultline_core::geometry::{Rect, Size};
    pub use faultline_core::role::Role;
    pub use faultline_render::frame::Frame;
    pub use faultline_render::style::Style;
    #[cfg(feature = "runtime")]
    pub use faultline_runtime::{Cmd, Model, ProgramSimulator};
    pub use faultline_widgets::{
        BombButton, FaultBoundary, FaultSink, Label, MemorySink, Widget, DEFAULT_FALLBACK_TEXT,
    };
}
