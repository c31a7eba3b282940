#![forbid(unsafe_code)]

//! Model and command types for the update/view loop.
//!
//! The runtime separates state (Model) from rendering (View) and uses a
//! command value for side effects. A render pass is one synchronous call
//! to `view` against a fresh frame; anything a model does outside that
//! call (update handlers, command execution) is outside any fault
//! boundary's supervision.

use faultline_core::event::Event;
use faultline_render::frame::Frame;
use std::fmt;

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// The message type for this model. Must be convertible from input
    /// events.
    type Message: From<Event>;

    /// Initialize the model with startup commands.
    ///
    /// Called once before any event is delivered.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Update the model in response to a message.
    ///
    /// The core state transition function. Returns commands for side
    /// effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state to a frame.
    fn view(&self, frame: &mut Frame);
}

/// Commands represent side effects requested by `init()` or `update()`.
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Quit the application.
    Quit,
    /// Send a message back to the model.
    Msg(M),
    /// Execute multiple commands in order.
    Batch(Vec<Cmd<M>>),
    /// Emit a log line.
    Log(String),
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}

impl<M: fmt::Debug> fmt::Debug for Cmd<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Quit => write!(f, "Quit"),
            Self::Msg(m) => f.debug_tuple("Msg").field(m).finish(),
            Self::Batch(cmds) => f.debug_tuple("Batch").field(cmds).finish(),
            Self::Log(s) => f.debug_tuple("Log").field(s).finish(),
        }
    }
}

impl<M> Cmd<M> {
    /// Create a no-op command.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Create a quit command.
    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    /// Create a message command.
    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    /// Create a log command.
    #[inline]
    pub fn log(msg: impl Into<String>) -> Self {
        Self::Log(msg.into())
    }

    /// Create a batch of commands; empty and singleton vectors collapse.
    pub fn batch(mut cmds: Vec<Self>) -> Self {
        match cmds.len() {
            0 => Self::None,
            1 => cmds.remove(0),
            _ => Self::Batch(cmds),
        }
    }
}
