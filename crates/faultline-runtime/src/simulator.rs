#![forbid(unsafe_code)]

//! Deterministic program simulator for testing.
//!
//! `ProgramSimulator` runs a [`Model`] without a real terminal: events are
//! injected, messages dispatched, and frames captured for assertion. The
//! captured frames keep their metadata (role annotations, component path)
//! so tests can assert on semantics as well as cell contents.
//!
//! # Example
//!
//! ```ignore
//! use faultline_runtime::ProgramSimulator;
//!
//! let mut sim = ProgramSimulator::new(Counter { value: 0 });
//! sim.init();
//! sim.send(Msg::Increment);
//! assert_eq!(sim.model().value, 1);
//!
//! let frame = sim.capture_frame(80, 24);
//! assert!(frame.buffer.contains_text("Count: 1"));
//! ```

use crate::program::{Cmd, Model};
use faultline_core::event::Event;
use faultline_render::frame::Frame;

/// Record of a command executed during simulation.
#[derive(Debug, Clone)]
pub enum CmdRecord {
    /// No-op command.
    None,
    /// Quit command.
    Quit,
    /// Message dispatched back through the model.
    Msg,
    /// Batch of commands, with its length.
    Batch(usize),
    /// Log line emitted.
    Log(String),
}

/// Deterministic simulator for [`Model`] testing.
///
/// Runs model logic without any terminal or IO dependencies.
pub struct ProgramSimulator<M: Model> {
    model: M,
    frames: Vec<Frame>,
    command_log: Vec<CmdRecord>,
    running: bool,
    logs: Vec<String>,
}

impl<M: Model> ProgramSimulator<M> {
    /// Create a simulator around the given model.
    ///
    /// The model is not initialized until [`init`](Self::init) is called.
    pub fn new(model: M) -> Self {
        Self {
            model,
            frames: Vec::new(),
            command_log: Vec::new(),
            running: true,
            logs: Vec::new(),
        }
    }

    /// Call `Model::init()` and execute the returned commands.
    pub fn init(&mut self) {
        let cmd = self.model.init();
        self.execute_cmd(cmd);
    }

    /// Inject input events into the model.
    ///
    /// Each event is converted to a message via `From<Event>` and
    /// dispatched through `Model::update()`. Stops early if a command
    /// quits the program.
    pub fn inject_events(&mut self, events: &[Event]) {
        for event in events {
            if !self.running {
                break;
            }
            let msg = M::Message::from(event.clone());
            let cmd = self.model.update(msg);
            self.execute_cmd(cmd);
        }
    }

    /// Send a message directly to the model.
    pub fn send(&mut self, msg: M::Message) {
        if !self.running {
            return;
        }
        let cmd = self.model.update(msg);
        self.execute_cmd(cmd);
    }

    /// Render the current state into a fresh frame and store it.
    ///
    /// Returns a reference to the captured frame. The view call happens
    /// on this thread with no containment of its own: a panic that no
    /// boundary inside the view intercepts propagates to the caller.
    pub fn capture_frame(&mut self, width: u16, height: u16) -> &Frame {
        let span = tracing::debug_span!("view_pass", width, height);
        let _guard = span.enter();
        let mut frame = Frame::new(width, height);
        self.model.view(&mut frame);
        let idx = self.frames.len();
        self.frames.push(frame);
        &self.frames[idx]
    }

    /// All captured frames, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The most recently captured frame, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of captured frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Shared access to the model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Whether the simulated program is still running.
    ///
    /// Returns `false` after a `Cmd::Quit` has been executed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Log lines emitted via `Cmd::Log`.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// The command execution log.
    pub fn command_log(&self) -> &[CmdRecord] {
        &self.command_log
    }

    /// Drop all captured frames.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }

    /// Drop all recorded log lines.
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    fn execute_cmd(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {
                self.command_log.push(CmdRecord::None);
            }
            Cmd::Quit => {
                self.running = false;
                self.command_log.push(CmdRecord::Quit);
            }
            Cmd::Msg(m) => {
                self.command_log.push(CmdRecord::Msg);
                let cmd = self.model.update(m);
                self.execute_cmd(cmd);
            }
            Cmd::Batch(cmds) => {
                self.command_log.push(CmdRecord::Batch(cmds.len()));
                for c in cmds {
                    self.execute_cmd(c);
                }
            }
            Cmd::Log(text) => {
                self.command_log.push(CmdRecord::Log(text.clone()));
                self.logs.push(text);
            }
        }
    }
}
