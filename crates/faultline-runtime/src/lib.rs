#![forbid(unsafe_code)]

//! Elm-style runtime: models, commands, and a deterministic simulator.
//!
//! # Role in Faultline
//! The runtime owns the update/view loop discipline: discrete events are
//! converted to messages, `update` transitions state, `view` renders into
//! a fresh [`Frame`](faultline_render::Frame). Render passes are
//! synchronous and single-threaded, which is the scheduling model the
//! fault boundary's atomicity guarantees lean on.
//!
//! There is no terminal backend here; [`simulator::ProgramSimulator`]
//! drives models headlessly for demos and tests.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model};
pub use simulator::{CmdRecord, ProgramSimulator};
