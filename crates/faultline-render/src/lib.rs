#![forbid(unsafe_code)]

//! Deterministic render kernel.
//!
//! # Role in Faultline
//! `faultline-render` owns the cell grid widgets draw into and the frame
//! metadata a render pass accumulates: the component path (the diagnostic
//! trail a fault report captures) and semantic role annotations.
//!
//! # Primary responsibilities
//! - **Cell/Buffer**: a row-major grid of styled glyph cells with
//!   wide-grapheme awareness.
//! - **Frame**: buffer + component path + role annotations for one pass.
//! - **Headless assertions**: `row_text`/`assert_matches` helpers so CI
//!   tests verify rendered output without a terminal.
//!
//! The kernel is independent of input and IO; it never touches a real
//! terminal.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod style;

pub use buffer::Buffer;
pub use cell::{Cell, CellContent};
pub use frame::Frame;
pub use style::{Attrs, Color, Style};
