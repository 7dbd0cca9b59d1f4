//! A small modal text editor for the terminal.
//!
//! The crate is organized around a plain line buffer ([`buffer`]), a
//! cursor with vi-style motion semantics ([`cursor`]), a viewport that
//! follows the cursor ([`viewport`]), and an [`editor::Editor`] that
//! ties them together under a Normal/Insert/CommandLine mode machine.
//! The editor can run headless, which is how the integration tests
//! drive it.

pub mod buffer;
pub mod command;
pub mod cursor;
pub mod edit;
pub mod editor;
pub mod error;
pub mod ex;
pub mod file;
pub mod input;
pub mod mode;
pub mod ui;
pub mod viewport;

pub use editor::Editor;
pub use error::{EditorError, Result};
pub use mode::Mode;
