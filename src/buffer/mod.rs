//! Document buffer: lines, positions, and the ordered line sequence.

mod document;
mod line;
mod position;

pub use document::Document;
pub use line::{Line, TAB_STOP};
pub use position::Position;
