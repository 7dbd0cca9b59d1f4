//! Terminal output: raw mode control and frame composition.

mod screen;
mod terminal;

pub use screen::{FrameContext, Screen};
pub use terminal::Terminal;
