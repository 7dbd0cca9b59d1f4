//! Terminal input: key events and the raw-mode reader.

mod key;
mod reader;

pub use key::Key;
pub use reader::KeyReader;
