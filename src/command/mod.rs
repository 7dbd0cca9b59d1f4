//! Normal-mode command decoding and pending-input state.

mod normal;
mod pending;

pub use normal::{Command, EditAction, InsertAt, Motion};
pub use pending::Pending;
