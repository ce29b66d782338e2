//! Editing surface adapter.
//!
//! Owns the live text and selection, and applies formatting commands
//! through the pure transforms, reapplying the selection they return.

mod buffer;
mod command;

pub use buffer::EditorBuffer;
pub use command::Command;
