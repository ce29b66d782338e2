// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::StoreError)
    clippy::module_name_repetitions
)]

//! # Unimark
//!
//! A markdown editing engine with selection-aware formatting commands.
//!
//! Unimark provides:
//! - Bold, italic and inline-code toggles that undo themselves
//! - Link insertion with the URL selected for typing
//! - Bulleted, numbered and quoted blocks, and fenced code blocks
//! - Tab / Shift+Tab indentation of whole lines
//! - Spacing around markers next to Japanese, Chinese and fullwidth text
//!
//! ## Architecture
//!
//! The formatting logic is a set of pure functions over
//! `(text, selection)`. Everything stateful wraps around them:
//! - **Transform**: text in, text and selection out
//! - **Editor**: the live buffer that applies transforms
//! - **Session**: buffer plus persistence and rendering
//!
//! ## Modules
//!
//! - [`transform`]: Formatting transforms
//! - [`editor`]: Live buffer and commands
//! - [`keymap`]: Shortcut and toolbar dispatch
//! - [`render`]: Markdown preview rendering
//! - [`store`]: Saved state and share URLs
//! - [`session`]: Editing session
//! - [`clipboard`]: Copying the preview and share links
//! - [`config`]: Saved command-line defaults

pub mod clipboard;
pub mod config;
pub mod editor;
pub mod keymap;
pub mod render;
pub mod session;
pub mod store;
pub mod transform;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editor::{Command, EditorBuffer};
    pub use crate::session::Session;
    pub use crate::transform::{Edit, Selection};
}
