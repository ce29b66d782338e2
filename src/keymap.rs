//! Shortcut and toolbar dispatch for formatting commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::Command;

/// A toolbar button: the command it issues and the shortcut shown in its tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarButton {
    pub command: Command,
    pub shortcut: Option<&'static str>,
}

impl ToolbarButton {
    /// Tooltip text, e.g. `Bold (Cmd/Ctrl+B)`.
    pub fn tooltip(&self) -> String {
        match self.shortcut {
            Some(shortcut) => format!("{} ({shortcut})", self.command.title()),
            None => self.command.title().to_string(),
        }
    }
}

/// Toolbar buttons in display order. A separator follows the first two.
pub const TOOLBAR: [ToolbarButton; 7] = [
    ToolbarButton {
        command: Command::Bold,
        shortcut: Some("Cmd/Ctrl+B"),
    },
    ToolbarButton {
        command: Command::Italic,
        shortcut: Some("Cmd/Ctrl+I"),
    },
    ToolbarButton {
        command: Command::Link,
        shortcut: None,
    },
    ToolbarButton {
        command: Command::List,
        shortcut: None,
    },
    ToolbarButton {
        command: Command::OrderedList,
        shortcut: None,
    },
    ToolbarButton {
        command: Command::Quote,
        shortcut: None,
    },
    ToolbarButton {
        command: Command::Code,
        shortcut: None,
    },
];

/// Map a key press to a formatting command.
///
/// Ctrl or Cmd with `b`/`i` toggles bold/italic; Tab indents and
/// Shift+Tab outdents. Key releases and everything else are ignored.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let accel = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Char('b') if accel => Some(Command::Bold),
        KeyCode::Char('i') if accel => Some(Command::Italic),
        KeyCode::BackTab => Some(Command::Outdent),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Command::Outdent),
        KeyCode::Tab if !accel => Some(Command::Indent),
        _ => None,
    }
}
