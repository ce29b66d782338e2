//! Clipboard writers for copying the preview or a share link.

use std::io::{self, Write};

use base64::Engine;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),
    #[error("clipboard is unavailable")]
    Unavailable,
}

/// Somewhere copied output can go.
pub trait Clipboard {
    /// Copy rendered HTML. Writers that only carry plain text copy the
    /// markup itself.
    fn write_html(&mut self, html: &str) -> Result<(), ClipboardError>;

    /// Copy plain text.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// What a [`MemoryClipboard`] last received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardContent {
    Html(String),
    Text(String),
}

#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Option<ClipboardContent>,
}

impl MemoryClipboard {
    pub const fn content(&self) -> Option<&ClipboardContent> {
        self.content.as_ref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_html(&mut self, html: &str) -> Result<(), ClipboardError> {
        self.content = Some(ClipboardContent::Html(html.to_owned()));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.content = Some(ClipboardContent::Text(text.to_owned()));
        Ok(())
    }
}

/// Copies through the terminal with an OSC 52 escape sequence.
///
/// The terminal's clipboard holds plain text only, so HTML is copied as
/// its source.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_html(&mut self, html: &str) -> Result<(), ClipboardError> {
        self.write_text(html)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

/// Outcome of a copy, shown to the user as a short status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Copied => "Copied!",
            Self::Failed => "Copy failed",
        }
    }

    pub const fn is_copied(self) -> bool {
        matches!(self, Self::Copied)
    }
}
