//! An editing session: the live buffer plus its collaborators.
//!
//! Every change is written to the store right away. Store failures are
//! logged and never touch the buffer.

use crossterm::event::KeyEvent;

use crate::clipboard::{Clipboard, ClipboardError, CopyStatus};
use crate::editor::{Command, EditorBuffer};
use crate::keymap::command_for_key;
use crate::render::{RenderOptions, Renderer, Sanitizer, render_html};
use crate::store::{ShareUrl, StateStore, resolve_initial_text};
use crate::transform::Selection;

pub struct Session<S: StateStore> {
    buffer: EditorBuffer,
    store: S,
    render_options: RenderOptions,
    edited: bool,
    copy_status: Option<CopyStatus>,
}

impl<S: StateStore> Session<S> {
    /// Open a session on the stored text, or on the text carried by
    /// `share_url` when there is one.
    ///
    /// `prefer_url` is asked only when both texts exist and differ.
    pub fn open(
        store: S,
        share_url: Option<&str>,
        prefer_url: impl FnOnce(&str, &str) -> bool,
    ) -> Self {
        let stored = store.load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not load saved text, starting empty");
            String::new()
        });
        let from_url = share_url.and_then(|url| {
            ShareUrl::decode(url)
                .inspect_err(|err| tracing::warn!(%err, "ignoring unreadable share URL"))
                .ok()
                .flatten()
        });
        let initial = resolve_initial_text(from_url, stored, prefer_url);

        let mut session = Self {
            buffer: EditorBuffer::from_text(&initial.text),
            store,
            render_options: RenderOptions::default(),
            edited: false,
            copy_status: None,
        };
        if initial.persist {
            session.persist();
        }
        session
    }

    /// Use `width` spaces per indent step.
    #[must_use]
    pub fn with_indent_width(self, width: usize) -> Self {
        Self {
            buffer: self.buffer.with_indent_width(width),
            ..self
        }
    }

    #[must_use]
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    pub const fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub const fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    /// Whether the text was changed during this session.
    pub const fn is_edited(&self) -> bool {
        self.edited
    }

    pub fn select(&mut self, selection: Selection) {
        self.buffer.select(selection);
    }

    /// Run a formatting command. Returns `true` if the text changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = self.buffer.apply(command);
        if changed {
            self.persist();
        }
        changed
    }

    /// Dispatch a key press. Returns `true` if it mapped to a command, in
    /// which case the host should not process the key further.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(command) = command_for_key(key) else {
            return false;
        };
        self.apply(command);
        true
    }

    /// Replace the text after free typing in the editing surface.
    pub fn replace_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        if self.buffer.is_dirty() {
            self.persist();
        }
    }

    /// Type `s` over the selection.
    pub fn insert_str(&mut self, s: &str) {
        self.buffer.insert_str(s);
        if self.buffer.is_dirty() {
            self.persist();
        }
    }

    /// Backspace. Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let deleted = self.buffer.delete_back();
        if deleted {
            self.persist();
        }
        deleted
    }

    pub const fn bold_headings(&self) -> bool {
        self.render_options.bold_headings
    }

    pub const fn toggle_bold_headings(&mut self) {
        self.render_options.bold_headings = !self.render_options.bold_headings;
    }

    /// The sanitized preview HTML for the current text.
    pub fn html(&self, renderer: &impl Renderer, sanitizer: &impl Sanitizer) -> String {
        render_html(renderer, sanitizer, &self.text(), self.render_options)
    }

    /// A link that reopens the current text.
    pub fn share_url(&self, share: &ShareUrl) -> String {
        share.encode(&self.text())
    }

    /// Copy the sanitized preview HTML.
    pub fn copy_html(
        &mut self,
        renderer: &impl Renderer,
        sanitizer: &impl Sanitizer,
        clipboard: &mut impl Clipboard,
    ) -> CopyStatus {
        let html = self.html(renderer, sanitizer);
        let result = clipboard.write_html(&html);
        self.finish_copy(result)
    }

    /// Copy a link that reopens the current text.
    pub fn copy_share_url(
        &mut self,
        share: &ShareUrl,
        clipboard: &mut impl Clipboard,
    ) -> CopyStatus {
        let url = self.share_url(share);
        let result = clipboard.write_text(&url);
        self.finish_copy(result)
    }

    /// Outcome of the last copy, until dismissed.
    pub const fn copy_status(&self) -> Option<CopyStatus> {
        self.copy_status
    }

    pub const fn dismiss_copy_status(&mut self) {
        self.copy_status = None;
    }

    fn finish_copy(&mut self, result: Result<(), ClipboardError>) -> CopyStatus {
        let status = match result {
            Ok(()) => CopyStatus::Copied,
            Err(err) => {
                tracing::warn!(%err, "could not copy to clipboard");
                CopyStatus::Failed
            }
        };
        self.copy_status = Some(status);
        status
    }

    fn persist(&mut self) {
        self.edited = true;
        match self.store.save(&self.buffer.text()) {
            Ok(()) => self.buffer.mark_clean(),
            Err(err) => tracing::warn!(%err, "could not save text"),
        }
    }
}

impl<S: StateStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("buffer", &self.buffer)
            .field("render_options", &self.render_options)
            .field("edited", &self.edited)
            .field("copy_status", &self.copy_status)
            .finish_non_exhaustive()
    }
}
