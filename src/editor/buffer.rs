use ropey::Rope;

use super::Command;
use crate::transform::{DEFAULT_INDENT_WIDTH, Edit, Selection};

/// The live text of an editing surface together with its selection.
///
/// Formatting commands run through the pure transforms in
/// [`crate::transform`]; the buffer swaps in the returned text and
/// reapplies the returned selection. Selections are in UTF-16 code units.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    indent_width: usize,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            indent_width: DEFAULT_INDENT_WIDTH,
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Use `width` spaces per indent step.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// The current selection.
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').to_string())
    }

    /// Length of the buffer in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The currently selected text.
    pub fn selected_text(&self) -> String {
        let start = self.rope.utf16_cu_to_char(self.selection.start);
        let end = self.rope.utf16_cu_to_char(self.selection.end);
        self.rope.slice(start..end).to_string()
    }

    /// Set the selection, clamped to the buffer and snapped to characters.
    pub fn select(&mut self, selection: Selection) {
        let len = self.len_utf16();
        let start = self.snap(selection.start.min(len));
        let end = self.snap(selection.end.min(len));
        self.selection = Selection::new(start.min(end), start.max(end));
    }

    /// Replace the whole text, keeping the selection where it still fits.
    pub fn set_text(&mut self, text: &str) {
        if self.rope == text {
            return;
        }
        self.rope = Rope::from_str(text);
        self.select(self.selection);
        self.dirty = true;
    }

    /// Replace the selection with `s` and put the caret after it.
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() && self.selection.is_empty() {
            return;
        }
        let start = self.rope.utf16_cu_to_char(self.selection.start);
        let end = self.rope.utf16_cu_to_char(self.selection.end);
        self.rope.remove(start..end);
        self.rope.insert(start, s);
        let caret = self.rope.char_to_utf16_cu(start + s.chars().count());
        self.selection = Selection::caret(caret);
        self.dirty = true;
    }

    /// Delete the selection, or the character before the caret (Backspace).
    ///
    /// Returns `true` if anything was deleted.
    pub fn delete_back(&mut self) -> bool {
        let end = self.rope.utf16_cu_to_char(self.selection.end);
        let start = if self.selection.is_empty() {
            if end == 0 {
                return false;
            }
            end - 1
        } else {
            self.rope.utf16_cu_to_char(self.selection.start)
        };
        self.rope.remove(start..end);
        self.selection = Selection::caret(self.rope.char_to_utf16_cu(start));
        self.dirty = true;
        true
    }

    /// Run a formatting command against the text and selection.
    ///
    /// Returns `true` if the text changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let Edit { text, selection } = command.run(&self.text(), self.selection, self.indent_width);
        let changed = self.rope != text.as_str();
        if changed {
            self.rope = Rope::from_str(&text);
            self.dirty = true;
        }
        self.select(selection);
        tracing::debug!(
            command = command.title(),
            changed,
            start = self.selection.start,
            end = self.selection.end,
            "applied command"
        );
        changed
    }

    /// Snap a UTF-16 offset back to the start of the character containing it.
    fn snap(&self, units: usize) -> usize {
        let char_idx = self.rope.utf16_cu_to_char(units);
        self.rope.char_to_utf16_cu(char_idx)
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("indent_width", &self.indent_width)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(1), Some("world".to_string()));
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = EditorBuffer::from_text("hello");
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_caret_starts_at_origin_and_buffer_is_clean() {
        let buf = EditorBuffer::from_text("hello");
        assert_eq!(buf.selection(), Selection::caret(0));
        assert!(!buf.is_dirty());
    }

    // --- Selection ---

    #[test]
    fn test_select_clamps_and_orders() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.select(Selection::new(9, 2));
        assert_eq!(buf.selection(), Selection::new(2, 5));
        assert_eq!(buf.selected_text(), "llo");
    }

    #[test]
    fn test_select_snaps_out_of_surrogate_pair() {
        let mut buf = EditorBuffer::from_text("a😀b");
        buf.select(Selection::new(2, 4));
        assert_eq!(buf.selection(), Selection::new(1, 4));
        assert_eq!(buf.selected_text(), "😀b");
    }

    // --- Typing ---

    #[test]
    fn test_insert_str_replaces_selection() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.select(Selection::new(6, 11));
        buf.insert_str("there");
        assert_eq!(buf.text(), "hello there");
        assert_eq!(buf.selection(), Selection::caret(11));
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_insert_str_empty_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.insert_str("");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_insert_str_counts_utf16_units() {
        let mut buf = EditorBuffer::from_text("");
        buf.insert_str("😀字");
        assert_eq!(buf.selection(), Selection::caret(3));
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = EditorBuffer::from_text("hello");
        assert!(!buf.delete_back());
        assert_eq!(buf.text(), "hello");
    }

    #[test]
    fn test_delete_back_removes_char_before_caret() {
        let mut buf = EditorBuffer::from_text("café");
        buf.select(Selection::caret(4));
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "caf");
        assert_eq!(buf.selection(), Selection::caret(3));
    }

    #[test]
    fn test_delete_back_removes_selection() {
        let mut buf = EditorBuffer::from_text("hello\nworld");
        buf.select(Selection::new(3, 8));
        assert!(buf.delete_back());
        assert_eq!(buf.text(), "helrld");
        assert_eq!(buf.selection(), Selection::caret(3));
    }

    #[test]
    fn test_set_text_keeps_selection_in_bounds() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.select(Selection::new(6, 11));
        buf.set_text("hi");
        assert_eq!(buf.selection(), Selection::new(2, 2));
        assert!(buf.is_dirty());
    }

    // --- Commands ---

    #[test]
    fn test_apply_bold_then_bold_restores() {
        let mut buf = EditorBuffer::from_text("make this loud");
        buf.select(Selection::new(5, 9));
        assert!(buf.apply(Command::Bold));
        assert_eq!(buf.text(), "make **this** loud");
        assert_eq!(buf.selected_text(), "this");

        assert!(buf.apply(Command::Bold));
        assert_eq!(buf.text(), "make this loud");
        assert_eq!(buf.selection(), Selection::new(5, 9));
    }

    #[test]
    fn test_apply_without_change_keeps_buffer_clean() {
        let mut buf = EditorBuffer::from_text("- item");
        assert!(!buf.apply(Command::List));
        assert!(!buf.is_dirty());
        assert_eq!(buf.selection(), Selection::new(0, 6));
    }

    #[test]
    fn test_apply_uses_configured_indent_width() {
        let mut buf = EditorBuffer::from_text("a\nb").with_indent_width(4);
        buf.select(Selection::new(0, 3));
        buf.apply(Command::Indent);
        assert_eq!(buf.text(), "    a\n    b");
        assert_eq!(buf.selection(), Selection::new(4, 11));
    }

    #[test]
    fn test_apply_link_selects_url() {
        let mut buf = EditorBuffer::from_text("docs");
        buf.select(Selection::new(0, 4));
        buf.apply(Command::Link);
        assert_eq!(buf.selected_text(), "https://");
    }

    #[test]
    fn test_mark_clean_resets_dirty() {
        let mut buf = EditorBuffer::from_text("x");
        buf.apply(Command::Quote);
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }
}
