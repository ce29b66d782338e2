//! Selection-aware markdown text transformations.
//!
//! Every operation is a pure function from `(text, selection)` to an
//! [`Edit`]: a new text plus the selection the caller should reapply.
//! The input text is never mutated and nothing here touches a UI handle.
//!
//! Selections are expressed in UTF-16 code units, matching what text
//! widgets report. Out-of-range selections are clamped, never rejected.

mod block;
mod code;
mod indent;
mod inline;
mod link;
pub mod offsets;
mod script;

pub use block::{BlockKind, apply_block_prefix};
pub use code::apply_code;
pub use indent::{DEFAULT_INDENT_WIDTH, IndentDirection, reindent, reindent_by};
pub use inline::{Marker, toggle_inline};
pub use link::{LINK_LABEL_PLACEHOLDER, LINK_URL_PLACEHOLDER, insert_link};
pub use script::is_cjk_or_fullwidth;

use offsets::{byte_offset, utf16_len, utf16_offset};

/// A selection range in UTF-16 code units.
///
/// `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection spanning `start..end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Whether the selection is a caret.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both ends into `text` and order them so `start <= end`.
    pub fn clamped(self, text: &str) -> Self {
        let len = utf16_len(text);
        let start = self.start.min(len);
        let end = self.end.min(len);
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }
}

/// The result of a transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The full new text.
    pub text: String,
    /// The selection to apply to `text`.
    pub selection: Selection,
}

impl Edit {
    /// Build an edit from byte offsets into `text`.
    fn from_bytes(text: String, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= text.len());
        let selection = Selection::new(utf16_offset(&text, start), utf16_offset(&text, end));
        Self { text, selection }
    }
}

/// A clamped selection resolved to byte offsets.
#[derive(Debug, Clone, Copy)]
struct ByteRange {
    start: usize,
    end: usize,
}

impl ByteRange {
    fn resolve(text: &str, selection: Selection) -> Self {
        let selection = selection.clamped(text);
        Self {
            start: byte_offset(text, selection.start),
            end: byte_offset(text, selection.end),
        }
    }
}

/// Byte range of the full lines touched by `start..end`.
///
/// The range runs from the start of the line containing `start` to the end
/// of the line containing `end`, excluding its newline.
fn line_bounds(text: &str, start: usize, end: usize) -> (usize, usize) {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    (line_start, line_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_limits_to_text_length() {
        let sel = Selection::new(3, 99).clamped("hello");
        assert_eq!(sel, Selection::new(3, 5));
    }

    #[test]
    fn test_clamped_orders_reversed_selection() {
        let sel = Selection::new(4, 1).clamped("hello");
        assert_eq!(sel, Selection::new(1, 4));
    }

    #[test]
    fn test_clamped_counts_utf16_units() {
        // U+1F600 is two UTF-16 code units.
        let sel = Selection::new(0, 10).clamped("a😀");
        assert_eq!(sel, Selection::new(0, 3));
    }

    #[test]
    fn test_line_bounds_expands_to_whole_lines() {
        let text = "one\ntwo\nthree";
        assert_eq!(line_bounds(text, 5, 6), (4, 7));
        assert_eq!(line_bounds(text, 1, 9), (0, 13));
    }

    #[test]
    fn test_line_bounds_caret_on_empty_line() {
        let text = "a\n\nb";
        assert_eq!(line_bounds(text, 2, 2), (2, 2));
    }

    #[test]
    fn test_edit_from_bytes_converts_to_utf16() {
        let edit = Edit::from_bytes("日本語".to_string(), 3, 6);
        assert_eq!(edit.selection, Selection::new(1, 2));
    }
}
