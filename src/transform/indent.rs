use super::{ByteRange, Edit, Selection};

/// Number of spaces added or removed per indentation step.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentDirection {
    Indent,
    Outdent,
}

/// Indent or outdent the lines touched by the selection by
/// [`DEFAULT_INDENT_WIDTH`] spaces.
pub fn reindent(text: &str, selection: Selection, direction: IndentDirection) -> Edit {
    reindent_by(text, selection, direction, DEFAULT_INDENT_WIDTH)
}

/// Indent or outdent the lines touched by the selection by `width` spaces.
///
/// Outdenting removes at most `width` leading spaces per line and never
/// touches other characters. The selection is shifted by what was inserted
/// or removed in front of it, so it keeps covering the same text.
pub fn reindent_by(
    text: &str,
    selection: Selection,
    direction: IndentDirection,
    width: usize,
) -> Edit {
    let ByteRange { start, end } = ByteRange::resolve(text, selection);
    let first = text[..start].matches('\n').count();
    let last = text[..end].matches('\n').count();
    let unit = " ".repeat(width);

    let mut out = String::with_capacity(text.len() + width * (last - first + 1));
    let mut new_start = start;
    let mut new_end = end;
    let mut line_offset = 0;

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let body = if index < first || index > last {
            line
        } else {
            match direction {
                IndentDirection::Indent => {
                    out.push_str(&unit);
                    if index == first {
                        new_start += width;
                    }
                    new_end += width;
                    line
                }
                IndentDirection::Outdent => {
                    let leading = line.len() - line.trim_start_matches(' ').len();
                    let removed = leading.min(width);
                    // A boundary inside the removed spaces lands where they ended.
                    if index == first {
                        new_start -= removed.min(start - line_offset);
                    }
                    new_end -= if index == last {
                        removed.min(end - line_offset)
                    } else {
                        removed
                    };
                    &line[removed..]
                }
            }
        };
        out.push_str(body);
        line_offset += line.len() + 1;
    }

    Edit::from_bytes(out, new_start, new_end)
}
