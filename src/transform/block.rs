use std::sync::LazyLock;

use regex::Regex;

use super::{ByteRange, Edit, Selection, line_bounds};

static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\. ").expect("ordered list pattern is valid"));

/// A line prefix applied to every line of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `- item`
    List,
    /// `1. item`, numbered by position within the block
    OrderedList,
    /// `> text`
    Quote,
}

impl BlockKind {
    /// Whether a line (with leading whitespace removed) already carries this prefix.
    fn is_applied(self, content: &str) -> bool {
        match self {
            Self::List => content.starts_with("- "),
            Self::OrderedList => ORDERED_MARKER.is_match(content),
            Self::Quote => content.starts_with("> "),
        }
    }

    /// The prefix for the line at zero-based `index` within the block.
    fn prefix(self, index: usize) -> String {
        match self {
            Self::List => "- ".to_string(),
            Self::OrderedList => format!("{}. ", index + 1),
            Self::Quote => "> ".to_string(),
        }
    }
}

/// Prefix every line touched by the selection with `kind`'s marker.
///
/// Lines that already carry the marker are left alone, so applying the same
/// kind twice is a no-op. The returned selection spans the rewritten lines.
pub fn apply_block_prefix(text: &str, selection: Selection, kind: BlockKind) -> Edit {
    let ByteRange { start, end } = ByteRange::resolve(text, selection);
    let (line_start, line_end) = line_bounds(text, start, end);

    let block = text[line_start..line_end]
        .split('\n')
        .enumerate()
        .map(|(index, line)| prefix_line(line, index, kind))
        .collect::<Vec<_>>()
        .join("\n");

    let new_text = format!("{}{block}{}", &text[..line_start], &text[line_end..]);
    Edit::from_bytes(new_text, line_start, line_start + block.len())
}

fn prefix_line(line: &str, index: usize, kind: BlockKind) -> String {
    let content = line.trim_start();
    if kind.is_applied(content) {
        return line.to_string();
    }
    let indent = &line[..line.len() - content.len()];
    format!("{indent}{}{content}", kind.prefix(index))
}
