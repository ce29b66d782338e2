use crate::transform::{
    BlockKind, Edit, IndentDirection, Marker, Selection, apply_block_prefix, apply_code,
    insert_link, reindent_by, toggle_inline,
};

/// A formatting command issued from a shortcut or toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Command {
    Bold,
    Italic,
    Code,
    Link,
    List,
    OrderedList,
    Quote,
    Indent,
    Outdent,
}

impl Command {
    /// Run the command against `text`.
    pub fn run(self, text: &str, selection: Selection, indent_width: usize) -> Edit {
        match self {
            Self::Bold => toggle_inline(text, selection, Marker::Bold),
            Self::Italic => toggle_inline(text, selection, Marker::Italic),
            Self::Code => apply_code(text, selection),
            Self::Link => insert_link(text, selection),
            Self::List => apply_block_prefix(text, selection, BlockKind::List),
            Self::OrderedList => apply_block_prefix(text, selection, BlockKind::OrderedList),
            Self::Quote => apply_block_prefix(text, selection, BlockKind::Quote),
            Self::Indent => reindent_by(text, selection, IndentDirection::Indent, indent_width),
            Self::Outdent => reindent_by(text, selection, IndentDirection::Outdent, indent_width),
        }
    }

    /// Human-readable name, used for toolbar titles and logs.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Code => "Code",
            Self::Link => "Link",
            Self::List => "Bulleted list",
            Self::OrderedList => "Numbered list",
            Self::Quote => "Quote",
            Self::Indent => "Indent",
            Self::Outdent => "Outdent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_command_dispatches_to_its_transform() {
        let sel = Selection::new(0, 1);
        assert_eq!(Command::Bold.run("a", sel, 2).text, "**a**");
        assert_eq!(Command::Italic.run("a", sel, 2).text, "*a*");
        assert_eq!(Command::Code.run("a", sel, 2).text, "`a`");
        assert_eq!(Command::Link.run("a", sel, 2).text, "[a](https://)");
        assert_eq!(Command::List.run("a", sel, 2).text, "- a");
        assert_eq!(Command::OrderedList.run("a", sel, 2).text, "1. a");
        assert_eq!(Command::Quote.run("a", sel, 2).text, "> a");
        assert_eq!(Command::Indent.run("a", sel, 4).text, "    a");
        assert_eq!(Command::Outdent.run("   a", sel, 2).text, " a");
    }
}
