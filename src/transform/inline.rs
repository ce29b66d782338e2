use super::{ByteRange, Edit, Selection, is_cjk_or_fullwidth};

/// A symmetric inline marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Bold,
    Italic,
    Code,
}

impl Marker {
    /// The literal written on both sides of the styled text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Code => "`",
        }
    }

    /// Text inserted between the markers when nothing is selected.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Bold => "bold text",
            Self::Italic => "italic text",
            Self::Code => "code",
        }
    }

    /// The doubled form of a single-character marker, which belongs to a
    /// different style and must not be mistaken for this one.
    const fn doubled(self) -> Option<&'static str> {
        match self {
            Self::Bold => None,
            Self::Italic => Some("**"),
            Self::Code => Some("``"),
        }
    }

    /// Whether `selected` starts and ends with exactly this marker.
    fn encloses(self, selected: &str) -> bool {
        let marker = self.as_str();
        if selected.len() < marker.len() * 2
            || !selected.starts_with(marker)
            || !selected.ends_with(marker)
        {
            return false;
        }
        self.doubled()
            .is_none_or(|doubled| !selected.starts_with(doubled) && !selected.ends_with(doubled))
    }
}

/// Toggle `marker` around the selection.
///
/// Rules, first match wins:
/// 1. the marker sits just outside the selection: remove it;
/// 2. the selection itself starts and ends with the marker: strip it;
/// 3. otherwise wrap the selection (or the placeholder) in the marker,
///    padding with a space where it would touch CJK or fullwidth text.
///
/// The returned selection covers the inner text, without markers or padding.
pub fn toggle_inline(text: &str, selection: Selection, marker: Marker) -> Edit {
    let ByteRange { start, end } = ByteRange::resolve(text, selection);
    let literal = marker.as_str();
    let before = &text[..start];
    let selected = &text[start..end];
    let after = &text[end..];

    if before.ends_with(literal) && after.starts_with(literal) {
        let outer_start = start - literal.len();
        let new_text = format!(
            "{}{selected}{}",
            &text[..outer_start],
            &after[literal.len()..]
        );
        return Edit::from_bytes(new_text, outer_start, outer_start + selected.len());
    }

    if marker.encloses(selected) {
        let inner = &selected[literal.len()..selected.len() - literal.len()];
        let new_text = format!("{before}{inner}{after}");
        return Edit::from_bytes(new_text, start, start + inner.len());
    }

    let inner = if selected.is_empty() {
        marker.placeholder()
    } else {
        selected
    };
    let prefix = if needs_space(before.chars().next_back(), inner.chars().next()) {
        " "
    } else {
        ""
    };
    let suffix = if needs_space(after.chars().next(), inner.chars().next_back()) {
        " "
    } else {
        ""
    };
    let new_text = format!("{before}{prefix}{literal}{inner}{literal}{suffix}{after}");
    let inner_start = start + prefix.len() + literal.len();
    Edit::from_bytes(new_text, inner_start, inner_start + inner.len())
}

/// Whether a marker placed between `neighbor` and the inserted text's
/// `edge` character needs a separating space.
fn needs_space(neighbor: Option<char>, edge: Option<char>) -> bool {
    neighbor.is_some_and(|neighbor| {
        !neighbor.is_whitespace()
            && (is_cjk_or_fullwidth(neighbor) || edge.is_some_and(is_cjk_or_fullwidth))
    })
}
