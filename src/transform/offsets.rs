//! Conversions between UTF-16 code-unit offsets and UTF-8 byte offsets.

/// Length of `text` in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

/// Byte offset in `text` of the UTF-16 offset `units`.
///
/// Offsets past the end map to `text.len()`. An offset that lands inside a
/// surrogate pair snaps back to the start of that character.
pub fn byte_offset(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (idx, ch) in text.char_indices() {
        if seen >= units {
            return idx;
        }
        seen += ch.len_utf16();
        if seen > units {
            return idx;
        }
    }
    text.len()
}

/// UTF-16 offset of the byte offset `byte` in `text`.
///
/// `byte` must lie on a char boundary.
pub fn utf16_offset(text: &str, byte: usize) -> usize {
    utf16_len(&text[..byte])
}
