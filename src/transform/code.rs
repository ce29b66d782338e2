use super::{ByteRange, Edit, Marker, Selection, line_bounds, toggle_inline};

const FENCE: &str = "```";

/// Format the selection as code.
///
/// A single-line selection toggles inline code. A selection spanning a line
/// break fences the touched lines, separating the fence from surrounding
/// text with a blank line.
pub fn apply_code(text: &str, selection: Selection) -> Edit {
    let ByteRange { start, end } = ByteRange::resolve(text, selection);
    if !text[start..end].contains('\n') {
        return toggle_inline(text, selection, Marker::Code);
    }

    let (line_start, line_end) = line_bounds(text, start, end);
    let lead = if line_start == 0 { "" } else { "\n" };
    let trail = if line_end == text.len() { "" } else { "\n" };
    let opening = format!("{lead}{FENCE}\n");

    let new_text = format!(
        "{}{opening}{}\n{FENCE}{trail}{}",
        &text[..line_start],
        &text[line_start..line_end],
        &text[line_end..]
    );
    let shift = opening.len();
    Edit::from_bytes(new_text, start + shift, end + shift)
}
