use super::{ByteRange, Edit, Selection};

/// Label used when a link is inserted with nothing selected.
pub const LINK_LABEL_PLACEHOLDER: &str = "link text";

/// URL written into every new link, selected so it can be typed over.
pub const LINK_URL_PLACEHOLDER: &str = "https://";

/// Turn the selection into `[label](https://)` and select the URL.
pub fn insert_link(text: &str, selection: Selection) -> Edit {
    let ByteRange { start, end } = ByteRange::resolve(text, selection);
    let label = match &text[start..end] {
        "" => LINK_LABEL_PLACEHOLDER,
        selected => selected,
    };
    let new_text = format!(
        "{}[{label}]({LINK_URL_PLACEHOLDER}){}",
        &text[..start],
        &text[end..]
    );
    let url_start = start + label.len() + "[](".len();
    Edit::from_bytes(new_text, url_start, url_start + LINK_URL_PLACEHOLDER.len())
}
