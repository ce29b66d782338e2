//! Markdown to HTML rendering for the preview pane.
//!
//! Options are passed per call; there is no shared renderer state.

use std::sync::LazyLock;

use comrak::{Options, markdown_to_html};
use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h([1-6])>(.*?)</h[1-6]>").expect("heading pattern is valid")
});

static OMITTED_HTML: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- raw HTML omitted -->\n?").expect("omitted html pattern is valid")
});

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap heading text in `<strong>`, for targets that flatten headings
    /// to plain paragraphs when pasted.
    pub bold_headings: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bold_headings: true,
        }
    }
}

/// Turns markdown into HTML.
pub trait Renderer {
    fn render(&self, text: &str, options: RenderOptions) -> String;
}

/// Cleans rendered HTML before it is displayed or copied.
pub trait Sanitizer {
    fn sanitize(&self, html: &str) -> String;
}

/// GitHub-flavored markdown with hard line breaks, via comrak.
///
/// Raw HTML is never passed through and unsafe link schemes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, text: &str, options: RenderOptions) -> String {
        let html = markdown_to_html(text, &create_options());
        if options.bold_headings {
            HEADING
                .replace_all(&html, "<h${1}><strong>${2}</strong></h${1}>")
                .into_owned()
        } else {
            html
        }
    }
}

/// Removes the placeholders comrak leaves where raw HTML was dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlSanitizer;

impl Sanitizer for HtmlSanitizer {
    fn sanitize(&self, html: &str) -> String {
        OMITTED_HTML.replace_all(html, "").into_owned()
    }
}

/// Render and sanitize in one step.
pub fn render_html(
    renderer: &impl Renderer,
    sanitizer: &impl Sanitizer,
    text: &str,
    options: RenderOptions,
) -> String {
    sanitizer.sanitize(&renderer.render(text, options))
}

fn create_options() -> Options {
    let mut options = Options::default();

    // GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;

    // Single newlines are line breaks, as in chat and mail clients
    options.render.hardbreaks = true;

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str, bold_headings: bool) -> String {
        render_html(
            &MarkdownRenderer,
            &HtmlSanitizer,
            text,
            RenderOptions { bold_headings },
        )
    }

    #[test]
    fn test_bold_headings_wrap_text_in_strong() {
        let html = render("# Title\n\n## Sub", true);
        assert!(html.contains("<h1><strong>Title</strong></h1>"));
        assert!(html.contains("<h2><strong>Sub</strong></h2>"));
    }

    #[test]
    fn test_plain_headings() {
        let html = render("# Title", false);
        assert!(html.contains("<h1>Title</h1>"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn test_default_options_bold_headings() {
        assert!(RenderOptions::default().bold_headings);
    }

    #[test]
    fn test_single_newline_is_line_break() {
        let html = render("a\nb", true);
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_gfm_table_and_strikethrough() {
        let html = render("| a |\n|---|\n| b |\n\n~~gone~~", true);
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn test_raw_html_is_dropped() {
        let html = render("<script>alert(1)</script>\n\nhi <b>x</b>", true);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("raw HTML omitted"));
        assert!(html.contains("hi "));
    }

    #[test]
    fn test_javascript_links_are_dropped() {
        let html = render("[x](javascript:alert(1))", true);
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_sanitizer_leaves_clean_html_alone() {
        let html = "<p>fine</p>\n";
        assert_eq!(HtmlSanitizer.sanitize(html), html);
    }
}
