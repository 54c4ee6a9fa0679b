//! Markdown to HTML for posts written in Markdown.

use pulldown_cmark::{Options, Parser, html};

/// Render Markdown `source` to HTML.
///
/// Excerpt markers are HTML comments, which pass through as raw HTML, so the
/// rendered output can be truncated the same way as a hand-written body.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(source, options);

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
