//! Markdown Rendering Boundary
//!
//! The widget never interprets Markdown itself; every message body passes
//! through this one function on its way into the DOM. Uses pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

/// Render message text to an HTML fragment
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
