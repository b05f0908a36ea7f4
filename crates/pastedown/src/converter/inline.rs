//! Inline formatting: emphasis, strikethrough, highlight, code spans and
//! fenced blocks, links, and images.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Context, serialize_children};
use crate::dom::Element;
use crate::text;
use crate::url::sanitize_url;

static LANGUAGE_CLASS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"language-([a-z0-9_+-]+)").expect("valid regex"));

/// Wrap the trimmed inner content in a symmetric marker. Empty inner
/// content yields empty output, never a bare `****`.
pub(super) fn wrap(el: &Element, ctx: &Context, marker: &str) -> String {
    let inner = serialize_children(&el.children, ctx);
    let inner = inner.trim();
    if inner.is_empty() {
        String::new()
    } else {
        format!("{marker}{inner}{marker}")
    }
}

/// `<mark>` is kept as raw HTML; Markdown has no highlight syntax.
pub(super) fn highlight(el: &Element, ctx: &Context) -> String {
    let inner = serialize_children(&el.children, ctx);
    let inner = inner.trim();
    if inner.is_empty() {
        String::new()
    } else {
        format!("<mark>{inner}</mark>")
    }
}

/// An inline code span. The fence is one backtick longer than the longest
/// backtick run inside the content, so the wrapper never collides with
/// it; internal newlines collapse to spaces.
pub(super) fn inline_code(el: &Element) -> String {
    let flattened = text::collapse_newlines(&el.plain_text());
    let content = flattened.trim();
    if content.is_empty() {
        return String::new();
    }
    let fence = "`".repeat(text::longest_backtick_run(content) + 1);
    format!("{fence}{content}{fence}")
}

/// A `<pre>` block becomes a fenced code block. The code text comes from
/// a descendant `<code>` element when there is one, else from the `<pre>`
/// itself; a `language-xxx` class on either supplies the info string.
pub(super) fn code_block(el: &Element) -> String {
    let code_el = el.find_descendant("code");
    let code_text = code_el.map_or_else(|| el.plain_text(), Element::plain_text);
    let body = code_text.trim_end_matches('\n');

    let class = code_el
        .and_then(|code| code.attr("class"))
        .filter(|value| !value.is_empty())
        .or_else(|| el.attr("class"))
        .unwrap_or_default()
        .to_ascii_lowercase();
    let language = LANGUAGE_CLASS_RE
        .captures(&class)
        .map(|captures| captures[1].to_string());

    let fence = "`".repeat(3.max(text::longest_backtick_run(body) + 1));
    match language {
        Some(lang) => format!("\n\n{fence} {lang}\n{body}\n{fence}\n\n"),
        None => format!("\n\n{fence}\n{body}\n{fence}\n\n"),
    }
}

/// A link. Rejected or missing `href` renders the bare text; empty link
/// text falls back to the href itself.
pub(super) fn link(el: &Element, ctx: &Context) -> String {
    let href = el.attr("href").and_then(sanitize_url);
    let inner = text::collapse_blank_lines(&serialize_children(&el.children, ctx));
    let inner = inner.trim();

    match href {
        None => inner.to_string(),
        Some(href) => {
            let label = if inner.is_empty() { href.as_str() } else { inner };
            format!("[{label}]({href})")
        }
    }
}

/// An image. A rejected or missing `src` degrades to the alt text.
pub(super) fn image(el: &Element) -> String {
    let src = el.attr("src").and_then(sanitize_url);
    let alt = el.attr("alt").unwrap_or_default().trim();
    match src {
        None => alt.to_string(),
        Some(src) => format!("![{alt}]({src})"),
    }
}
