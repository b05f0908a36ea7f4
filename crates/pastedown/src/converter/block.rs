//! Block formatting: paragraphs, headings, and blockquotes.

use super::{Context, serialize_children};
use crate::dom::Element;
use crate::text;

/// `<p>`/`<div>`: collapsed, trimmed children with a trailing newline.
/// Standalone blocks are padded with blank lines; inside a list item the
/// padding is dropped so item content stays compact.
pub(super) fn paragraph(el: &Element, ctx: &Context) -> String {
    let inner = text::collapse_blank_lines(&serialize_children(&el.children, ctx));
    let inner = inner.trim();
    if inner.is_empty() {
        return String::new();
    }
    if ctx.in_list_item {
        format!("{inner}\n")
    } else {
        format!("\n\n{inner}\n\n")
    }
}

/// `<h1>`..`<h6>`, with the same in-list-item padding rule as paragraphs.
pub(super) fn heading(el: &Element, ctx: &Context) -> String {
    let level: usize = el.name[1..].parse().unwrap_or(1);
    let inner = text::collapse_blank_lines(&serialize_children(&el.children, ctx));
    let inner = inner.trim();
    if inner.is_empty() {
        return String::new();
    }
    let heading = format!("{} {inner}\n", "#".repeat(level));
    if ctx.in_list_item {
        heading
    } else {
        format!("\n\n{heading}\n")
    }
}

/// `<blockquote>`: each level contributes one `> ` to its non-empty
/// lines, so markers accumulate through nesting. Blank lines stay blank —
/// no trailing `>` on them.
pub(super) fn blockquote(el: &Element, ctx: &Context) -> String {
    let mut child_ctx = ctx.clone();
    child_ctx.blockquote_depth += 1;
    let inner = text::collapse_blank_lines(&serialize_children(&el.children, &child_ctx));
    format!("\n\n{}\n\n", prefix_quote(&inner))
}

fn prefix_quote(content: &str) -> String {
    content
        .split('\n')
        .map(|line| {
            let trimmed = line.trim_end_matches([' ', '\t']);
            if trimmed.is_empty() {
                String::new()
            } else {
                format!("> {trimmed}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
