//! The conversion engine: a recursive tree walker that serializes the
//! owned node tree to Markdown.
//!
//! Each handler returns the serialized string for its subtree; wrappers
//! trim and collapse their children's output before framing it. The
//! [`Context`] is copied-with-modification when descending into a
//! construct that changes nesting, never mutated in place across sibling
//! calls, so sibling branches can never alias each other's state.

mod block;
mod inline;
mod list;
mod table;

use crate::dom::{Element, Node};
use crate::text;

/// Elements whose subtrees never contribute to output: script text and
/// document chrome must not leak into the Markdown.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Per-call conversion state, threaded through the recursion by value.
///
/// Invariant: `ordered_counters.len() == list_depth` while lists are
/// being traversed; unordered levels hold a `0` sentinel.
#[derive(Debug, Clone, Default)]
pub(crate) struct Context {
    /// Current list nesting level.
    pub(crate) list_depth: usize,
    /// One counter per open ordered-list ancestor (`0` for unordered).
    pub(crate) ordered_counters: Vec<i64>,
    /// Blockquote nesting level.
    pub(crate) blockquote_depth: usize,
    /// Inside a preformatted block: text passes through uncollapsed.
    pub(crate) in_pre: bool,
    /// Inside a list item: block elements skip their blank-line padding.
    pub(crate) in_list_item: bool,
}

/// Serialize the root nodes and apply the final whitespace collapse.
pub(crate) fn convert_nodes(nodes: &[Node]) -> String {
    let ctx = Context::default();
    let raw = serialize_children(nodes, &ctx);
    let collapsed = text::collapse_blank_lines(&raw);
    // Block wrappers pad with blank lines; drop the padding left at the
    // very start of the document.
    collapsed.trim_start_matches('\n').to_string()
}

pub(crate) fn serialize_children(nodes: &[Node], ctx: &Context) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&serialize_node(node, ctx));
    }
    out
}

pub(crate) fn serialize_node(node: &Node, ctx: &Context) -> String {
    match node {
        Node::Text(value) => {
            let normalized = text::normalize_newlines(value);
            if ctx.in_pre {
                normalized
            } else {
                text::collapse_whitespace(&normalized)
            }
        }
        Node::Element(el) => serialize_element(el, ctx),
    }
}

fn serialize_element(el: &Element, ctx: &Context) -> String {
    if SKIP_TAGS.contains(&el.name.as_str()) {
        return String::new();
    }

    match el.name.as_str() {
        "br" => "\n".to_string(),
        "hr" => "\n\n---\n\n".to_string(),
        "strong" | "b" => inline::wrap(el, ctx, "**"),
        "em" | "i" => inline::wrap(el, ctx, "*"),
        "del" | "s" | "strike" => inline::wrap(el, ctx, "~~"),
        "mark" => inline::highlight(el, ctx),
        "code" => inline::inline_code(el),
        "pre" => inline::code_block(el),
        "a" => inline::link(el, ctx),
        "img" => inline::image(el),
        "blockquote" => block::blockquote(el, ctx),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => block::heading(el, ctx),
        "p" | "div" => block::paragraph(el, ctx),
        "ul" => list::render(el, ctx, false),
        "ol" => list::render(el, ctx, true),
        "table" => table::render(el, ctx),
        // Unrecognized tags (and inline containers like span, or an li
        // outside any list) serialize their children transparently.
        _ => serialize_children(&el.children, ctx),
    }
}
