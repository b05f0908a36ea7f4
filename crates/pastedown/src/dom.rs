//! Owned document tree consumed by the converter.
//!
//! The `tl` parser is lenient: it accepts arbitrary, possibly malformed
//! markup and never panics on junk. Its arena-backed nodes borrow the input
//! string, so a thin builder materializes the parse into an owned tree —
//! tag names lowercased, character references decoded, comments dropped —
//! and everything downstream walks plain Rust data.

use crate::error::{ConversionError, Result};
use crate::text;

/// A node in the parsed tree: either text or an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A text node (entity-decoded).
    Text(String),
    /// An element with its attributes and children.
    Element(Element),
}

/// An element node. Children are owned exclusively; the tree is acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lowercased tag name.
    pub name: String,
    /// Attributes in document order, names lowercased, values decoded.
    pub attrs: Vec<(String, String)>,
    /// Child nodes in document order.
    pub children: Vec<Node>,
}

impl Node {
    /// Flatten this subtree to plain text: element markup is dropped,
    /// `<br>` becomes a newline, line endings and NBSP are normalized.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Self::Text(value) => out.push_str(&text::normalize_newlines(value)),
            Self::Element(el) => el.push_plain_text(out),
        }
    }
}

impl Element {
    /// Value of the first attribute named `name`, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First descendant element with the given tag name, document order.
    #[must_use]
    pub fn find_descendant(&self, name: &str) -> Option<&Element> {
        find_element(&self.children, name)
    }

    /// Flatten this element's subtree to plain text (see [`Node::plain_text`]).
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        if self.name == "br" {
            out.push('\n');
            return;
        }
        for child in &self.children {
            child.push_plain_text(out);
        }
    }
}

/// First element with the given tag name among `nodes` and their
/// descendants, document order.
#[must_use]
pub fn find_element<'a>(nodes: &'a [Node], name: &str) -> Option<&'a Element> {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name == name {
                return Some(el);
            }
            if let Some(found) = find_element(&el.children, name) {
                return Some(found);
            }
        }
    }
    None
}

/// Parse an HTML fragment into an owned node tree.
///
/// Fragment parsing: no `<html>`/`<body>` wrapper is required or
/// synthesized; whatever top-level nodes the input has become the roots.
///
/// # Errors
///
/// Returns [`ConversionError::Parse`] only when the parser refuses the
/// input outright; malformed markup otherwise yields a best-effort tree.
pub fn parse_fragment(html: &str) -> Result<Vec<Node>> {
    let dom = tl::parse(html, tl::ParserOptions::default())
        .map_err(|err| ConversionError::Parse(err.to_string()))?;
    let parser = dom.parser();

    let mut roots = Vec::new();
    for handle in dom.children() {
        if let Some(node) = build_node(*handle, parser) {
            roots.push(node);
        }
    }
    Ok(roots)
}

fn build_node(handle: tl::NodeHandle, parser: &tl::Parser) -> Option<Node> {
    match handle.get(parser)? {
        tl::Node::Raw(bytes) => {
            let decoded = text::decode_entities(bytes.as_utf8_str().as_ref());
            Some(Node::Text(decoded))
        }
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_ascii_lowercase();
            let attrs = tag
                .attributes()
                .iter()
                .map(|(key, value)| {
                    let decoded = value
                        .map(|v| text::decode_entities(v.as_ref()))
                        .unwrap_or_default();
                    (key.to_ascii_lowercase(), decoded)
                })
                .collect();

            let children_handles = tag.children();
            let children = children_handles
                .top()
                .iter()
                .filter_map(|child| build_node(*child, parser))
                .collect();

            Some(Node::Element(Element { name, attrs, children }))
        }
        tl::Node::Comment(_) => None,
    }
}
