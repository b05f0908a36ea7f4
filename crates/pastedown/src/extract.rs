//! Readable-content extraction for page imports.
//!
//! A lossy cousin of the converter: instead of faithful Markdown it
//! recovers the main article text of a fetched page as plain text with
//! light structure (headings, bullets, links), dropping navigation and
//! boilerplate when a content region can be identified.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dom::{self, Element, Node};
use crate::text;

/// Subtrees that never carry readable content.
const JUNK_TAGS: &[&str] = &["script", "style", "noscript", "svg", "iframe", "head"];

/// Elements that end with a paragraph break in the text rendering.
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "main", "header", "footer", "blockquote",
];

/// A candidate region must carry more text than this to beat the whole
/// document.
const MIN_CANDIDATE_CHARS: usize = 200;

static CONTENT_HINT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)content|article|post|entry|markdown|main").expect("valid regex"));

/// Title of the document: the first `<title>` element's text, whitespace
/// collapsed. `None` when absent or empty.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    let nodes = dom::parse_fragment(html).ok()?;
    let title = dom::find_element(&nodes, "title")?;
    let collapsed = text::collapse_whitespace(&title.plain_text());
    let trimmed = collapsed.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Extract the readable text of a page.
///
/// Candidates for the main content region are `<article>` and `<main>`
/// elements plus `<div>`s whose id/class hint at content; the candidate
/// with the most text wins when it clears [`MIN_CANDIDATE_CHARS`],
/// otherwise the whole document is used. Never fails: unparseable input
/// degrades to an empty string.
#[must_use]
pub fn readable_text(html: &str) -> String {
    let Ok(nodes) = dom::parse_fragment(html) else {
        return String::new();
    };
    let raw = pick_main_content(&nodes)
        .map_or_else(|| nodes_to_text(&nodes), |el| nodes_to_text(&el.children));
    normalize_text(&raw)
}

fn pick_main_content(nodes: &[Node]) -> Option<&Element> {
    let mut candidates = Vec::new();
    collect_by_name(nodes, "article", &mut candidates);
    collect_by_name(nodes, "main", &mut candidates);
    collect_hinted_divs(nodes, &mut candidates);

    let mut best: Option<(&Element, usize)> = None;
    for candidate in candidates {
        let score = normalize_text(&nodes_to_text(&candidate.children))
            .chars()
            .count();
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((candidate, score));
        }
    }
    best.and_then(|(el, score)| (score > MIN_CANDIDATE_CHARS).then_some(el))
}

fn collect_by_name<'a>(nodes: &'a [Node], name: &str, out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name == name {
                out.push(el);
            }
            collect_by_name(&el.children, name, out);
        }
    }
}

fn collect_hinted_divs<'a>(nodes: &'a [Node], out: &mut Vec<&'a Element>) {
    for node in nodes {
        if let Node::Element(el) = node {
            if el.name == "div" {
                let hinted = el
                    .attr("id")
                    .into_iter()
                    .chain(el.attr("class"))
                    .any(|value| CONTENT_HINT_RE.is_match(value));
                if hinted {
                    out.push(el);
                }
            }
            collect_hinted_divs(&el.children, out);
        }
    }
}

fn nodes_to_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        append_text(node, &mut out);
    }
    out
}

fn append_text(node: &Node, out: &mut String) {
    let el = match node {
        Node::Text(value) => {
            out.push_str(&text::normalize_newlines(value));
            return;
        }
        Node::Element(el) => el,
    };

    if JUNK_TAGS.contains(&el.name.as_str()) {
        return;
    }

    match el.name.as_str() {
        "br" => out.push('\n'),
        "li" => {
            out.push_str("\n- ");
            for child in &el.children {
                append_text(child, out);
            }
            out.push('\n');
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level: usize = el.name[1..].parse().unwrap_or(1);
            out.push_str("\n\n");
            out.push_str(&"#".repeat(level));
            out.push(' ');
            for child in &el.children {
                append_text(child, out);
            }
            out.push_str("\n\n");
        }
        "a" => match el.attr("href").map(str::trim).filter(|href| !href.is_empty()) {
            Some(href) => {
                let label = text::collapse_whitespace(&el.plain_text());
                let label = label.trim();
                if label.is_empty() {
                    out.push_str(href);
                } else {
                    out.push_str(&format!("[{label}]({href})"));
                }
            }
            None => {
                out.push(' ');
                for child in &el.children {
                    append_text(child, out);
                }
                out.push(' ');
            }
        },
        name if BLOCK_TAGS.contains(&name) => {
            out.push(' ');
            for child in &el.children {
                append_text(child, out);
            }
            out.push_str("\n\n");
        }
        _ => {
            out.push(' ');
            for child in &el.children {
                append_text(child, out);
            }
            out.push(' ');
        }
    }
}

static HORIZ_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("valid regex"));

fn normalize_text(raw: &str) -> String {
    let stripped = text::TRAILING_WS_RE.replace_all(raw, "\n");
    let collapsed = text::BLANK_RUN_RE.replace_all(&stripped, "\n\n");
    let spaced = HORIZ_RUN_RE.replace_all(&collapsed, " ");
    spaced.trim().to_string()
}
