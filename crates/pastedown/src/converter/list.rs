//! List formatting: ordered and unordered lists at arbitrary nesting
//! depth.
//!
//! Output is emitted relative to the list's own level: markers sit at
//! column 0 and continuation lines get two spaces, so a nested list picks
//! up two spaces per level from the re-indent step of each ancestor item.

use super::{Context, serialize_children};
use crate::dom::{Element, Node};
use crate::text;

pub(super) fn render(el: &Element, ctx: &Context, ordered: bool) -> String {
    let mut child_ctx = ctx.clone();
    child_ctx.list_depth += 1;
    let start = if ordered {
        el.attr("start")
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(1)
    } else {
        0
    };
    child_ctx.ordered_counters.push(start);

    let mut out = String::from("\n");
    for child in &el.children {
        let Node::Element(item) = child else { continue };
        if item.name != "li" {
            continue;
        }

        let marker = if ordered {
            // A 0 counter (explicit start="0" or the sentinel) numbers
            // from 1, like the unparseable-start fallback.
            let current = match child_ctx.ordered_counters.last().copied() {
                Some(0) | None => 1,
                Some(n) => n,
            };
            if let Some(counter) = child_ctx.ordered_counters.last_mut() {
                *counter = current + 1;
            }
            format!("{current}. ")
        } else {
            "- ".to_string()
        };

        let mut item_ctx = child_ctx.clone();
        item_ctx.in_list_item = true;
        let content = text::collapse_blank_lines(&serialize_children(&item.children, &item_ctx));
        let content = content.trim();
        if content.is_empty() {
            continue;
        }

        out.push_str(&marker);
        out.push_str(&reindent_continuations(content));
        out.push('\n');
    }
    out.push('\n');
    out
}

/// The first line is positioned by the marker; every later line is
/// indented two spaces to align under the marker text. Blank continuation
/// lines keep the indent only (the final collapse strips it again).
fn reindent_continuations(content: &str) -> String {
    content
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                line.to_string()
            } else if line.trim().is_empty() {
                "  ".to_string()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
