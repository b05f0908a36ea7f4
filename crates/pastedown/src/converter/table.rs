//! Table formatting: an HTML table becomes a fixed Markdown grid.
//!
//! Rows are all `<tr>` descendants regardless of `thead`/`tbody`
//! wrapping. The header is the first row containing a `<th>`, else the
//! first row; ragged rows are padded with empty cells, never truncated.

use super::Context;
use crate::dom::{Element, Node};
use crate::text;

pub(super) fn render(el: &Element, ctx: &Context) -> String {
    let mut rows = Vec::new();
    collect_rows(el, &mut rows);
    if rows.is_empty() {
        return String::new();
    }

    let row_cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.children
                .iter()
                .filter_map(|child| match child {
                    Node::Element(cell) if cell.name == "th" || cell.name == "td" => {
                        Some(escape_cell(&cell.plain_text()))
                    }
                    _ => None,
                })
                .collect()
        })
        .collect();

    let header_at = rows
        .iter()
        .position(|row| {
            row.children
                .iter()
                .any(|child| matches!(child, Node::Element(cell) if cell.name == "th"))
        })
        .unwrap_or(0);
    let header = &row_cells[header_at];

    let column_count = row_cells
        .iter()
        .map(Vec::len)
        .chain([1])
        .max()
        .unwrap_or(1);

    let mut lines = Vec::with_capacity(row_cells.len() + 1);
    lines.push(format_row(header, column_count));
    lines.push(format_row(&vec!["---".to_string(); column_count], column_count));
    for (idx, cells) in row_cells.iter().enumerate() {
        if idx != header_at {
            lines.push(format_row(cells, column_count));
        }
    }
    let table = format!("{}\n", lines.join("\n"));

    if ctx.blockquote_depth > 0 {
        // Inside a blockquote the enclosing levels supply the `> `
        // prefixes; only the blank-line padding differs.
        format!("{table}\n")
    } else {
        format!("\n\n{table}\n")
    }
}

fn collect_rows<'a>(el: &'a Element, rows: &mut Vec<&'a Element>) {
    for child in &el.children {
        if let Node::Element(child_el) = child {
            if child_el.name == "tr" {
                rows.push(child_el);
            }
            collect_rows(child_el, rows);
        }
    }
}

/// Flatten cell content to a single line and escape literal pipes.
fn escape_cell(content: &str) -> String {
    let collapsed = text::collapse_whitespace(content);
    collapsed.trim().replace('|', "\\|")
}

fn format_row(cells: &[String], column_count: usize) -> String {
    let padded: Vec<&str> = (0..column_count)
        .map(|idx| cells.get(idx).map_or("", String::as_str))
        .collect();
    format!("| {} |", padded.join(" | "))
}
