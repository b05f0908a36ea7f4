//! Convert pasted or captured HTML to Markdown.
//!
//! The converter walks a leniently parsed HTML tree and emits a Markdown
//! document that reproduces the same conceptual structure — headings,
//! emphasis, links, lists, tables, code, quotes — rather than the same
//! bytes. It is a pure function over arbitrary, possibly malformed
//! markup: the worst case on bizarre input is degraded output, never a
//! panic.
//!
//! ```
//! let markdown = pastedown::convert("<h1>Hi</h1><p><em>there</em></p>").unwrap();
//! assert_eq!(markdown, "# Hi\n\n*there*");
//! ```
//!
//! The companion [`extract`] module recovers the readable main content of
//! a whole page as plain text, for URL imports; [`url`] carries the
//! scheme sanitization used for rendered links and the safety validation
//! that gates fetching.

pub mod dom;
mod error;
pub mod extract;
pub mod url;

mod converter;
mod text;

pub use error::{ConversionError, Result, UrlError};
pub use text::{collapse_blank_lines, collapse_whitespace, decode_entities, normalize_newlines};

/// Convert an HTML fragment to Markdown.
///
/// Empty or whitespace-only input yields an empty string. The output
/// carries no trailing newline; blank-line runs are collapsed to one.
/// Conversions are independent per call — no state survives — so this is
/// safe to invoke concurrently from any number of threads.
///
/// # Errors
///
/// Returns [`ConversionError::Parse`] only if the parser refuses the
/// input outright, which lenient parsing makes effectively unreachable;
/// malformed markup otherwise degrades to best-effort output.
pub fn convert(html: &str) -> Result<String> {
    let input = html.trim();
    if input.is_empty() {
        return Ok(String::new());
    }
    let nodes = dom::parse_fragment(input)?;
    Ok(converter::convert_nodes(&nodes))
}
