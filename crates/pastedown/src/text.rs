//! Text-level helpers: entity decoding, newline normalization, and the
//! final whitespace collapse shared by the block formatters.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static TRAILING_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+\n").expect("valid regex"));
pub(crate) static BLANK_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static WS_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static NEWLINE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Normalize line endings to `\n` and replace non-breaking spaces with
/// plain spaces.
#[must_use]
pub fn normalize_newlines(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            '\u{a0}' => out.push(' '),
            _ => out.push(ch),
        }
    }
    out
}

/// Collapse every whitespace run (including newlines) to a single space.
#[must_use]
pub fn collapse_whitespace(value: &str) -> String {
    WS_RUN_RE.replace_all(value, " ").into_owned()
}

/// Collapse newline runs to a single space, for inline code content.
pub(crate) fn collapse_newlines(value: &str) -> String {
    NEWLINE_RUN_RE.replace_all(value, " ").into_owned()
}

/// Final whitespace normalization: strip trailing horizontal whitespace
/// before each newline, collapse runs of three or more newlines to a
/// single blank line, and trim the end of the document.
///
/// Idempotent: applying it to already-normalized text is a no-op.
#[must_use]
pub fn collapse_blank_lines(markdown: &str) -> String {
    let stripped = TRAILING_WS_RE.replace_all(markdown, "\n");
    let collapsed = BLANK_RUN_RE.replace_all(&stripped, "\n\n");
    collapsed.trim_end().to_string()
}

/// Length of the longest run of consecutive backticks in `value`.
pub(crate) fn longest_backtick_run(value: &str) -> usize {
    let mut max = 0;
    let mut current = 0;
    for ch in value.chars() {
        if ch == '`' {
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }
    max
}

/// Decode HTML character references in `input`.
///
/// Named references cover the set seen in real clipboard HTML; numeric
/// decimal and hex references decode to their code points. Anything
/// unrecognized is passed through literally.
#[must_use]
pub fn decode_entities(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '&' {
            result.push(ch);
            continue;
        }

        let mut entity = String::new();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                terminated = true;
                break;
            }
            if next == '&' || next.is_whitespace() || entity.len() > 10 {
                break;
            }
            entity.push(next);
            chars.next();
        }

        if terminated {
            if let Some(decoded) = decode_entity(&entity) {
                result.push_str(&decoded);
            } else {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        } else {
            result.push('&');
            result.push_str(&entity);
        }
    }

    result
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(rest) = entity.strip_prefix('#') {
        return decode_numeric_entity(rest);
    }

    let decoded = match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{a0}",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201c}",
        "rdquo" => "\u{201d}",
        "times" => "×",
        "divide" => "÷",
        "plusmn" => "±",
        _ => return None,
    };
    Some(decoded.to_string())
}

fn decode_numeric_entity(entity: &str) -> Option<String> {
    if entity.is_empty() {
        return None;
    }
    let code_point = if let Some(hex) = entity.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        entity.parse::<u32>().ok()?
    };
    char::from_u32(code_point).map(|ch| ch.to_string())
}
