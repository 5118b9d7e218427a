//! Single-line plain-text answer sanitizer.
//!
//! Strips markdown, flattens every newline form (real control characters and
//! their literal backslash escapes) into spaces, removes control characters,
//! collapses whitespace and bounds the length. `sanitize` is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`+([^`]+)`+").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s{0,3}#{1,6}\s*").unwrap());
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s{0,3}>\s*").unwrap());
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_]{1,3}([^*_]+)[*_]{1,3}").unwrap());

/// Normalize `raw` into a single line of at most `max_len` characters.
///
/// Stripping repeats until the text stops changing. A pass never lengthens
/// the text, and a pass that keeps the length turns some non-space
/// character into a space, so the loop terminates.
pub fn sanitize(raw: &str, max_len: usize) -> String {
    let mut current = strip_pass(raw);
    loop {
        let next = strip_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    truncate_chars(&current, max_len)
}

fn strip_pass(text: &str) -> String {
    let text = FENCED_CODE.replace_all(text, " ");
    let text = INLINE_CODE.replace_all(&text, "${1}");
    let text = IMAGE.replace_all(&text, "${1}");
    let text = LINK.replace_all(&text, "${1}");
    let text = HEADING.replace_all(&text, "");
    let text = BLOCKQUOTE.replace_all(&text, "");
    let text = LIST_MARKER.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "${1}");

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek().copied(), Some('n' | 'r' | 't' | 'f' | 'v')) => {
                chars.next();
                out.push(' ');
            }
            '#' | '*' | '`' => out.push(' '),
            c if is_control(c) => out.push(' '),
            c => out.push(c),
        }
    }

    collapse_whitespace(&out)
}

/// ASCII control range (including DEL) and the C1 range.
fn is_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{1f}' | '\u{7f}'..='\u{9f}')
}

/// Collapse whitespace runs, including literal `\n` / `\r` escapes, to one space.
pub(crate) fn collapse_line(text: &str) -> String {
    collapse_whitespace(&text.replace("\\n", " ").replace("\\r", " "))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first character.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cut `text` to at most `max_len` characters, ending in [`ELLIPSIS`] when
/// something was removed and there is room for it.
pub(crate) fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let marker_len = ELLIPSIS.chars().count();
    if max_len <= marker_len {
        let head: String = text.chars().take(max_len).collect();
        return head.trim_end().to_string();
    }
    let head: String = text.chars().take(max_len - marker_len).collect();
    format!("{}{}", head.trim_end(), ELLIPSIS)
}
