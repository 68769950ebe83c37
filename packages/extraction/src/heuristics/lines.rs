//! Line-level action item detection.
//!
//! A line is an action line when it carries a structural marker: a bullet
//! (`-`, `*`, `•`), a numbered prefix (`1.`), a keyword prefix (`todo:`,
//! `action:`, `next:`) or a checkbox (`[ ]`, `[todo]`).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading bullet glyph or `N.` followed by at least one whitespace.
    static ref BULLET_PREFIX: Regex = Regex::new(r"^\s*([-*•]|\d+\.)\s+").unwrap();
}

/// Keyword prefixes, compared against the lowercased line.
pub const KEYWORD_PREFIXES: [&str; 3] = ["todo:", "action:", "next:"];

/// Checkbox markers, matched anywhere in the lowercased line.
pub const CHECKBOX_MARKERS: [&str; 2] = ["[ ]", "[todo]"];

/// Whether a single line expresses an action item.
///
/// Comparison happens on the trimmed, lowercased line; blank lines are never
/// action lines.
pub fn is_action_line(line: &str) -> bool {
    let stripped = line.trim().to_lowercase();
    if stripped.is_empty() {
        return false;
    }
    if BULLET_PREFIX.is_match(&stripped) {
        return true;
    }
    if KEYWORD_PREFIXES
        .iter()
        .any(|prefix| stripped.starts_with(prefix))
    {
        return true;
    }
    CHECKBOX_MARKERS
        .iter()
        .any(|marker| stripped.contains(marker))
}

/// Strip structural markers from an action line.
///
/// Removes the leading bullet/number, then a leading `[ ]`, then a leading
/// `[todo]`, trimming between each step. Returns `None` when nothing is left.
///
/// Keyword prefixes are kept: `todo: buy milk` stays as written.
pub fn normalize_action_line(line: &str) -> Option<String> {
    let cleaned = BULLET_PREFIX.replace(line.trim(), "");
    let cleaned = cleaned.trim();
    let cleaned = cleaned.strip_prefix("[ ]").unwrap_or(cleaned).trim();
    let cleaned = cleaned.strip_prefix("[todo]").unwrap_or(cleaned).trim();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Split text into lines, accepting `\n`, `\r\n` and `\r` (plus the other
/// Unicode line separators) in any mix.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
                | '\u{2028}' | '\u{2029}'
        )
    })
}
