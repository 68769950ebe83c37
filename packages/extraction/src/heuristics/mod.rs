//! Rule-based extraction stage.
//!
//! Deterministic and synchronous: no I/O, no shared state. Works in two
//! granularities:
//!
//! 1. **Lines** - every line with a bullet, number, checkbox or keyword
//!    prefix, with the markers stripped.
//! 2. **Sentences** - only if step 1 found nothing anywhere in the text,
//!    every sentence starting with an imperative verb, verbatim.
//!
//! The result is deduplicated case-insensitively in order of appearance.

pub mod dedupe;
pub mod lines;
pub mod sentences;

pub use dedupe::dedupe;
pub use lines::{is_action_line, normalize_action_line, split_lines};
pub use sentences::{looks_imperative, split_sentences, IMPERATIVE_STARTERS};

/// Extract action items from free-form text using structural cues only.
///
/// Total: any input, including the empty string, yields a (possibly empty)
/// list.
pub fn extract_heuristic(text: &str) -> Vec<String> {
    let mut extracted: Vec<String> = split_lines(text)
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_action_line(line))
        .filter_map(normalize_action_line)
        .collect();

    if extracted.is_empty() {
        extracted = split_sentences(text)
            .into_iter()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty() && looks_imperative(sentence))
            .map(str::to_string)
            .collect();
    }

    dedupe(extracted)
}
