//! Sentence-level fallback: imperative sentences.
//!
//! Only consulted when no line in the whole input carried a structural marker.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Sentence-ending punctuation followed by a whitespace run.
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?]\s+").unwrap();

    /// ASCII letters and apostrophes.
    static ref WORD: Regex = Regex::new(r"[A-Za-z']+").unwrap();
}

/// Verbs that mark a sentence as an instruction.
pub const IMPERATIVE_STARTERS: [&str; 12] = [
    "add",
    "create",
    "implement",
    "fix",
    "update",
    "write",
    "check",
    "verify",
    "refactor",
    "document",
    "design",
    "investigate",
];

/// Split text into sentences.
///
/// The text is trimmed, then cut after every `.`, `!` or `?` that is followed
/// by whitespace; the whitespace itself is dropped. Punctuation stays with its
/// sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // The punctuation is a single ASCII byte.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// Whether the first word of the sentence is an imperative starter.
pub fn looks_imperative(sentence: &str) -> bool {
    WORD.find(sentence)
        .map(|word| {
            let first = word.as_str().to_lowercase();
            IMPERATIVE_STARTERS.contains(&first.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_terminal_punctuation() {
        let sentences = split_sentences("We met today. Fix the bug!  Is it done?\nYes");
        assert_eq!(
            sentences,
            vec!["We met today.", "Fix the bug!", "Is it done?", "Yes"]
        );
    }

    #[test]
    fn test_split_keeps_inline_punctuation() {
        assert_eq!(
            split_sentences("Update v1.2 docs. Done."),
            vec!["Update v1.2 docs.", "Done."]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn test_imperative_starters() {
        assert!(looks_imperative("Fix the bug in login."));
        assert!(looks_imperative("INVESTIGATE the outage"));
        assert!(looks_imperative("  \"Write\" the summary"));
        assert!(!looks_imperative("We should fix the bug."));
        assert!(!looks_imperative("Fixing the bug now."));
    }

    #[test]
    fn test_no_alphabetic_token() {
        assert!(!looks_imperative("1234 ... !!!"));
        assert!(!looks_imperative(""));
    }
}
