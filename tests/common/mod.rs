//! Shared helpers for integration tests.

#![allow(dead_code)] // each test harness uses a different subset

use concord::{fold, Corpus, SearchHit, Searcher, MARK_CLOSE, MARK_OPEN};

/// A small corpus with repeated phrases, mixed casing, and matches near
/// both edges.
pub const SOLILOQUY: &str = "To be, or not to be, that is the question: \
Whether 'tis nobler in the mind to suffer \
The slings and arrows of outrageous fortune, \
Or to take arms against a sea of troubles \
And by opposing end them.";

pub fn build_searcher(text: &str) -> Searcher {
    Searcher::from_corpus(Corpus::from_text(text).unwrap())
}

pub fn soliloquy_searcher() -> Searcher {
    build_searcher(SOLILOQUY)
}

/// Remove the highlight delimiters from a snippet.
pub fn strip_marks(snippet: &str) -> String {
    snippet.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

/// The corpus offset of the match inside a hit.
///
/// Only valid for corpora that do not themselves contain the marker text.
pub fn match_offset(hit: &SearchHit) -> usize {
    hit.context_start + hit.snippet.find(MARK_OPEN).unwrap()
}

/// Oracle: every offset where the folded query occurs in the folded text,
/// found by linear scan.
pub fn naive_offsets(text: &str, query: &str) -> Vec<usize> {
    let folded_text = fold(text.as_bytes());
    let folded_query = fold(query.as_bytes());
    if folded_query.is_empty() || folded_query.len() > folded_text.len() {
        return Vec::new();
    }
    (0..=folded_text.len() - folded_query.len())
        .filter(|&i| folded_text[i..].starts_with(&folded_query[..]))
        .collect()
}

/// Swap the case of every ASCII letter.
pub fn swapcase(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
