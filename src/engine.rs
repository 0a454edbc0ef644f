// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine: substring search with highlighted context windows,
//! and context expansion around an offset.
//!
//! A [`Searcher`] is built exactly once at startup, before any query runs.
//! After construction it is immutable - no locks, no interior mutability -
//! so any number of threads may call [`Searcher::search`] and
//! [`Searcher::expand_context`] concurrently through a shared reference
//! (typically `Arc<Searcher>`).
//!
//! # Context windows
//!
//! Every hit carries a window of [`CONTEXT_WIDTH`] bytes on each side of
//! the match. Windows are clamped to `[0, corpus.len())`: a match within
//! `CONTEXT_WIDTH` bytes of either end of the corpus yields a shorter
//! window rather than an error. Window edges that would fall inside a
//! multi-byte UTF-8 sequence are snapped inward to the nearest character
//! boundary, so every snippet is a valid string.

use crate::corpus::{fold, Corpus};
use crate::error::{LoadError, ValidationError};
use crate::index::SearchIndex;
use crate::types::{Direction, SearchHit, CONTEXT_WIDTH, MARK_CLOSE, MARK_OPEN};

use std::path::Path;

/// The corpus plus its search index; the process-wide immutable snapshot
/// every query runs against.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    index: SearchIndex,
}

impl Searcher {
    /// Load the corpus from a file and index it.
    ///
    /// Construction failures are fatal: the caller must not serve queries
    /// without a searcher.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::from_corpus(Corpus::load(path)?))
    }

    /// Index an already loaded corpus.
    pub fn from_corpus(corpus: Corpus) -> Self {
        let index = SearchIndex::build(&corpus);
        Searcher { corpus, index }
    }

    /// The corpus this searcher answers queries over.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Find every occurrence of `query`, case-insensitively.
    ///
    /// Returns one [`SearchHit`] per occurrence, ordered by ascending
    /// corpus offset - all of them, without limit. A query that does not
    /// occur yields an empty vec, not an error. Snippets preserve the
    /// corpus' original casing.
    ///
    /// An empty or all-whitespace query is rejected with
    /// [`ValidationError::EmptyQuery`]; the context-window arithmetic is
    /// undefined for it.
    pub fn search(&self, query: &str) -> Result<Vec<SearchHit>, ValidationError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let folded_query = fold(query.as_bytes());
        let hits = self
            .index
            .lookup(&folded_query)
            .into_iter()
            .map(|idx| self.hit_at(idx, folded_query.len()))
            .collect();
        Ok(hits)
    }

    /// Build the highlighted context window around a match at `idx`.
    fn hit_at(&self, idx: usize, query_len: usize) -> SearchHit {
        let text = self.corpus.text();
        let match_end = idx + query_len;

        // Clamp to corpus bounds; a query longer than CONTEXT_WIDTH still
        // keeps the whole match inside the window.
        let raw_start = idx.saturating_sub(CONTEXT_WIDTH);
        let raw_end = (idx + CONTEXT_WIDTH).clamp(match_end, text.len());

        // Match boundaries are always character boundaries (a continuation
        // byte never equals a pattern's leading byte), but the window edges
        // can split a character; snap them inward.
        let context_start = ceil_char_boundary(text, raw_start);
        let context_end = floor_char_boundary(text, raw_end);

        let mut snippet = String::with_capacity(
            context_end - context_start + MARK_OPEN.len() + MARK_CLOSE.len(),
        );
        snippet.push_str(&text[context_start..idx]);
        snippet.push_str(MARK_OPEN);
        snippet.push_str(&text[idx..match_end]);
        snippet.push_str(MARK_CLOSE);
        snippet.push_str(&text[match_end..context_end]);

        SearchHit {
            snippet,
            context_start,
            context_end,
        }
    }

    /// The [`CONTEXT_WIDTH`]-byte slice of corpus adjacent to `offset`.
    ///
    /// [`Direction::Prev`] returns the window ending at `offset`,
    /// [`Direction::Nxt`] the window starting at it. Both clamp at the
    /// corpus edges and snap to character boundaries; an offset at or past
    /// the end simply yields a short or empty slice, never an error.
    pub fn expand_context(&self, offset: usize, direction: Direction) -> &str {
        let text = self.corpus.text();
        let anchor = offset.min(text.len());

        let (raw_start, raw_end) = match direction {
            Direction::Prev => (anchor.saturating_sub(CONTEXT_WIDTH), anchor),
            Direction::Nxt => (anchor, (anchor + CONTEXT_WIDTH).min(text.len())),
        };

        let start = ceil_char_boundary(text, raw_start);
        let end = floor_char_boundary(text, raw_end);
        if start >= end {
            ""
        } else {
            &text[start..end]
        }
    }
}

/// Snap `index` down to the nearest UTF-8 character boundary.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Snap `index` up to the nearest UTF-8 character boundary.
fn ceil_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index.min(text.len());
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}
