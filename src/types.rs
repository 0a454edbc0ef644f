// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a corpus search result.
//!
//! These types define the wire surface of the query engine: what a hit looks
//! like and which directions context can be expanded in. Field names follow
//! the JSON convention of the HTTP layer (`camelCase`), so a `SearchHit` can
//! be handed straight to a serializer.
//!
//! # Invariants
//!
//! - **SearchHit**: `context_start <= context_end <= corpus.len()`, and the
//!   snippet with its markers removed equals the corpus slice
//!   `[context_start, context_end)` byte-for-byte.
//! - **Offsets are byte offsets** into the corpus, always on UTF-8 character
//!   boundaries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Fixed half-window width: bytes of context kept on each side of a match.
pub const CONTEXT_WIDTH: usize = 50;

/// Opening delimiter wrapped around the matched substring in a snippet.
pub const MARK_OPEN: &str = "<mark>";

/// Closing delimiter wrapped around the matched substring in a snippet.
pub const MARK_CLOSE: &str = "</mark>";

/// A single occurrence of the query, with its highlighted context window.
///
/// `snippet` preserves the corpus' original casing; only the matching is
/// case-insensitive. `context_start` and `context_end` are the clamped
/// window bounds, usable as `offset` arguments to
/// [`Searcher::expand_context`](crate::Searcher::expand_context) for
/// paginating outward from the hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Context window with the match wrapped in `<mark>`/`</mark>`.
    pub snippet: String,
    /// Byte offset where the context window begins (clamped to 0).
    pub context_start: usize,
    /// Byte offset one past the end of the context window (clamped to corpus length).
    pub context_end: usize,
}

/// Which adjacent slice of the corpus to fetch when expanding context.
///
/// Parses from the wire values `"prev"` and `"nxt"` only; everything else
/// is a [`ValidationError::BadDirection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The window ending at the given offset.
    Prev,
    /// The window starting at the given offset.
    Nxt,
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Direction::Prev),
            "nxt" => Ok(Direction::Nxt),
            other => Err(ValidationError::BadDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Prev => write!(f, "prev"),
            Direction::Nxt => write!(f, "nxt"),
        }
    }
}
