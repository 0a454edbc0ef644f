// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for corpus loading and query validation.
//!
//! Two families, with very different lifetimes:
//!
//! - [`LoadError`] happens once, at startup, and is fatal. The process must
//!   not begin serving queries over a corpus it could not load.
//! - [`ValidationError`] happens per request and is the caller's fault. The
//!   transport layer maps it to a client error; nothing is retried because
//!   the engine is deterministic - the same bad input fails the same way.
//!
//! Offsets near the corpus edges are *not* errors: windows are silently
//! clamped to valid bounds (see [`Searcher`](crate::Searcher)).

use std::fmt;

/// The corpus could not be loaded at startup.
#[derive(Debug)]
pub enum LoadError {
    /// The corpus file could not be read.
    Io(std::io::Error),
    /// The corpus file is not valid UTF-8.
    InvalidUtf8(std::str::Utf8Error),
    /// The corpus is empty; there is nothing to index.
    EmptyCorpus,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read corpus: {}", err),
            LoadError::InvalidUtf8(err) => write!(f, "corpus is not valid UTF-8: {}", err),
            LoadError::EmptyCorpus => write!(f, "corpus is empty"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::InvalidUtf8(err) => Some(err),
            LoadError::EmptyCorpus => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// A caller-supplied query parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The search query is empty or all whitespace.
    EmptyQuery,
    /// The expansion direction is not one of `prev` / `nxt`.
    BadDirection(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyQuery => write!(f, "search query must not be empty"),
            ValidationError::BadDirection(given) => {
                write!(f, "direction must be 'prev' or 'nxt', got '{}'", given)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
