// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading and case folding.
//!
//! The corpus is loaded exactly once, validated, and never mutated again.
//! Everything downstream (the index, the query engine, the HTTP layer)
//! borrows from the one [`Corpus`] value built at startup.
//!
//! # Case folding
//!
//! [`fold`] maps ASCII letters to lowercase byte-for-byte and leaves every
//! other byte untouched. The mapping is total, deterministic, and - the part
//! that matters - **length-preserving**: an offset into the folded text is
//! the same offset into the original text. Full Unicode lowercasing does not
//! have this property (`İ` lowercases to two code points), which is why the
//! index would silently corrupt offsets if it were used here.

use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// Case-fold a byte sequence: ASCII letters to lowercase, all else unchanged.
///
/// Total and deterministic, applied identically at index-build time and
/// query time. Output length always equals input length.
pub fn fold(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(u8::to_ascii_lowercase).collect()
}

/// The full source text being searched.
///
/// Immutable after construction and guaranteed non-empty valid UTF-8.
/// Owned by the [`Searcher`](crate::Searcher) for the life of the process.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
}

impl Corpus {
    /// Load the corpus from a file.
    ///
    /// Fails with [`LoadError::Io`] if the file cannot be read,
    /// [`LoadError::InvalidUtf8`] if it is not UTF-8 text, and
    /// [`LoadError::EmptyCorpus`] if there is nothing to index. All three
    /// are fatal at startup; the service must not come up without a corpus.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let bytes = fs::read(path)?;
        let text =
            String::from_utf8(bytes).map_err(|err| LoadError::InvalidUtf8(err.utf8_error()))?;
        Self::from_text(text)
    }

    /// Build a corpus from in-memory text. Same validation as [`Corpus::load`].
    pub fn from_text(text: impl Into<String>) -> Result<Self, LoadError> {
        let text = text.into();
        if text.is_empty() {
            return Err(LoadError::EmptyCorpus);
        }
        Ok(Corpus { text })
    }

    /// The original text, casing preserved.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; an empty corpus is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// A case-folded copy of the corpus bytes, same length as the original.
    pub fn folded(&self) -> Vec<u8> {
        fold(self.text.as_bytes())
    }
}
