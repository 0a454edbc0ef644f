//! Suffix array-based substring search over a single static corpus.
//!
//! The corpus is indexed once at startup; after that the engine answers
//! unboundedly many read-only queries, each returning every occurrence of a
//! substring with a highlighted, fixed-width context window, plus a
//! pagination primitive for expanding context around an offset.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│   sais.rs    │────▶│   index.rs   │
//! │ (load, fold)│     │ (suffix array│     │ (SearchIndex,│
//! │             │     │ construction)│     │    lookup)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       engine.rs                         │
//! │     (Searcher: search + expand_context, windowing)      │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                    server.rs (axum glue)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use concord::{Corpus, Direction, Searcher};
//!
//! let searcher = Searcher::load("completeworks.txt")?;
//!
//! for hit in searcher.search("to be or not")? {
//!     println!("{}", hit.snippet);
//! }
//!
//! let more = searcher.expand_context(1024, Direction::Nxt);
//! ```
//!
//! Matching is case-insensitive (ASCII folding, applied identically at
//! build and query time); snippets preserve the corpus' original casing.
//! The built [`Searcher`] is immutable and can be shared across threads
//! without synchronization.

// Module declarations
mod corpus;
mod engine;
mod error;
mod index;
mod sais;
pub mod server;
mod types;

// Re-exports for public API
pub use corpus::{fold, Corpus};
pub use engine::Searcher;
pub use error::{LoadError, ValidationError};
pub use index::SearchIndex;
pub use sais::sais;
pub use types::{Direction, SearchHit, CONTEXT_WIDTH, MARK_CLOSE, MARK_OPEN};
