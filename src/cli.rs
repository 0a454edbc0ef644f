// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the concord command-line interface.
//!
//! Three subcommands: `serve` to run the HTTP search service, `search` to
//! query a corpus from the terminal, and `expand` to page through context
//! around an offset. The service picks its port from `--addr`, falling back
//! to the `PORT` environment variable, then to 3001.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "concord",
    about = "Suffix array full-text search over a static corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP search service
    Serve {
        /// Path to the corpus text file
        #[arg(short, long, default_value = "completeworks.txt")]
        corpus: String,

        /// Bind address, e.g. 0.0.0.0:3001 (default: PORT env var, then 3001)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Search the corpus and print highlighted snippets
    Search {
        /// Search query (matched case-insensitively)
        query: String,

        /// Path to the corpus text file
        #[arg(short, long, default_value = "completeworks.txt")]
        corpus: String,

        /// Maximum number of hits to print (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Emit <mark> tags instead of ANSI highlighting
        #[arg(long)]
        plain: bool,
    },

    /// Print the corpus slice adjacent to an offset
    Expand {
        /// Byte offset into the corpus
        offset: usize,

        /// Path to the corpus text file
        #[arg(short, long, default_value = "completeworks.txt")]
        corpus: String,

        /// Which side of the offset to fetch: prev or nxt
        #[arg(short, long, default_value = "nxt")]
        direction: String,
    },
}
