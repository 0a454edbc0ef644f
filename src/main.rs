use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use concord::server;
use concord::{Direction, Searcher, MARK_CLOSE, MARK_OPEN};

mod cli;
use cli::{Cli, Commands};

/// Default port when neither --addr nor PORT is given.
const DEFAULT_PORT: &str = "3001";

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { corpus, addr } => run_serve(&corpus, addr),
        Commands::Search {
            query,
            corpus,
            limit,
            plain,
        } => run_search(&corpus, &query, limit, plain),
        Commands::Expand {
            offset,
            corpus,
            direction,
        } => run_expand(&corpus, offset, &direction),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_serve(corpus_path: &str, addr: Option<String>) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let searcher = load_searcher(corpus_path)?;
    tracing::info!(
        "indexed {} bytes from {}",
        searcher.corpus().len(),
        corpus_path
    );

    let addr = resolve_addr(addr)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {}", e))?;

    runtime
        .block_on(server::run(Arc::new(searcher), addr))
        .map_err(|e| format!("server error: {}", e))
}

fn run_search(corpus_path: &str, query: &str, limit: usize, plain: bool) -> Result<(), String> {
    let searcher = load_searcher(corpus_path)?;
    let hits = searcher
        .search(query)
        .map_err(|e| format!("invalid query: {}", e))?;

    let shown = if limit == 0 { hits.len() } else { limit.min(hits.len()) };
    let highlight = !plain && atty::is(atty::Stream::Stdout);

    for hit in &hits[..shown] {
        let snippet = hit.snippet.replace(['\n', '\r'], " ");
        let snippet = if highlight {
            snippet
                .replace(MARK_OPEN, "\x1b[1;33m")
                .replace(MARK_CLOSE, "\x1b[0m")
        } else {
            snippet
        };
        println!("{:>8}  {}", hit.context_start, snippet);
    }

    if shown < hits.len() {
        println!("... and {} more", hits.len() - shown);
    }
    println!("{} matches", hits.len());
    Ok(())
}

fn run_expand(corpus_path: &str, offset: usize, direction: &str) -> Result<(), String> {
    let direction: Direction = direction.parse().map_err(|e| format!("{}", e))?;
    let searcher = load_searcher(corpus_path)?;
    println!("{}", searcher.expand_context(offset, direction));
    Ok(())
}

fn load_searcher(corpus_path: &str) -> Result<Searcher, String> {
    Searcher::load(corpus_path).map_err(|e| format!("failed to load corpus {}: {}", corpus_path, e))
}

/// Resolve the bind address: --addr wins, then PORT, then the default port.
fn resolve_addr(addr: Option<String>) -> Result<SocketAddr, String> {
    let addr = addr.unwrap_or_else(|| {
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{}", port)
    });
    addr.parse()
        .map_err(|e| format!("invalid bind address {}: {}", addr, e))
}
