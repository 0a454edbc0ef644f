// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport for the query engine.
//!
//! Deliberately thin: parse query parameters, call the engine, encode JSON.
//! All interesting behavior lives in [`Searcher`]; this layer only maps
//! missing or invalid parameters to 400 responses and engine results to
//! `application/json`. The searcher is built before the listener starts and
//! injected as an `Extension(Arc<Searcher>)` - requests never observe a
//! partially built index.
//!
//! Routes:
//!
//! - `GET /` - embedded demo page
//! - `GET /search?q=<query>` - JSON array of hits
//! - `GET /loadmore?idx=<offset>&type=prev|nxt` - JSON string with the
//!   adjacent context slice

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::engine::Searcher;
use crate::types::Direction;

/// Demo page served at `/`; self-contained, no static directory needed.
const DEMO_PAGE: &str = include_str!("demo.html");

/// Query parameters for `GET /search`.
///
/// `q` is optional here so a missing parameter produces our error message
/// instead of the extractor's.
#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Query parameters for `GET /loadmore`.
///
/// `idx` is taken as a string so a non-integer value can be rejected with
/// a specific message rather than a generic deserialization failure.
#[derive(Deserialize)]
struct LoadMoreParams {
    idx: Option<String>,
    #[serde(rename = "type")]
    direction: Option<String>,
}

/// Build the application router around a fully constructed searcher.
pub fn router(searcher: Arc<Searcher>) -> Router {
    Router::new()
        .route("/", get(demo_page))
        .route("/search", get(handle_search))
        .route("/loadmore", get(handle_load_more))
        .layer(Extension(searcher))
}

/// Bind `addr` and serve until the process exits.
pub async fn run(searcher: Arc<Searcher>, addr: SocketAddr) -> std::io::Result<()> {
    let app = router(searcher);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await
}

async fn demo_page() -> Html<&'static str> {
    Html(DEMO_PAGE)
}

async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(searcher): Extension<Arc<Searcher>>,
) -> Response {
    let Some(query) = params.q else {
        return bad_request("missing search query in URL params");
    };

    match searcher.search(&query) {
        Ok(hits) => Json(hits).into_response(),
        Err(err) => {
            tracing::debug!("rejected search query: {}", err);
            bad_request(err.to_string())
        }
    }
}

async fn handle_load_more(
    Query(params): Query<LoadMoreParams>,
    Extension(searcher): Extension<Arc<Searcher>>,
) -> Response {
    let Some(direction) = params.direction else {
        return bad_request("missing search type in URL params");
    };
    let direction: Direction = match direction.parse() {
        Ok(direction) => direction,
        Err(err) => {
            tracing::debug!("rejected loadmore: {}", err);
            return bad_request(err.to_string());
        }
    };

    let Some(idx) = params.idx else {
        return bad_request("missing search idx in URL params");
    };
    let offset: usize = match idx.parse() {
        Ok(offset) => offset,
        Err(_) => return bad_request("idx should be an integer"),
    };

    Json(searcher.expand_context(offset, direction)).into_response()
}

fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, message.into()).into_response()
}
