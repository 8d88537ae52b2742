//! HTTP request handlers for the Telusur web service
//!
//! Implements the search page, the JSON search endpoint, corpus
//! statistics and the health check.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};

use crate::core::error::TelusurError;
use crate::core::services::Services;
use crate::core::types::*;
use crate::http::templates;

/// Search page handler
///
/// Serves the single-page UI: one text field, one submit button and a
/// result list filled from the JSON search endpoint.
pub async fn index_page() -> Html<&'static str> {
    Html(templates::SEARCH_PAGE)
}

/// Health check handler
///
/// Returns server status, version and the number of indexed documents.
pub async fn health_handler(State(services): State<Arc<Services>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documents: services.corpus.len(),
    })
}

/// Search handler
///
/// Executes a BM25 search against the loaded corpus. A query without
/// any tokens returns an empty result list.
///
/// # Errors
///
/// - `SearchFailed`: Search execution failed
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, TelusurError> {
    let response = services.search.search(req)?;
    Ok(Json(response))
}

/// Corpus statistics handler
pub async fn stats_handler(State(services): State<Arc<Services>>) -> Json<CorpusStats> {
    Json(services.corpus.stats().clone())
}
