//! Core data types for the Telusur search service.
//!
//! This module defines all data structures used throughout the
//! application, including documents, ranked hits, requests, and
//! responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stable document identifier: the row position in the loaded corpus
pub type DocId = usize;

/// A single document from the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position in the loaded corpus (0-based, after dropped rows)
    pub id: DocId,

    pub title: String,

    pub body: String,

    pub link: String,
}

/// A document matched by the ranking index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub doc_id: DocId,

    /// BM25 relevance score (higher = more relevant)
    pub score: f32,
}

/// A ranked document with its metadata re-attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub doc_id: DocId,
    pub title: String,
    pub link: String,
    pub score: f32,
}

/// Search result returned to presentation adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 1-based position in the result list
    pub rank: usize,

    pub title: String,

    pub link: String,

    /// BM25 relevance score, always > 0
    pub score: f32,
}

/// Request to search the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query string
    pub query: String,

    /// Number of results to return (optional)
    #[serde(default)]
    pub k: Option<usize>,
}

/// Response from search operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Original query string
    pub query: String,

    /// Query tokens after lowercasing and whitespace splitting
    pub tokens: Vec<String>,

    /// Search results (descending score)
    pub results: Vec<SearchResult>,

    /// Number of results returned
    pub count: usize,

    /// Query duration in milliseconds
    pub duration_ms: u64,
}

/// Statistics from loading the corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Documents kept for indexing
    pub documents: usize,

    /// Rows dropped because their body was missing or blank
    pub dropped_rows: usize,

    /// Total tokens across all documents
    pub total_tokens: usize,

    /// Distinct tokens across all documents
    pub vocabulary_size: usize,

    /// Source file (None for an in-memory corpus)
    pub source: Option<PathBuf>,

    pub loaded_at: DateTime<Utc>,
}

impl CorpusStats {
    /// Average document length in tokens
    pub fn avg_doc_len(&self) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.total_tokens as f64 / self.documents as f64
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Number of indexed documents
    pub documents: usize,
}
