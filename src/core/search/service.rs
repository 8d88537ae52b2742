//! Query handling over the ranking index.
//!
//! This module provides the SearchService: it tokenizes free-text
//! queries, retrieves the top-N documents from the ranking index and
//! re-attaches each document's metadata by its stable id.

use crate::core::config::SearchConfig;
use crate::core::corpus::Corpus;
use crate::core::error::{Result, TelusurError};
use crate::core::index::RankingIndex;
use crate::core::tokenizer::tokenize;
use crate::core::types::{RankedDocument, SearchRequest, SearchResponse, SearchResult};
use std::sync::Arc;
use std::time::Instant;

/// BM25 search service
#[derive(Debug)]
pub struct SearchService {
    corpus: Arc<Corpus>,
    index: Arc<RankingIndex>,
    default_k: usize,
    max_k: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(corpus: Arc<Corpus>, index: Arc<RankingIndex>, config: &SearchConfig) -> Self {
        Self {
            corpus,
            index,
            default_k: config.default_k,
            max_k: config.max_k,
        }
    }

    /// Rank the corpus against a free-text query
    ///
    /// Returns at most `n` documents in rank order. Scores are read from
    /// the full-corpus score vector, computed once per query. A query
    /// without tokens returns no documents.
    pub fn rank(&self, query: &str, n: usize) -> Result<Vec<RankedDocument>> {
        let tokens = tokenize(query);
        let hits = self.index.top_n(&tokens, n)?;
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        let scores = self.index.scores_for(&tokens)?;

        hits.into_iter()
            .map(|hit| {
                let doc = self.corpus.document(hit.doc_id).ok_or_else(|| {
                    TelusurError::SearchFailed(format!("No document with id {}", hit.doc_id))
                })?;
                let score = scores.get(hit.doc_id).copied().ok_or_else(|| {
                    TelusurError::SearchFailed(format!("No score for document {}", hit.doc_id))
                })?;

                Ok(RankedDocument {
                    doc_id: doc.id,
                    title: doc.title.clone(),
                    link: doc.link.clone(),
                    score,
                })
            })
            .collect()
    }

    /// Execute a search request
    pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.search_query(&request.query, request.k)
    }

    /// Execute search with explicit parameters
    ///
    /// Only documents with a positive score are returned, numbered from 1.
    /// Any query text is accepted; one without tokens yields no results.
    pub fn search_query(&self, query: &str, k: Option<usize>) -> Result<SearchResponse> {
        let start = Instant::now();

        let k_limit = k.unwrap_or(self.default_k).min(self.max_k);

        let results: Vec<SearchResult> = self
            .rank(query, k_limit)?
            .into_iter()
            .filter(|doc| doc.score > 0.0)
            .enumerate()
            .map(|(i, doc)| SearchResult {
                rank: i + 1,
                title: doc.title,
                link: doc.link,
                score: doc.score,
            })
            .collect();

        let duration_ms = start.elapsed().as_millis() as u64;
        let count = results.len();

        tracing::debug!(query = %query, k = k_limit, count, duration_ms, "Search completed");

        Ok(SearchResponse {
            query: query.to_string(),
            tokens: tokenize(query),
            results,
            count,
            duration_ms,
        })
    }

    /// Default number of results
    pub fn default_k(&self) -> usize {
        self.default_k
    }
}
