//! Unified service container for Telusur
//!
//! Provides shared access to all core services. The container is built
//! once at startup and handed to every adapter; nothing in it changes
//! afterwards.

use crate::core::config::Config;
use crate::core::corpus::{load_csv, Corpus};
use crate::core::error::Result;
use crate::core::index::RankingIndex;
use crate::core::search::SearchService;
use std::sync::Arc;
use std::time::Instant;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Debug, Clone)]
pub struct Services {
    /// Loaded documents and their tokenized form
    pub corpus: Arc<Corpus>,

    /// BM25 index over the corpus
    pub index: Arc<RankingIndex>,

    /// Search service for BM25 queries
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Load the configured corpus and build all services
    ///
    /// Fails if the corpus file is unreadable or malformed.
    pub fn new(config: Config) -> Result<Self> {
        let corpus = load_csv(&config.corpus.path)?;
        Self::from_corpus(config, corpus)
    }

    /// Build services around an already loaded corpus
    pub fn from_corpus(config: Config, corpus: Corpus) -> Result<Self> {
        let start = Instant::now();

        let corpus = Arc::new(corpus);
        let index = Arc::new(RankingIndex::build(corpus.tokenized())?);

        tracing::info!(
            documents = index.num_docs(),
            duration_ms = %start.elapsed().as_millis(),
            "Ranking index ready"
        );

        let search = Arc::new(SearchService::new(
            Arc::clone(&corpus),
            Arc::clone(&index),
            &config.search,
        ));

        Ok(Self {
            corpus,
            index,
            search,
            config: Arc::new(config),
        })
    }
}
