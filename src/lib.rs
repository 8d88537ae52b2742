//! Telusur - BM25 full-text search over a CSV document set
//!
//! Loads a tabular corpus once at startup, builds an in-memory BM25
//! index via Tantivy and answers free-text queries through a
//! single-page web UI, a JSON API and a CLI.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (presentation-agnostic)
//!   - config, error, types, tokenizer
//!   - corpus (CSV loading, index-aligned tokenized documents)
//!   - index (in-memory Tantivy BM25 ranking)
//!   - search (query handling)
//!   - services (startup-built service container)
//!
//! - **http**: Web adapter (depends on core)
//!   - search page, JSON API, middleware
//!
//! - **cli**: Terminal adapter (depends on core)
//!   - search, info, show-config, completions

// Core domain logic (presentation-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::corpus::Corpus;
pub use crate::core::error::{Result, TelusurError};
pub use crate::core::index::RankingIndex;
pub use crate::core::services::Services;
pub use crate::core::types::*;
