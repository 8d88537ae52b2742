//! Search module for BM25 full-text search.
//!
//! This module turns free-text queries into ranked documents using
//! the in-memory ranking index.

mod service;

pub use service::SearchService;
