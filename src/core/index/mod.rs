//! Ranking index for BM25 full-text search.
//!
//! Wraps Tantivy's BM25 scorer over the tokenized corpus. The index
//! lives in memory, is built once at startup and is read-only after.

mod bm25;

pub use bm25::{create_schema, RankingIndex};
