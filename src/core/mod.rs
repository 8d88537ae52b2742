//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the presentation surfaces (web UI, JSON API, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **tokenizer**: Lowercase whitespace tokenization
//! - **corpus**: CSV loading into an index-aligned corpus
//! - **index**: In-memory Tantivy BM25 ranking index
//! - **search**: Query handling and result shaping
//! - **services**: Unified service container

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod search;
pub mod services;
pub mod tokenizer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, TelusurError};
pub use services::Services;
