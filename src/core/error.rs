//! Error types and error handling for the Telusur search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! lives in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Telusur operations
pub type Result<T> = std::result::Result<T, TelusurError>;

/// Main error type for the Telusur service
#[derive(Error, Debug)]
pub enum TelusurError {
    #[error("Corpus unreadable: {0}")]
    CorpusUnreadable(String),

    #[error("Corpus malformed: {0}")]
    CorpusMalformed(String),

    #[error("Corpus is missing required column '{column}' (found: {found:?})")]
    MissingColumn { column: String, found: Vec<String> },

    #[error("Index build failed: {0}")]
    IndexFailed(String),

    #[error("Search failed: {0}")]
    SearchFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TelusurError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error can only happen while starting up
    ///
    /// Startup errors are fatal: the corpus and index are built once and
    /// never retried.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            TelusurError::CorpusUnreadable(_)
                | TelusurError::CorpusMalformed(_)
                | TelusurError::MissingColumn { .. }
                | TelusurError::IndexFailed(_)
                | TelusurError::ConfigError(_)
                | TelusurError::TomlError(_)
        )
    }
}
