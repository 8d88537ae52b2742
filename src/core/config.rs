//! Configuration management for the Telusur search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, TelusurError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when
/// `TELUSUR_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "telusur.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Corpus configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// CSV file with `title`, `body` and `link` columns
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_k")]
    pub default_k: usize,

    /// Maximum results per query
    #[serde(default = "default_max_k")]
    pub max_k: usize,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions
fn default_corpus_path() -> PathBuf {
    PathBuf::from("after3.csv")
}

fn default_k() -> usize {
    10
}

fn default_max_k() -> usize {
    100
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8501
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
            max_k: default_max_k(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TelusurError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// Priority order for the file:
    /// 1. TELUSUR_CONFIG env var
    /// 2. ./telusur.toml
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("TELUSUR_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("TELUSUR_CORPUS_PATH") {
            self.corpus.path = PathBuf::from(path);
        }

        if let Ok(default_k) = env::var("TELUSUR_DEFAULT_K") {
            if let Ok(k) = default_k.parse() {
                self.search.default_k = k;
            }
        }
        if let Ok(max_k) = env::var("TELUSUR_MAX_K") {
            if let Ok(k) = max_k.parse() {
                self.search.max_k = k;
            }
        }

        if let Ok(host) = env::var("TELUSUR_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("TELUSUR_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.corpus.path.as_os_str().is_empty() {
            return Err(TelusurError::ConfigError(
                "Corpus path must not be empty".to_string(),
            ));
        }

        if self.search.default_k == 0 {
            return Err(TelusurError::ConfigError(
                "Default k must be non-zero".to_string(),
            ));
        }

        if self.search.default_k > self.search.max_k {
            return Err(TelusurError::ConfigError(
                "Default k cannot exceed max k".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Corpus: {:?}", self.corpus.path);
        tracing::info!("  Default k: {}", self.search.default_k);
        tracing::info!("  Max k: {}", self.search.max_k);
        tracing::info!("  Bind: {}", self.bind_addr());
    }
}
