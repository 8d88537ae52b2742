//! CLI adapter for Telusur
//!
//! Provides a command-line interface to the same query path the web
//! page uses. This module is parallel to `http/`: both depend on
//! `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Telusur - BM25 search over a CSV document set
///
/// Loads the corpus, builds an in-memory BM25 index and answers
/// free-text queries ranked by relevance.
#[derive(Parser, Debug)]
#[command(name = "telusur-cli")]
#[command(version)]
#[command(about = "BM25 search over a CSV document set", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus CSV file (overrides configuration)
    #[arg(long, global = true, env = "TELUSUR_CORPUS_PATH")]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the corpus with BM25 ranking
    Search(commands::SearchArgs),

    /// Show corpus statistics and version
    Info(commands::InfoArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  telusur-cli completions bash > ~/.local/share/bash-completion/completions/telusur-cli
    ///   zsh:   telusur-cli completions zsh > ~/.zfunc/_telusur-cli
    ///   fish:  telusur-cli completions fish > ~/.config/fish/completions/telusur-cli.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let mut config = Config::load()?;
    if let Some(path) = cli.corpus {
        config.corpus.path = path;
    }

    // show-config must work even when the corpus is missing
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, cli.format).await;
    }

    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Info(args) => commands::info::execute(args, &services, cli.format).await,
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
