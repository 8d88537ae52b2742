//! Telusur CLI - command-line interface for Telusur search
//!
//! Runs the same query path as the web page, straight from a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Search the default corpus (after3.csv)
//! telusur-cli search "banjir jakarta"
//!
//! # Search another file, JSON output
//! telusur-cli --corpus news.csv --format json search "banjir" -k 5
//!
//! # Corpus statistics
//! telusur-cli info --detailed
//! ```

use clap::Parser;
use telusur::cli::{run, Cli};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telusur=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
