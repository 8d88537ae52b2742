//! Info command - show corpus statistics and version

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show detailed corpus statistics
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

/// Info response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub corpus: String,
    pub documents: usize,
    pub dropped_rows: usize,
    pub loaded_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vocabulary_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_doc_len: Option<f64>,
}

/// Execute the info command
pub async fn execute(
    args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.corpus.stats();

    let info = InfoResponse {
        name: "telusur".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        corpus: stats
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<in-memory>".to_string()),
        documents: stats.documents,
        dropped_rows: stats.dropped_rows,
        loaded_at: stats.loaded_at.to_rfc3339(),
        vocabulary_size: args.detailed.then_some(stats.vocabulary_size),
        total_tokens: args.detailed.then_some(stats.total_tokens),
        avg_doc_len: args.detailed.then(|| stats.avg_doc_len()),
    };

    match format {
        OutputFormat::Human => print!("{}", format_human(&info)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}

fn format_human(info: &InfoResponse) -> String {
    let mut out = format!("{}\n", colors::label(&format!("telusur {}", info.version)));
    out += &format!("Corpus: {}\n", colors::link(&info.corpus));
    out += &format!(
        "Documents: {} ({} rows dropped)\n",
        colors::number(&output::format_count(info.documents)),
        info.dropped_rows
    );
    out += &format!("Loaded: {}\n", colors::dim(&info.loaded_at));
    if let (Some(vocab), Some(tokens), Some(avg)) =
        (info.vocabulary_size, info.total_tokens, info.avg_doc_len)
    {
        out += &format!("Vocabulary: {}\n", output::format_count(vocab));
        out += &format!("Tokens: {}\n", output::format_count(tokens));
        out += &format!("Avg document length: {avg:.1} tokens\n");
    }
    out
}
