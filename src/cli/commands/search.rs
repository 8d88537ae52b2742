//! Search command - rank the corpus against a query

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchResponse;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (lowercased and split on whitespace)
    pub query: String,

    /// Maximum number of results (defaults to search.default_k)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show links (no titles or scores)
    #[arg(long)]
    pub links_only: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.query.trim().is_empty() {
        output::print_warning("Query is empty, nothing to search");
    }

    let response = services.search.search_query(&args.query, args.limit)?;

    match format {
        OutputFormat::Human => print_human(&response, args.links_only),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_human(response: &SearchResponse, links_only: bool) {
    if response.results.is_empty() {
        println!("No results found for '{}'", colors::label(&response.query));
        return;
    }

    if links_only {
        for result in &response.results {
            println!("{}", colors::link(&result.link));
        }
        return;
    }

    output::print_header("Top Results:");
    for result in &response.results {
        println!(
            "{}. {}",
            colors::rank(&result.rank.to_string()),
            colors::title(&result.title)
        );
        println!("   {}", colors::link(&result.link));
        println!(
            "   {} {}",
            colors::dim("score:"),
            colors::score(&output::format_score(result.score))
        );
    }
    println!(
        "\n{} {}",
        colors::number(&response.count.to_string()),
        colors::dim(&format!("result(s) in {}ms", response.duration_ms))
    );
}
