//! Tests for output formatting helpers and argument parsing

use clap::Parser;
use telusur::cli::output::{format_count, format_score};
use telusur::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_format_score_precision() {
    assert_eq!(format_score(0.5), "0.5000");
    assert_eq!(format_score(12.0), "12.0000");
}

#[test]
fn test_format_count_large() {
    assert_eq!(format_count(12_345), "12,345");
    assert_eq!(format_count(100_000), "100,000");
}

#[test]
fn test_parse_search_command() {
    let cli = Cli::try_parse_from(["telusur-cli", "search", "banjir jakarta", "-k", "5"]).unwrap();

    assert_eq!(cli.format, OutputFormat::Human);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.query, "banjir jakarta");
            assert_eq!(args.limit, Some(5));
            assert!(!args.links_only);
        }
        other => panic!("Expected search command, got {other:?}"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "telusur-cli",
        "info",
        "--format",
        "json",
        "--corpus",
        "news.csv",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.corpus.as_deref(), Some(std::path::Path::new("news.csv")));
    assert!(matches!(cli.command, Commands::Info(_)));
}

#[test]
fn test_parse_show_config() {
    let cli = Cli::try_parse_from(["telusur-cli", "show-config", "--toml"]).unwrap();

    match cli.command {
        Commands::ShowConfig(args) => assert!(args.toml),
        other => panic!("Expected show-config command, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    let result = Cli::try_parse_from(["telusur-cli", "--format", "xml", "info"]);
    assert!(result.is_err());
}
