//! Tests for the info CLI command

use crate::common::{create_test_services, services_from_rows, TestCorpus, PETS};
use telusur::cli::commands::info::{execute, InfoArgs};
use telusur::cli::OutputFormat;

/// Test info with basic output
#[tokio::test]
async fn test_info_human() {
    let fixture = TestCorpus::news();
    let services = create_test_services(&fixture);

    let result = execute(InfoArgs { detailed: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Info should succeed: {:?}", result.err());
}

/// Test detailed info in both formats
#[tokio::test]
async fn test_info_detailed() {
    let fixture = TestCorpus::news();
    let services = create_test_services(&fixture);

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(InfoArgs { detailed: true }, &services, format).await;
        assert!(result.is_ok(), "Detailed info should succeed");
    }
}

/// Test info over an in-memory corpus without a source path
#[tokio::test]
async fn test_info_in_memory_corpus() {
    let services = services_from_rows(PETS);

    assert!(services.corpus.stats().source.is_none());
    let result = execute(InfoArgs { detailed: true }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test the statistics the info command reports
#[test]
fn test_info_stats_values() {
    let fixture = TestCorpus::news();
    let services = create_test_services(&fixture);
    let stats = services.corpus.stats();

    assert_eq!(stats.documents, 4);
    assert_eq!(stats.dropped_rows, 1);
    assert_eq!(stats.source.as_deref(), Some(fixture.path()));
    assert!(stats.vocabulary_size > 0);
    assert!(stats.avg_doc_len() > 0.0);
}
