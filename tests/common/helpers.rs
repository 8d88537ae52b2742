// Test helper functions

use super::fixtures::TestCorpus;
use std::sync::Arc;
use telusur::core::config::Config;
use telusur::core::corpus::Corpus;
use telusur::core::services::Services;

/// Create services over a CSV test corpus
#[allow(dead_code)]
pub fn create_test_services(corpus: &TestCorpus) -> Arc<Services> {
    let mut config = Config::default();
    config.corpus.path = corpus.path().to_path_buf();

    Arc::new(Services::new(config).expect("Failed to build services"))
}

/// Create services over an in-memory corpus
#[allow(dead_code)]
pub fn services_from_rows(rows: &[(&str, &str, &str)]) -> Arc<Services> {
    let corpus = Corpus::from_triples(rows.iter().copied());
    Arc::new(Services::from_corpus(Config::default(), corpus).expect("Failed to build services"))
}
