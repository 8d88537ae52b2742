// Integration tests for corpus loading

use crate::common::TestCorpus;
use telusur::core::corpus::load_csv;
use telusur::core::error::TelusurError;

#[test]
fn test_load_news_corpus() {
    let fixture = TestCorpus::news();
    let corpus = load_csv(fixture.path()).expect("Failed to load corpus");

    // One of the five rows has no body
    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.stats().dropped_rows, 1);
    assert_eq!(corpus.tokenized().len(), corpus.len());
}

#[test]
fn test_ids_follow_surviving_rows() {
    let fixture = TestCorpus::news();
    let corpus = load_csv(fixture.path()).unwrap();

    let titles: Vec<&str> = corpus.documents().iter().map(|d| d.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Banjir Rendam Jakarta Utara",
            "Warga Mengungsi Akibat Banjir",
            "Harga Beras Naik",
            "Jalan Tol Ditutup",
        ]
    );
    for (position, doc) in corpus.documents().iter().enumerate() {
        assert_eq!(doc.id, position);
    }
}

#[test]
fn test_tokens_are_body_then_title_lowercased() {
    let fixture = TestCorpus::pets();
    let corpus = load_csv(fixture.path()).unwrap();

    assert_eq!(
        corpus.tokenized()[0],
        vec!["cats", "are", "small", "pets", "cats"]
    );
}

#[test]
fn test_unreadable_corpus_is_fatal() {
    let fixture = TestCorpus::pets();
    let missing = fixture.dir.path().join("missing.csv");

    let err = load_csv(&missing).unwrap_err();
    assert!(err.is_startup());
    assert!(matches!(err, TelusurError::CorpusUnreadable(_)));
}

#[test]
fn test_missing_link_column_is_fatal() {
    let fixture = TestCorpus::with_csv("title,body\nCats,cats are small pets\n");

    match load_csv(fixture.path()) {
        Err(TelusurError::MissingColumn { column, .. }) => assert_eq!(column, "link"),
        other => panic!("Expected MissingColumn error, got {other:?}"),
    }
}
