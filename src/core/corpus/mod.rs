//! Corpus loading and tokenization.
//!
//! The corpus is loaded once at startup and never changes. It holds
//! two index-aligned tables: the document metadata and the tokenized
//! form of each document. Position `n` in one always describes the same
//! document as position `n` in the other, and that position is the
//! document's stable id.

mod loader;

pub use loader::{load_csv, DocumentRow, REQUIRED_COLUMNS};

use crate::core::tokenizer::tokenize_document;
use crate::core::types::{CorpusStats, DocId, Document};
use chrono::Utc;
use std::collections::HashSet;
use std::path::PathBuf;

/// Immutable, index-aligned corpus
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
    tokenized: Vec<Vec<String>>,
    stats: CorpusStats,
}

impl Corpus {
    /// Build a corpus from raw rows
    ///
    /// Rows whose body is missing or blank are dropped. Surviving rows
    /// are numbered from 0 in input order.
    pub fn from_rows<I>(rows: I, source: Option<PathBuf>) -> Self
    where
        I: IntoIterator<Item = DocumentRow>,
    {
        let mut documents = Vec::new();
        let mut tokenized = Vec::new();
        let mut dropped_rows = 0;

        for row in rows {
            let body = match row.body {
                Some(body) if !body.trim().is_empty() => body,
                _ => {
                    dropped_rows += 1;
                    continue;
                }
            };
            let title = row.title.unwrap_or_default();
            let link = row.link.unwrap_or_default();

            tokenized.push(tokenize_document(&body, &title));
            documents.push(Document {
                id: documents.len(),
                title,
                body,
                link,
            });
        }

        let total_tokens = tokenized.iter().map(Vec::len).sum();
        let vocabulary_size = tokenized
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len();

        let stats = CorpusStats {
            documents: documents.len(),
            dropped_rows,
            total_tokens,
            vocabulary_size,
            source,
            loaded_at: Utc::now(),
        };

        Self {
            documents,
            tokenized,
            stats,
        }
    }

    /// Build an in-memory corpus from `(title, body, link)` triples
    pub fn from_triples<'a, I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let rows = triples.into_iter().map(|(title, body, link)| DocumentRow {
            title: Some(title.to_string()),
            body: Some(body.to_string()),
            link: Some(link.to_string()),
        });
        Self::from_rows(rows, None)
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document metadata by id
    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Tokenized documents, in id order
    pub fn tokenized(&self) -> &[Vec<String>] {
        &self.tokenized
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }
}
