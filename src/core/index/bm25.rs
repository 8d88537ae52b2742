//! In-memory BM25 ranking index backed by Tantivy.
//!
//! Documents are added pre-tokenized so the index sees exactly the
//! tokens produced by [`crate::core::tokenizer`]. Each Tantivy document
//! stores the corpus id it was built from; hits are resolved back to
//! that id through a table computed once after the build.

use crate::core::error::{Result, TelusurError};
use crate::core::types::{DocId, Hit};
use std::cmp::Ordering;
use tantivy::collector::TopDocs;
use tantivy::query::{BooleanQuery, Occur, Query, TermQuery};
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, Value, STORED,
};
use tantivy::tokenizer::{PreTokenizedString, Token};
use tantivy::{DocAddress, Index, IndexReader, ReloadPolicy, Searcher, TantivyDocument, Term};

/// Writer heap for the one-shot build
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Create the Tantivy schema for the ranking index
///
/// Fields:
/// - doc_id: Corpus position (u64 | STORED)
/// - tokens: Pre-tokenized body + title, indexed with term frequencies
pub fn create_schema() -> Schema {
    let mut builder = Schema::builder();

    builder.add_u64_field("doc_id", STORED);

    let indexing = TextFieldIndexing::default()
        .set_tokenizer("raw")
        .set_index_option(IndexRecordOption::WithFreqs);
    builder.add_text_field("tokens", TextOptions::default().set_indexing_options(indexing));

    builder.build()
}

/// Read-only BM25 index over the tokenized corpus
pub struct RankingIndex {
    /// Kept alive for the searcher's lifetime
    _reader: IndexReader,

    searcher: Searcher,

    tokens_field: Field,

    /// `doc_ids[segment_ord][doc]` is the corpus id of that Tantivy doc
    doc_ids: Vec<Vec<DocId>>,

    num_docs: usize,
}

impl std::fmt::Debug for RankingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingIndex")
            .field("num_docs", &self.num_docs)
            .finish()
    }
}

impl RankingIndex {
    /// Build the index from the tokenized corpus
    ///
    /// Document `i` of `tokenized` gets id `i`.
    pub fn build(tokenized: &[Vec<String>]) -> Result<Self> {
        let schema = create_schema();
        let doc_id_field = schema
            .get_field("doc_id")
            .map_err(|e| TelusurError::IndexFailed(format!("Missing doc_id field: {e}")))?;
        let tokens_field = schema
            .get_field("tokens")
            .map_err(|e| TelusurError::IndexFailed(format!("Missing tokens field: {e}")))?;

        let index = Index::create_in_ram(schema);

        // Single indexing thread keeps documents in insertion order
        let mut writer = index
            .writer_with_num_threads(1, WRITER_HEAP_BYTES)
            .map_err(|e| TelusurError::IndexFailed(format!("Failed to create writer: {e}")))?;

        for (id, tokens) in tokenized.iter().enumerate() {
            let mut doc = TantivyDocument::new();
            doc.add_u64(doc_id_field, id as u64);
            doc.add_pre_tokenized_text(tokens_field, pre_tokenize(tokens));

            writer
                .add_document(doc)
                .map_err(|e| TelusurError::IndexFailed(format!("Failed to add document: {e}")))?;
        }

        writer
            .commit()
            .map_err(|e| TelusurError::IndexFailed(format!("Failed to commit: {e}")))?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()
            .map_err(|e| TelusurError::IndexFailed(format!("Failed to create reader: {e}")))?;
        let searcher = reader.searcher();

        let doc_ids = Self::resolve_doc_ids(&searcher, doc_id_field)?;
        let num_docs = searcher.num_docs() as usize;

        if num_docs != tokenized.len() {
            return Err(TelusurError::IndexFailed(format!(
                "Indexed {num_docs} documents, expected {}",
                tokenized.len()
            )));
        }

        tracing::debug!(
            documents = num_docs,
            segments = doc_ids.len(),
            "Ranking index built"
        );

        Ok(Self {
            _reader: reader,
            searcher,
            tokens_field,
            doc_ids,
            num_docs,
        })
    }

    /// Number of indexed documents
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Return the `n` highest-scoring documents for the query tokens
    ///
    /// Only documents matching at least one token are returned, ordered
    /// by descending score and then ascending id. Ties at the cutoff are
    /// also settled by id, whatever the segment layout.
    pub fn top_n(&self, query_tokens: &[String], n: usize) -> Result<Vec<Hit>> {
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut hits = self.matching_hits(query_tokens)?;
        hits.sort_by(compare_hits);
        hits.truncate(n);

        Ok(hits)
    }

    /// Score every document for the query tokens, in corpus order
    ///
    /// Documents that match no token score 0.
    pub fn scores_for(&self, query_tokens: &[String]) -> Result<Vec<f32>> {
        let mut scores = vec![0.0; self.num_docs];
        for hit in self.matching_hits(query_tokens)? {
            if let Some(slot) = scores.get_mut(hit.doc_id) {
                *slot = hit.score;
            }
        }
        Ok(scores)
    }

    /// Every document matching at least one token, unordered
    fn matching_hits(&self, query_tokens: &[String]) -> Result<Vec<Hit>> {
        let Some(query) = self.build_query(query_tokens) else {
            return Ok(Vec::new());
        };

        // TopDocs orders ties by DocAddress, so collect all matches and
        // leave the ordering to compare_hits
        let top_docs = self
            .searcher
            .search(query.as_ref(), &TopDocs::with_limit(self.num_docs))
            .map_err(|e| TelusurError::SearchFailed(format!("Search failed: {e}")))?;

        top_docs
            .into_iter()
            .map(|(score, address)| {
                Ok(Hit {
                    doc_id: self.doc_id_at(address)?,
                    score,
                })
            })
            .collect()
    }

    /// Sum of per-token BM25 scores; repeated tokens count repeatedly
    fn build_query(&self, query_tokens: &[String]) -> Option<Box<dyn Query>> {
        if query_tokens.is_empty() || self.num_docs == 0 {
            return None;
        }

        let clauses: Vec<(Occur, Box<dyn Query>)> = query_tokens
            .iter()
            .map(|token| {
                let term = Term::from_field_text(self.tokens_field, token);
                let query: Box<dyn Query> =
                    Box::new(TermQuery::new(term, IndexRecordOption::WithFreqs));
                (Occur::Should, query)
            })
            .collect();

        Some(Box::new(BooleanQuery::new(clauses)))
    }

    fn doc_id_at(&self, address: DocAddress) -> Result<DocId> {
        self.doc_ids
            .get(address.segment_ord as usize)
            .and_then(|segment| segment.get(address.doc_id as usize))
            .copied()
            .ok_or_else(|| {
                TelusurError::SearchFailed(format!("Unknown document address {address:?}"))
            })
    }

    /// Map every Tantivy document back to its stored corpus id
    fn resolve_doc_ids(searcher: &Searcher, doc_id_field: Field) -> Result<Vec<Vec<DocId>>> {
        let mut doc_ids = Vec::with_capacity(searcher.segment_readers().len());

        for (segment_ord, segment_reader) in searcher.segment_readers().iter().enumerate() {
            let mut segment_ids = Vec::with_capacity(segment_reader.max_doc() as usize);
            for doc in 0..segment_reader.max_doc() {
                let address = DocAddress::new(segment_ord as u32, doc);
                let stored: TantivyDocument = searcher.doc(address).map_err(|e| {
                    TelusurError::IndexFailed(format!("Failed to read document: {e}"))
                })?;
                let id = stored
                    .get_first(doc_id_field)
                    .and_then(|v| v.as_u64())
                    .ok_or_else(|| {
                        TelusurError::IndexFailed(format!("Document {address:?} has no doc_id"))
                    })?;
                segment_ids.push(id as DocId);
            }
            doc_ids.push(segment_ids);
        }

        Ok(doc_ids)
    }
}

/// Descending score, then ascending id
fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

fn pre_tokenize(tokens: &[String]) -> PreTokenizedString {
    let mut offset = 0;
    let tokens = tokens
        .iter()
        .enumerate()
        .map(|(position, text)| {
            let token = Token {
                offset_from: offset,
                offset_to: offset + text.len(),
                position,
                text: text.clone(),
                position_length: 1,
            };
            offset += text.len() + 1;
            token
        })
        .collect();

    PreTokenizedString {
        text: String::new(),
        tokens,
    }
}
