//! CSV corpus loader.
//!
//! Reads a delimited file with (at least) `title`, `body` and `link`
//! columns. Header names are matched case-insensitively, so both the
//! scraper's `Title,Body,Link` and a lowercase header work. Extra
//! columns are ignored. Any failure here is fatal for the caller.

use super::Corpus;
use crate::core::error::{Result, TelusurError};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Columns every corpus file must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["title", "body", "link"];

/// One raw row of the corpus file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentRow {
    pub title: Option<String>,
    pub body: Option<String>,
    pub link: Option<String>,
}

/// Load a corpus from a CSV file
pub fn load_csv(path: &Path) -> Result<Corpus> {
    let start = Instant::now();

    let file = File::open(path).map_err(|e| {
        TelusurError::CorpusUnreadable(format!("Failed to open {}: {e}", path.display()))
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| malformed(path, e))?
        .clone();
    let normalized = normalize_headers(&headers);

    for column in REQUIRED_COLUMNS {
        if !normalized.iter().any(|h| h == column) {
            return Err(TelusurError::MissingColumn {
                column: column.to_string(),
                found: normalized.iter().map(String::from).collect(),
            });
        }
    }
    reader.set_headers(normalized);

    let mut rows = Vec::new();
    for record in reader.deserialize::<DocumentRow>() {
        rows.push(record.map_err(|e| malformed(path, e))?);
    }

    let corpus = Corpus::from_rows(rows, Some(path.to_path_buf()));

    tracing::info!(
        path = %path.display(),
        documents = corpus.len(),
        dropped_rows = corpus.stats().dropped_rows,
        vocabulary = corpus.stats().vocabulary_size,
        duration_ms = %start.elapsed().as_millis(),
        "Corpus loaded"
    );

    Ok(corpus)
}

/// Lowercase and trim header names, stripping a leading BOM
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect()
}

fn malformed(path: &Path, err: csv::Error) -> TelusurError {
    let location = err
        .position()
        .map(|pos| format!(" at line {}", pos.line()))
        .unwrap_or_default();
    TelusurError::CorpusMalformed(format!("{}{location}: {err}", path.display()))
}
