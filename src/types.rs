//! Core types shared across the engine and index modules.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of documents returned by a ranked query.
pub const TOP_RESULTS: usize = 5;

/// One document's occurrence count for one keyword.
///
/// The document name never changes after construction; the frequency is
/// mutated only while accumulating counts during a single document scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Document in which the keyword occurs.
    pub document: String,
    /// Number of times the keyword occurs in that document.
    pub frequency: u32,
}

impl Occurrence {
    /// Create an occurrence with the given document and count.
    pub fn new(document: impl Into<String>, frequency: u32) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Errors surfaced by the corpus collaborators. The core index and query
/// logic never fails; only reading noise words or document files can.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A document or word-list file could not be read.
    #[error("failed to read {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type SearchResult<T> = Result<T, SearchError>;
