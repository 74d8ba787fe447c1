//! keyrank — an in-memory inverted keyword index with frequency-ranked
//! two-keyword search.
//!
//! Documents are scanned into per-document keyword frequency tables, merged
//! into a master index whose occurrence lists stay sorted in descending
//! frequency order, and queried with a bounded "kw1 OR kw2" merge that
//! returns at most [`TOP_RESULTS`] documents.

pub mod corpus;
pub mod engine;
pub mod index;
pub mod types;

pub use engine::normalizer::Normalizer;
pub use engine::SearchEngine;
pub use index::KeywordIndex;
pub use types::{Occurrence, SearchError, SearchResult, TOP_RESULTS};
