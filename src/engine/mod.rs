//! The search engine: owns the master index and the normalizer, and exposes
//! the scan / merge / query operations.

pub mod loader;
pub mod normalizer;
pub mod query;

use std::collections::HashMap;

use log::debug;

use crate::index::KeywordIndex;
use crate::types::Occurrence;

use normalizer::Normalizer;

/// Owns the master keyword index and the noise word set. Created empty,
/// populated by repeated document merges, then queried read-only.
pub struct SearchEngine {
    index: KeywordIndex,
    normalizer: Normalizer,
}

impl SearchEngine {
    /// Create an engine with an empty index and no noise words.
    pub fn new() -> Self {
        Self {
            index: KeywordIndex::new(),
            normalizer: Normalizer::new(),
        }
    }

    /// Create an engine with the given noise word list.
    pub fn with_noise_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            index: KeywordIndex::new(),
            normalizer: Normalizer::with_noise_words(words),
        }
    }

    /// Normalize a raw token into a keyword, or reject it.
    pub fn normalize(&self, token: &str) -> Option<String> {
        self.normalizer.normalize(token)
    }

    /// Scan one document's tokens into a transient keyword -> occurrence table.
    pub fn scan_document<I, S>(&self, document: &str, tokens: I) -> HashMap<String, Occurrence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        loader::scan_document(&self.normalizer, document, tokens)
    }

    /// Fold a per-document table into the master index.
    pub fn merge_document(&mut self, table: HashMap<String, Occurrence>) {
        self.index.merge_document(table);
    }

    /// Scan and merge in one step.
    pub fn index_document<I, S>(&mut self, document: &str, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let table = self.scan_document(document, tokens);
        debug!("indexed {}: {} keywords", document, table.len());
        self.merge_document(table);
    }

    /// A keyword's occurrence list, in descending frequency order.
    /// Absent keywords yield an empty slice.
    pub fn occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.index.get(&keyword.to_lowercase())
    }

    /// The master index.
    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// The normalizer and its noise word set.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
