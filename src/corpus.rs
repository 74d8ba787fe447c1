//! File-based corpus collaborators: noise word lists, document lists, and
//! whitespace tokenization. The engine itself performs no I/O; everything
//! here feeds it already-tokenized input.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::engine::SearchEngine;
use crate::types::{SearchError, SearchResult};

/// Read a noise word file: one word per whitespace-separated token, lowercased.
pub fn load_noise_words(path: impl AsRef<Path>) -> SearchResult<HashSet<String>> {
    let text = read_source(path.as_ref())?;
    let words: HashSet<String> = text.split_whitespace().map(str::to_lowercase).collect();
    debug!("loaded {} noise words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Read a document file into its whitespace-separated tokens.
pub fn tokenize_file(path: impl AsRef<Path>) -> SearchResult<Vec<String>> {
    let text = read_source(path.as_ref())?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Build the index from a document-list file (one document path per line,
/// blank lines skipped). Relative document paths are resolved against the
/// list file's directory. Returns the document names in indexing order.
pub fn build_index(
    engine: &mut SearchEngine,
    docs_file: impl AsRef<Path>,
) -> SearchResult<Vec<String>> {
    let docs_file = docs_file.as_ref();
    let listing = read_source(docs_file)?;
    let base = docs_file.parent().unwrap_or_else(|| Path::new(""));

    let mut documents = Vec::new();
    for line in listing.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        let tokens = tokenize_file(resolve(base, name))?;
        engine.index_document(name, &tokens);
        documents.push(name.to_string());
    }

    info!(
        "indexed {} documents, {} keywords",
        documents.len(),
        engine.index().keyword_count()
    );
    Ok(documents)
}

fn resolve(base: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn read_source(path: &Path) -> SearchResult<String> {
    fs::read_to_string(path).map_err(|source| SearchError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
