//! Per-document scan: token stream -> keyword frequency table.

use std::collections::HashMap;

use crate::types::Occurrence;

use super::normalizer::Normalizer;

/// Scan one document's tokens into a keyword -> occurrence table.
///
/// Each accepted token either bumps the frequency of an existing occurrence
/// or inserts a new one with frequency 1. The table is transient: it carries
/// no ordering and is discarded once folded into the master index.
pub fn scan_document<I, S>(
    normalizer: &Normalizer,
    document: &str,
    tokens: I,
) -> HashMap<String, Occurrence>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table: HashMap<String, Occurrence> = HashMap::new();

    for token in tokens {
        if let Some(keyword) = normalizer.normalize(token.as_ref()) {
            table
                .entry(keyword)
                .and_modify(|occ| occ.frequency += 1)
                .or_insert_with(|| Occurrence::new(document, 1));
        }
    }

    table
}
