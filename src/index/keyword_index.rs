//! Master inverted index mapping keywords to descending-frequency occurrence lists.

use std::collections::HashMap;

use crate::types::Occurrence;

/// The master index. Each keyword maps to a list of occurrences kept in
/// non-increasing frequency order; no two entries in a list share a document.
/// The index only grows — there is no removal operation.
pub struct KeywordIndex {
    postings: HashMap<String, Vec<Occurrence>>,
}

impl KeywordIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            postings: HashMap::new(),
        }
    }

    /// Look up a keyword's occurrence list. Absent keywords yield an empty slice.
    pub fn get(&self, keyword: &str) -> &[Occurrence] {
        self.postings.get(keyword).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Whether the index holds any occurrences for a keyword.
    pub fn contains(&self, keyword: &str) -> bool {
        self.postings.contains_key(keyword)
    }

    /// Number of distinct keywords.
    pub fn keyword_count(&self) -> usize {
        self.postings.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Iterate over (keyword, occurrence list) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.postings.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Fold one document's keyword table into the index.
    ///
    /// Each document contributes at most one occurrence per keyword, so an
    /// existing list's first n-1 elements are already sorted and only the
    /// appended element needs relocating.
    pub fn merge_document(&mut self, table: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in table {
            let list = self.postings.entry(keyword).or_default();
            list.push(occurrence);
            insert_last(list);
        }
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Relocate the last element of `list` so the whole list is sorted in
/// non-increasing frequency order, assuming elements `0..len-1` already are.
///
/// Binary-searches the sorted prefix for the splice point, then rotates the
/// tail right by one: O(log n) search plus O(n) shift. Equal frequencies may
/// land on either side of their peers; only non-increase is guaranteed.
fn insert_last(list: &mut Vec<Occurrence>) {
    let n = list.len();
    if n <= 1 {
        return;
    }

    let target = list[n - 1].frequency;
    let pos = list[..n - 1]
        .binary_search_by(|occ| target.cmp(&occ.frequency))
        .unwrap_or_else(|p| p);
    list[pos..].rotate_right(1);
}
