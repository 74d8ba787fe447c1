//! Two-keyword "OR" queries: bounded ranked merge of two occurrence lists.

use crate::types::{Occurrence, TOP_RESULTS};

impl super::SearchEngine {
    /// Top documents containing `kw1` or `kw2`, ranked by occurrence
    /// frequency, deduplicated, capped at [`TOP_RESULTS`].
    ///
    /// Both keywords are lowercased for lookup; an unknown keyword simply
    /// contributes an empty list. Equal frequencies favor `kw1`'s document.
    /// Returns `None` when no document contains either keyword.
    pub fn top_matches(&self, kw1: &str, kw2: &str) -> Option<Vec<String>> {
        let first = self.index().get(&kw1.to_lowercase());
        let second = self.index().get(&kw2.to_lowercase());

        let mut results: Vec<String> = Vec::with_capacity(TOP_RESULTS);
        let mut i = 0;
        let mut j = 0;

        // Walk both descending lists with two cursors, highest frequency first.
        while i < first.len() && j < second.len() && results.len() < TOP_RESULTS {
            let a = &first[i];
            let b = &second[j];
            if a.frequency > b.frequency {
                push_unique(&mut results, &a.document);
                i += 1;
            } else if b.frequency > a.frequency {
                push_unique(&mut results, &b.document);
                j += 1;
            } else {
                // Tie: the first keyword's document ranks first.
                push_unique(&mut results, &a.document);
                if results.len() < TOP_RESULTS {
                    push_unique(&mut results, &b.document);
                }
                i += 1;
                j += 1;
            }
        }

        drain(&mut results, &first[i..]);
        drain(&mut results, &second[j..]);

        if results.is_empty() {
            None
        } else {
            Some(results)
        }
    }
}

/// Append the remainder of an exhausted merge, skipping documents already
/// emitted, until the cap is reached.
fn drain(results: &mut Vec<String>, rest: &[Occurrence]) {
    for occ in rest {
        if results.len() >= TOP_RESULTS {
            break;
        }
        push_unique(results, &occ.document);
    }
}

fn push_unique(results: &mut Vec<String>, document: &str) {
    if !results.iter().any(|d| d == document) {
        results.push(document.to_string());
    }
}
