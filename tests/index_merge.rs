//! Document loading and index merging tests: per-document frequency counts
//! and the descending-frequency ordered insertion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use keyrank::SearchEngine;

/// Index a document whose tokens are `word` repeated per (word, count) pair.
fn index_counts(engine: &mut SearchEngine, document: &str, counts: &[(&str, u32)]) {
    let mut tokens = Vec::new();
    for (word, count) in counts {
        for _ in 0..*count {
            tokens.push(*word);
        }
    }
    engine.index_document(document, tokens);
}

fn frequencies(engine: &SearchEngine, keyword: &str) -> Vec<u32> {
    engine
        .occurrences(keyword)
        .iter()
        .map(|occ| occ.frequency)
        .collect()
}

// ==================== Document loader ====================

#[test]
fn test_scan_counts_raw_token_occurrences() {
    let engine = SearchEngine::with_noise_words(["the"]);
    let table = engine.scan_document(
        "doc1",
        ["deep", "the", "Deep", "rivers", "deep.", "the", "rivers?"],
    );

    assert_eq!(table.len(), 2);
    assert_eq!(table["deep"].frequency, 3);
    assert_eq!(table["deep"].document, "doc1");
    assert_eq!(table["rivers"].frequency, 2);
}

#[test]
fn test_scan_rejected_tokens_leave_no_entry() {
    let engine = SearchEngine::with_noise_words(["the"]);
    let table = engine.scan_document("doc1", ["the", "...", "a.b"]);
    assert!(table.is_empty());
}

#[test]
fn test_round_trip_scan_then_merge() {
    let mut engine = SearchEngine::new();
    index_counts(&mut engine, "doc1", &[("apple", 4), ("pear", 1)]);

    let apple = engine.occurrences("apple");
    assert_eq!(apple.len(), 1);
    assert_eq!(apple[0].document, "doc1");
    assert_eq!(apple[0].frequency, 4);
    assert_eq!(engine.occurrences("pear")[0].frequency, 1);
}

// ==================== Ordered insertion ====================

#[test]
fn test_new_keyword_creates_single_element_list() {
    let mut engine = SearchEngine::new();
    index_counts(&mut engine, "doc1", &[("apple", 2)]);

    assert!(engine.index().contains("apple"));
    assert_eq!(engine.index().keyword_count(), 1);
    assert_eq!(frequencies(&engine, "apple"), vec![2]);
}

#[test]
fn test_insert_into_four_element_list() {
    // Lists with frequencies [10,7,5,2] plus a new 6 must become [10,7,6,5,2].
    let mut engine = SearchEngine::new();
    index_counts(&mut engine, "doc_five", &[("apple", 5)]);
    index_counts(&mut engine, "doc_ten", &[("apple", 10)]);
    index_counts(&mut engine, "doc_two", &[("apple", 2)]);
    index_counts(&mut engine, "doc_seven", &[("apple", 7)]);
    assert_eq!(frequencies(&engine, "apple"), vec![10, 7, 5, 2]);

    index_counts(&mut engine, "doc_six", &[("apple", 6)]);
    assert_eq!(frequencies(&engine, "apple"), vec![10, 7, 6, 5, 2]);

    let docs: Vec<&str> = engine
        .occurrences("apple")
        .iter()
        .map(|occ| occ.document.as_str())
        .collect();
    assert_eq!(docs, vec!["doc_ten", "doc_seven", "doc_six", "doc_five", "doc_two"]);
}

#[test]
fn test_two_element_swap() {
    let mut engine = SearchEngine::new();
    index_counts(&mut engine, "small", &[("apple", 1)]);
    index_counts(&mut engine, "large", &[("apple", 9)]);
    assert_eq!(frequencies(&engine, "apple"), vec![9, 1]);
}

#[test]
fn test_one_occurrence_per_document() {
    let mut engine = SearchEngine::new();
    index_counts(&mut engine, "doc1", &[("apple", 3)]);
    index_counts(&mut engine, "doc2", &[("apple", 3)]);

    let docs: Vec<&str> = engine
        .occurrences("apple")
        .iter()
        .map(|occ| occ.document.as_str())
        .collect();
    assert_eq!(docs.len(), 2);
    assert!(docs.contains(&"doc1"));
    assert!(docs.contains(&"doc2"));
}

#[test]
fn test_lists_stay_sorted_under_random_merges() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut engine = SearchEngine::new();
    let words = ["alpha", "beta", "gamma", "delta"];

    for doc in 0..50 {
        let mut counts = Vec::new();
        for word in words {
            if rng.gen_bool(0.7) {
                counts.push((word, rng.gen_range(1..=20)));
            }
        }
        index_counts(&mut engine, &format!("doc{doc}"), &counts);

        // Every list must be non-increasing after every merge.
        for (keyword, list) in engine.index().iter() {
            for pair in list.windows(2) {
                assert!(
                    pair[0].frequency >= pair[1].frequency,
                    "list for {keyword} out of order after doc{doc}"
                );
            }
        }
    }
}
