//! Keyword normalization: lowercasing, punctuation stripping, noise filtering.

use std::collections::HashSet;

/// Punctuation stripped one character at a time from the end of a token.
const TRAILING: &[char] = &['.', ',', '?', ':', ';', '!', ')', ']'];

/// Punctuation stripped one character at a time from the start of a token.
const LEADING: &[char] = &['(', '['];

/// Punctuation that disqualifies a token when found anywhere after stripping.
const INTERIOR: &[char] = &[':', ';', '.', ',', '?', '!', '(', ')', '[', ']', '-', '\''];

/// Turns raw tokens into canonical keywords, rejecting noise words and
/// tokens that are not purely alphabetic content.
pub struct Normalizer {
    noise_words: HashSet<String>,
}

impl Normalizer {
    /// Create a normalizer with an empty noise word set.
    pub fn new() -> Self {
        Self {
            noise_words: HashSet::new(),
        }
    }

    /// Create a normalizer from a noise word list. Words are lowercased.
    pub fn with_noise_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            noise_words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Whether a (lowercased) word is in the noise set.
    pub fn is_noise_word(&self, word: &str) -> bool {
        self.noise_words.contains(word)
    }

    /// Number of loaded noise words.
    pub fn noise_word_count(&self) -> usize {
        self.noise_words.len()
    }

    /// Normalize a raw token into a keyword, or reject it.
    ///
    /// The token is lowercased, then trailing punctuation (`. , ? : ; ! ) ]`)
    /// and leading wrappers (`( [`) are stripped one character per pass until
    /// a pass strips nothing. The remainder is rejected if it is empty, still
    /// contains punctuation anywhere, or is a noise word.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let mut word = token.to_lowercase();

        loop {
            let mut stripped = false;
            if word.ends_with(TRAILING) {
                word.pop();
                stripped = true;
            }
            if word.starts_with(LEADING) {
                word.remove(0);
                stripped = true;
            }
            if !stripped {
                break;
            }
        }

        // A token that was pure punctuation strips down to nothing.
        if word.is_empty() {
            return None;
        }
        if word.contains(INTERIOR) {
            return None;
        }
        if self.noise_words.contains(&word) {
            return None;
        }

        Some(word)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
