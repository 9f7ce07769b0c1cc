//! The dictionary of valid words
//!
//! Immutable after construction. Supplies membership testing for guesses and
//! uniform random selection of the secret word.

use crate::core::{WORD_LENGTH, Word};
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Dictionary configuration faults
///
/// Fatal: a session cannot start without a usable dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid {len}-letter words", len = WORD_LENGTH)]
    Empty,
}

/// Ordered, deduplicated collection of valid words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        Ok(Self { words, index })
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if the embedded list has no valid words.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Exact, case-insensitive membership test
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = word.trim();
        word.len() == WORD_LENGTH && self.index.contains(&word.to_ascii_lowercase())
    }

    /// Draw a secret word uniformly at random
    pub fn pick_secret_word<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "slate", "allow"])).unwrap()
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert_eq!(
            Dictionary::new(Vec::new()).unwrap_err(),
            DictionaryError::Empty
        );
        assert_eq!(
            DictionaryError::Empty.to_string(),
            "dictionary contains no valid 5-letter words"
        );
    }

    #[test]
    fn duplicates_are_dropped() {
        let dict = Dictionary::new(words_from_slice(&["crane", "CRANE", "slate"])).unwrap();
        assert_eq!(dict.words().len(), 2);
        assert_eq!(dict.words()[0].text(), "crane");
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dict = small();
        assert!(dict.is_valid_word("crane"));
        assert!(dict.is_valid_word("CRANE"));
        assert!(dict.is_valid_word("Slate"));
        assert!(!dict.is_valid_word("zzzzz"));
        assert!(!dict.is_valid_word("cran"));
        assert!(!dict.is_valid_word("cranes"));
    }

    #[test]
    fn secret_comes_from_dictionary() {
        let dict = small();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = dict.pick_secret_word(&mut rng);
            assert!(dict.is_valid_word(secret.text()));
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let dict = Dictionary::embedded().unwrap();
        let a = dict.pick_secret_word(&mut StdRng::seed_from_u64(42)).clone();
        let b = dict.pick_secret_word(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(a, b);
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = Dictionary::embedded().unwrap();
        assert_eq!(dict.words().len(), WORDS.len());
    }
}
