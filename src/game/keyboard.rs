//! Keyboard memory: the best verdict seen for each letter
//!
//! Updates only ever raise a letter's verdict, so a key that has gone green
//! stays green for the rest of the session.

use crate::core::{Feedback, Verdict, Word};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct KeyboardMemory {
    verdicts: FxHashMap<char, Verdict>,
}

impl KeyboardMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Best verdict seen for `letter`, `Unrevealed` if never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Verdict {
        self.verdicts
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Store `max(stored, verdict)`; returns whether the stored verdict changed
    pub fn update(&mut self, letter: char, verdict: Verdict) -> bool {
        let stored = self
            .verdicts
            .entry(letter.to_ascii_lowercase())
            .or_default();
        if verdict > *stored {
            *stored = verdict;
            true
        } else {
            false
        }
    }

    /// Fold one committed guess into memory
    ///
    /// Each distinct letter is updated once, with the best verdict among its
    /// occurrences in the guess.
    pub fn apply_guess(&mut self, guess: &Word, feedback: &Feedback) {
        let mut best: FxHashMap<char, Verdict> = FxHashMap::default();
        for (&letter, &verdict) in guess.chars().iter().zip(feedback.verdicts()) {
            let slot = best.entry(letter as char).or_default();
            *slot = (*slot).max(verdict);
        }
        for (letter, verdict) in best {
            self.update(letter, verdict);
        }
    }
}
