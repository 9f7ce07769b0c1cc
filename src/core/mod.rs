//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: validated words and guess scoring.
//! All types here are pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError};
