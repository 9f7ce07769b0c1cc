//! Score command
//!
//! Scores a single guess against a known secret, without a session.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// Neither word has to be in the dictionary; both only need to be five ASCII letters.
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn score_guess(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    let feedback = Feedback::score(&guess, &secret);
    tracing::debug!(%guess, %secret, %feedback, "scored");

    Ok(ScoreResult {
        guess,
        secret,
        feedback,
    })
}
