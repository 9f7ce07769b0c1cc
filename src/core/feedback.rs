//! Per-letter verdicts and guess scoring
//!
//! A guess is scored against the secret letter by letter:
//! - `Correct`: right letter, right position
//! - `Present`: right letter, wrong position
//! - `Absent`: letter not in the secret, after duplicates already matched
//!
//! Tiles that have not been revealed yet carry `Unrevealed`.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter
///
/// Variants are declared in priority order, so the derived `Ord` is the
/// upgrade order used by keyboard memory: `Unrevealed < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    #[default]
    Unrevealed,
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji square used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unrevealed => '⬛',
        }
    }
}

/// Verdicts for one full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All `Correct`
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Wrap precomputed verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `secret`
    ///
    /// Repeated letters are handled by consuming occurrences from the secret,
    /// so a letter is never credited more times than it appears there.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the pool
    /// 2. Second pass: mark remaining letters `Present` while the pool still holds them
    /// 3. Everything else is `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("react").unwrap();
    /// let secret = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// assert_eq!(feedback.verdicts()[2], Verdict::Correct);
    /// assert_eq!(feedback.verdicts()[4], Verdict::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = secret.char_counts();

        // Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.chars()[i];
            if letter == secret.chars()[i] {
                result[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Verdict::Correct {
                continue;
            }
            let letter = guess.chars()[i];
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The verdict for each position
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is `Correct`
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut verdicts = [Verdict::Unrevealed; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return None,
            };
        }

        Some(Self(verdicts))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(guess: &str, secret: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    fn count(feedback: Feedback, verdict: Verdict) -> usize {
        feedback.verdicts().iter().filter(|&&v| v == verdict).count()
    }

    #[test]
    fn verdict_priority_order() {
        assert!(Verdict::Unrevealed < Verdict::Absent);
        assert!(Verdict::Absent < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
        assert_eq!(Verdict::default(), Verdict::Unrevealed);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("abcde", "fghij");
        assert_eq!(count(feedback, Verdict::Absent), 5);
    }

    #[test]
    fn feedback_all_correct() {
        let feedback = score("crane", "crane");
        assert_eq!(feedback, Feedback::PERFECT);
        assert!(feedback.is_perfect());
    }

    #[test]
    fn react_against_crane() {
        use Verdict::{Absent, Correct, Present};

        let feedback = score("react", "crane");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn llama_against_allow_marks_two_ls() {
        use Verdict::{Absent, Correct, Present};

        // Second L is an exact hit; first L takes the secret's other L.
        // First A takes the only A, so the trailing A is absent.
        let feedback = score("llama", "allow");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        use Verdict::{Absent, Correct, Present};

        // ROBOT vs FLOOR: second O sits on FLOOR's second O, first O takes the other
        let feedback = score("robot", "floor");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn triple_guess_letter_single_in_secret() {
        use Verdict::{Absent, Present};

        // EERIE has three Es; CRANE has one, at the end, which EERIE's last E hits
        let feedback = score("eerie", "crane");
        assert_eq!(feedback.verdicts()[0], Absent);
        assert_eq!(feedback.verdicts()[1], Absent);
        assert_eq!(feedback.verdicts()[2], Present);
        assert_eq!(count(feedback, Verdict::Correct), 1);
    }

    #[test]
    fn speed_against_erase() {
        use Verdict::{Absent, Present};

        let feedback = score("speed", "erase");
        assert_eq!(
            feedback.verdicts(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(count(p1, Verdict::Correct), 2);
        assert_eq!(count(p1, Verdict::Present), 1);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::parse("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜🟩🟨");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // Small alphabet so repeated letters are common
        "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn credited_letters_never_exceed_secret_occurrences(
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let feedback = Feedback::score(&guess, &secret);
            for letter in b'a'..=b'e' {
                let credited = guess
                    .chars()
                    .iter()
                    .zip(feedback.verdicts())
                    .filter(|&(&ch, &v)| ch == letter && v != Verdict::Absent)
                    .count();
                let in_secret = secret.chars().iter().filter(|&&ch| ch == letter).count();
                prop_assert!(credited <= in_secret);
            }
        }

        #[test]
        fn scoring_secret_against_itself_is_perfect(secret in word_strategy()) {
            prop_assert!(Feedback::score(&secret, &secret).is_perfect());
        }

        #[test]
        fn correct_exactly_where_letters_match(
            guess in word_strategy(),
            secret in word_strategy(),
        ) {
            let feedback = Feedback::score(&guess, &secret);
            for i in 0..WORD_LENGTH {
                let matches = guess.chars()[i] == secret.chars()[i];
                prop_assert_eq!(feedback.verdicts()[i] == Verdict::Correct, matches);
            }
        }
    }
}
