//! Guess scoring
//!
//! Implements the exact feedback rules, including proper handling of
//! duplicate letters: position-exact matches are claimed first, then the
//! remaining occurrences of each target letter are handed out left to right
//! as `Misplaced`. A repeated guess letter can therefore never collect more
//! `Correct` + `Misplaced` outcomes than the target holds occurrences.

use super::outcome::LetterOutcome;
use super::word::Word;

/// Score a guess against the target word
///
/// Two-pass algorithm:
/// 1. Mark exact position matches as `Correct`; every unmatched target
///    letter feeds a remaining-count map.
/// 2. For each non-`Correct` position, consume one remaining count for the
///    guessed letter if available (`Misplaced`), otherwise leave `Absent`.
///
/// Deterministic and O(length) with a small alphabet-keyed counter. Both
/// words must have the same length; the session guarantees this before
/// calling.
///
/// # Examples
/// ```
/// use mottrix::core::{score, LetterOutcome, Word};
///
/// let target = Word::new("MAISON").unwrap();
/// let guess = Word::new("MOTION").unwrap();
///
/// assert_eq!(
///     score(&guess, &target),
///     vec![
///         LetterOutcome::Correct,   // M
///         LetterOutcome::Absent,    // O (the only O is matched at position 4)
///         LetterOutcome::Absent,    // T
///         LetterOutcome::Misplaced, // I
///         LetterOutcome::Correct,   // O
///         LetterOutcome::Correct,   // N
///     ]
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, target: &Word) -> Vec<LetterOutcome> {
    debug_assert_eq!(guess.len(), target.len(), "guess/target length mismatch");

    let len = guess.len();
    let mut result = vec![LetterOutcome::Absent; len];
    let mut remaining = target.char_counts();

    // First pass: exact matches, removed from the remaining pool
    for i in 0..len {
        if guess.char_at(i) == target.char_at(i) {
            result[i] = LetterOutcome::Correct;
            if let Some(count) = remaining.get_mut(&target.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters consume what is left of the pool
    for i in 0..len {
        if result[i] != LetterOutcome::Correct
            && let Some(count) = remaining.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterOutcome::Misplaced;
            *count -= 1;
        }
    }

    result
}
