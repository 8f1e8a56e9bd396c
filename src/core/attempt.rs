//! Attempt rows
//!
//! One submitted word and its per-letter outcomes, occupying one grid row.
//! Rows start empty and are filled either by scoring a submission or by the
//! synthetic `Solution`/`Victory` rewrite at the end of a round.

use super::outcome::LetterOutcome;
use super::word::Word;

/// A single letter cell with its outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptLetter {
    pub character: char,
    pub outcome: LetterOutcome,
}

/// One grid row: a submitted word and its per-letter outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    letters: Vec<AttemptLetter>,
    row_length: usize,
}

impl Attempt {
    /// Create an empty (unscored) row of the given length
    #[must_use]
    pub fn empty(row_length: usize) -> Self {
        Self {
            letters: Vec::new(),
            row_length,
        }
    }

    /// Build a scored row from a guess and its outcomes
    ///
    /// Lengths are guaranteed equal by the session, which scores the guess
    /// against an equal-length target.
    pub(crate) fn scored(guess: &Word, outcomes: &[LetterOutcome]) -> Self {
        debug_assert_eq!(guess.len(), outcomes.len());
        let letters = guess
            .chars()
            .iter()
            .zip(outcomes)
            .map(|(&ch, &outcome)| AttemptLetter {
                character: ch as char,
                outcome,
            })
            .collect();

        Self {
            letters,
            row_length: guess.len(),
        }
    }

    /// Build the synthetic row revealing the target after a loss
    pub(crate) fn solution_row(target: &Word) -> Self {
        let letters = target
            .chars()
            .iter()
            .map(|&ch| AttemptLetter {
                character: ch as char,
                outcome: LetterOutcome::Solution,
            })
            .collect();

        Self {
            letters,
            row_length: target.len(),
        }
    }

    /// Rewrite every cell to the `Victory` display marker
    pub(crate) fn mark_victory(&mut self) {
        for letter in &mut self.letters {
            letter.outcome = LetterOutcome::Victory;
        }
    }

    /// The row's fixed length (equals the target word length)
    #[inline]
    #[must_use]
    pub const fn row_length(&self) -> usize {
        self.row_length
    }

    /// The cells filled in so far
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[AttemptLetter] {
        &self.letters
    }

    /// True once the row holds a full word
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.letters.len() == self.row_length
    }

    /// True for a completed row that found the target
    ///
    /// Accepts both the freshly scored all-`Correct` row and its `Victory`
    /// display rewrite, so the derived win state survives the rewrite.
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.is_complete()
            && self.letters.iter().all(|l| {
                matches!(l.outcome, LetterOutcome::Correct | LetterOutcome::Victory)
            })
    }

    /// The word spelled by this row
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }
}
