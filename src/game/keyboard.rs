//! Keyboard feedback aggregation
//!
//! Folds the outcomes of every scored attempt into a best-known state per
//! letter of the alphabet. Quality only ever goes up: a duplicate letter
//! scored `Absent` in one position never downgrades a key already known to
//! be `Misplaced` or `Correct` from an earlier attempt.

use crate::core::{Attempt, LetterOutcome};

const ALPHABET_SIZE: usize = 26;

/// Best-known outcome per letter, aggregated across a session's attempts
#[derive(Debug, Clone)]
pub struct KeyboardState {
    best: [LetterOutcome; ALPHABET_SIZE],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    /// Create a keyboard with every letter `Unknown`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            best: [LetterOutcome::Unknown; ALPHABET_SIZE],
        }
    }

    /// Fold one scored attempt into the keyboard
    ///
    /// Display-only rows (`Solution`/`Victory`) carry no keyboard rank and
    /// are ignored entirely.
    pub fn update(&mut self, attempt: &Attempt) {
        for letter in attempt.letters() {
            let Some(slot) = Self::slot(letter.character) else {
                continue;
            };
            let Some(rank) = letter.outcome.keyboard_rank() else {
                continue;
            };
            // Stored states always have a rank; Solution/Victory never land here
            if self.best[slot].keyboard_rank().is_some_and(|cur| rank > cur) {
                self.best[slot] = letter.outcome;
            }
        }
    }

    /// Best-known state for a letter, `Unknown` by default
    #[must_use]
    pub fn state_of(&self, letter: char) -> LetterOutcome {
        Self::slot(letter).map_or(LetterOutcome::Unknown, |slot| self.best[slot])
    }

    /// Forget everything (new round)
    pub fn reset(&mut self) {
        self.best = [LetterOutcome::Unknown; ALPHABET_SIZE];
    }

    fn slot(letter: char) -> Option<usize> {
        let upper = letter.to_ascii_uppercase();
        upper
            .is_ascii_uppercase()
            .then(|| (upper as u8 - b'A') as usize)
    }
}
