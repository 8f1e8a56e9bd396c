//! Core domain types for the word-guessing game
//!
//! This module contains the fundamental domain types with zero game-state
//! dependencies: words, per-letter outcomes, attempt rows, and the pure
//! scoring function.

mod attempt;
mod outcome;
mod scoring;
mod word;

pub use attempt::{Attempt, AttemptLetter};
pub(crate) use word::normalize_char;
pub use outcome::LetterOutcome;
pub use scoring::score;
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
