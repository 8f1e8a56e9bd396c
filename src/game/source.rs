//! Word provider contract
//!
//! The session treats the dictionary as an opaque collaborator: something
//! that hands out random targets and answers validity queries. The embedded
//! dictionary in [`crate::wordlists`] is the stock implementation; tests
//! plug in small fixture sources.

use crate::core::Word;
use std::fmt;

/// Supplies random target words and validity checks for guesses
pub trait WordSource {
    /// A random target word of the given length, or `None` when the source
    /// holds no words of that length
    fn random_word(&self, length: usize) -> Option<Word>;

    /// Case- and accent-insensitive membership test
    fn is_valid(&self, word: &str) -> bool;
}

/// Errors raised when a session cannot be created or restarted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The word source holds no words of the requested length
    NoWordsAvailable(usize),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable(length) => {
                write!(f, "No words available for length {length}")
            }
        }
    }
}

impl std::error::Error for GameError {}
