//! In-memory dictionary
//!
//! The stock [`WordSource`] implementation: per-length word pools for
//! random target selection plus a flat membership set for validity checks.
//! Lookups are synchronous and fast; the session never blocks on it.

use super::embedded::{WORDS_5, WORDS_6, WORDS_7, WORDS_8};
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use crate::game::WordSource;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::io;
use std::path::Path;

/// In-memory word dictionary, indexed by length
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Word>>,
    members: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Duplicates collapse into a single entry.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        let mut members = FxHashSet::default();

        for word in words {
            if members.insert(word.text().to_string()) {
                by_length.entry(word.len()).or_default().push(word);
            }
        }

        Self { by_length, members }
    }

    /// The embedded French dictionary
    #[must_use]
    pub fn embedded() -> Self {
        let all = [WORDS_5, WORDS_6, WORDS_7, WORDS_8]
            .into_iter()
            .flat_map(words_from_slice);
        Self::from_words(all)
    }

    /// Load a dictionary from a file, one word per line
    ///
    /// Invalid entries are skipped, mirroring the embedded lists.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(load_from_file(path)?))
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.members.len()
    }

    /// Number of words of a given length
    #[must_use]
    pub fn count_for_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }
}

impl WordSource for Dictionary {
    fn random_word(&self, length: usize) -> Option<Word> {
        self.by_length
            .get(&length)?
            .choose(&mut rand::rng())
            .cloned()
    }

    fn is_valid(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.members.contains(w.text()))
    }
}
