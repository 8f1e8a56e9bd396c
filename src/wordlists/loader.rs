//! Word list loading utilities
//!
//! Functions to load word lists from files or convert the embedded
//! constants into `Word` values.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid `Word` instances, skipping blank lines and any
/// entry that fails validation (wrong length, non-letter characters).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use mottrix::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/mots.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slices to `Word` vectors
///
/// # Examples
/// ```
/// use mottrix::wordlists::loader::words_from_slice;
/// use mottrix::wordlists::WORDS_6;
///
/// let words = words_from_slice(WORDS_6);
/// assert_eq!(words.len(), WORDS_6.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
