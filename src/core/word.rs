//! Game word representation
//!
//! A `Word` stores a 5-8 letter word normalized to uppercase ASCII. French
//! accented letters are folded to their base letter on construction, so all
//! comparisons downstream are case- and accent-insensitive.

use rustc_hash::FxHashMap;
use std::fmt;

/// Minimum supported word length
pub const MIN_WORD_LEN: usize = 5;

/// Maximum supported word length
pub const MAX_WORD_LEN: usize = 8;

/// A 5-8 letter word, uppercase and accent-normalized
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LEN} to {MAX_WORD_LEN} letters, got {len}"
                )
            }
            Self::InvalidCharacters => write!(f, "Word contains non-letter characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Fold a character to its uppercase unaccented ASCII form
///
/// Returns `None` for anything that is not a letter of the supported
/// alphabet (digits, punctuation, ligatures).
pub(crate) fn normalize_char(ch: char) -> Option<char> {
    let folded = match ch.to_uppercase().next().unwrap_or(ch) {
        'À' | 'Â' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Î' | 'Ï' => 'I',
        'Ô' | 'Ö' => 'O',
        'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        c if c.is_ascii_uppercase() => c,
        _ => return None,
    };
    Some(folded)
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased and accent-folded before validation, so
    /// `"maison"`, `"MAISON"` and `"Maïson"` all produce the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not within 5-8 letters
    /// - Any character is not a letter (after accent folding)
    ///
    /// # Examples
    /// ```
    /// use mottrix::core::Word;
    ///
    /// let word = Word::new("fenêtre").unwrap();
    /// assert_eq!(word.text(), "FENETRE");
    ///
    /// assert!(Word::new("chat").is_err()); // 4 letters
    /// assert!(Word::new("mais0n").is_err()); // digit
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        let len = raw.chars().count();

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(WordError::InvalidLength(len));
        }

        let mut normalized = String::with_capacity(len);
        for ch in raw.chars() {
            normalized.push(normalize_char(ch).ok_or(WordError::InvalidCharacters)?);
        }

        Ok(Self { text: normalized })
    }

    /// Get the word as a string slice (uppercase ASCII)
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: validation rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the word as a byte slice (all bytes are `b'A'..=b'Z'`)
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= length
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.text.as_bytes()[position]
    }

    /// First letter of the word, used for the hint cell
    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> char {
        self.text.as_bytes()[0] as char
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("maison").unwrap();
        assert_eq!(word.text(), "MAISON");
        assert_eq!(word.len(), 6);
        assert_eq!(word.chars(), b"MAISON");
    }

    #[test]
    fn word_creation_all_lengths() {
        assert_eq!(Word::new("TABLE").unwrap().len(), 5);
        assert_eq!(Word::new("JARDIN").unwrap().len(), 6);
        assert_eq!(Word::new("CUISINE").unwrap().len(), 7);
        assert_eq!(Word::new("ESCALIER").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_accents_folded() {
        assert_eq!(Word::new("fenêtre").unwrap().text(), "FENETRE");
        assert_eq!(Word::new("LUMIÈRE").unwrap().text(), "LUMIERE");
        assert_eq!(Word::new("garçon").unwrap().text(), "GARCON");
        assert_eq!(Word::new("théâtre").unwrap().text(), "THEATRE");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("chat"), Err(WordError::InvalidLength(4))));
        assert!(matches!(
            Word::new("ordinateur"),
            Err(WordError::InvalidLength(10))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("mais0n"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("mai-son"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("mai sn"),
            Err(WordError::InvalidCharacters)
        ));
    }

    #[test]
    fn word_equality_case_and_accent_insensitive() {
        let a = Word::new("maison").unwrap();
        let b = Word::new("MAISON").unwrap();
        let c = Word::new("Maïson").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, Word::new("raison").unwrap());
    }

    #[test]
    fn word_first_letter() {
        assert_eq!(Word::new("maison").unwrap().first_letter(), 'M');
        assert_eq!(Word::new("étoile").unwrap().first_letter(), 'E');
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("table").unwrap();
        assert_eq!(word.char_at(0), b'T');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_char_counts_duplicates() {
        let word = Word::new("banane").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'A'), Some(&2));
        assert_eq!(counts.get(&b'N'), Some(&2));
        assert_eq!(counts.get(&b'B'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&1));
    }

    #[test]
    fn normalize_char_rejects_non_letters() {
        assert_eq!(normalize_char('3'), None);
        assert_eq!(normalize_char('-'), None);
        assert_eq!(normalize_char(' '), None);
        assert_eq!(normalize_char('œ'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("chaise").unwrap();
        assert_eq!(format!("{word}"), "CHAISE");
    }
}
