//! Ladder word representation
//!
//! A Word stores a validated lowercase word of arbitrary length. Ladder
//! words take their length from the start word at runtime, so storage is a
//! plain string rather than a fixed array.

use std::fmt;

/// A validated lowercase ASCII word
///
/// Identity is value equality; a `Word` never changes after construction,
/// so it can safely key the graph, heuristic, and visit maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Build a word from bytes already known to be lowercase ASCII letters
    ///
    /// Used by neighbor generation, where candidates are formed by
    /// substituting one validated letter into an already-valid word.
    pub(crate) fn from_ascii_lowercase(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_lowercase) {
            return None;
        }
        String::from_utf8(bytes.to_vec())
            .ok()
            .map(|text| Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True iff the word has no letters (never holds for a constructed Word)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count of positions where this word's letter differs from `other`'s
    ///
    /// Positions beyond the shorter word are never compared; callers enforce
    /// equal lengths upstream.
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        self.bytes()
            .iter()
            .zip(other.bytes())
            .filter(|(a, b)| a != b)
            .count() as u32
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
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.bytes(), b"cat");
        assert_eq!(word.len(), 3);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("CaT").unwrap();
        assert_eq!(word2.text(), "cat");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("ladder").unwrap().len(), 6);
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("c4t").is_err()); // Number
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("cat!").is_err()); // Punctuation
    }

    #[test]
    fn word_display() {
        let word = Word::new("cat").unwrap();
        assert_eq!(format!("{word}"), "cat");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("cat").unwrap();
        let word2 = Word::new("cat").unwrap();
        let word3 = Word::new("CAT").unwrap();
        let word4 = Word::new("dog").unwrap();

        assert_eq!(word1, word2);
        assert_eq!(word1, word3); // Case insensitive
        assert_ne!(word1, word4);
    }

    #[test]
    fn hamming_distance_counts_differing_positions() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(cat.hamming_distance(&cat), 0);
        assert_eq!(cat.hamming_distance(&cot), 1);
        assert_eq!(cat.hamming_distance(&dog), 3);
    }

    #[test]
    fn hamming_distance_symmetric() {
        let cat = Word::new("cat").unwrap();
        let dot = Word::new("dot").unwrap();
        assert_eq!(cat.hamming_distance(&dot), dot.hamming_distance(&cat));
    }
}
