//! Shared, immutable word list

use super::GameError;
use crate::core::Word;

/// An ordered list of words that all share one length
///
/// Game states borrow the dictionary; it is never copied or mutated after
/// construction, so it can be shared across rayon workers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    word_length: usize,
}

impl Dictionary {
    /// Create a dictionary from validated words
    ///
    /// # Errors
    /// Returns `EmptyDictionary` for an empty list and `MixedWordLengths` when
    /// a word's length differs from the first word's.
    pub fn new(words: Vec<Word>) -> Result<Self, GameError> {
        let word_length = words.first().ok_or(GameError::EmptyDictionary)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
            return Err(GameError::MixedWordLengths {
                expected: word_length,
                word: odd.text().to_string(),
            });
        }

        Ok(Self { words, word_length })
    }

    /// Create a dictionary from raw strings
    ///
    /// # Errors
    /// Returns `InvalidWord` for any string that is not a word, otherwise the
    /// same errors as [`Dictionary::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_monte_carlo::game::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["apple", "Angle", "amble"]).unwrap();
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.word_length(), 5);
    ///
    /// assert!(Dictionary::from_strs(&["apple", "pear"]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(words: &[S]) -> Result<Self, GameError> {
        let words = words
            .iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some()
    }
}
