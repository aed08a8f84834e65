//! Candidate filtering
//!
//! Reduces a word list to the words that could still be the hidden word.

use super::Knowledge;
use crate::core::Word;

/// True if `word` is consistent with `knowledge` and is not the word just guessed
#[inline]
#[must_use]
pub fn is_consistent(word: &Word, guessed: &Word, knowledge: &Knowledge) -> bool {
    word != guessed && knowledge.admits(word)
}

/// Keep the words that are consistent with `knowledge`
///
/// The guessed word is always dropped: once played, it cannot be the answer
/// unless it already won. Input order is preserved.
///
/// # Examples
/// ```
/// use wordle_monte_carlo::core::{Outcome, Word};
/// use wordle_monte_carlo::game::{Knowledge, filter::retain_consistent};
///
/// let words: Vec<Word> = ["apple", "angle", "amble", "crane"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let guess = Word::new("angle").unwrap();
/// let hidden = Word::new("apple").unwrap();
/// let mut knowledge = Knowledge::new(5);
/// knowledge.apply(&guess, &Outcome::from_hidden(&guess, &hidden));
///
/// let remaining = retain_consistent(&refs, &guess, &knowledge);
/// let texts: Vec<&str> = remaining.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["apple", "amble"]);
/// ```
#[must_use]
pub fn retain_consistent<'a>(
    words: &[&'a Word],
    guessed: &Word,
    knowledge: &Knowledge,
) -> Vec<&'a Word> {
    words
        .iter()
        .copied()
        .filter(|&word| is_consistent(word, guessed, knowledge))
        .collect()
}
