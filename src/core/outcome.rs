//! Guess outcome encoding and decoding
//!
//! An outcome is the feedback received for one guess. It records which letters
//! are confirmed present in the hidden word and which slots hold a confirmed
//! letter. Letters are not counted: a letter is either present or absent.
//!
//! The textual form is a run of tokens, each a letter optionally followed by a
//! single digit: `s0t4b1a` means `s` sits at index 0, `t` at 4, `b` at 1, and
//! `a` is present somewhere else. Guess letters missing from the text are absent.

use super::{LetterSet, Word};
use std::fmt;

/// Per-letter feedback for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter sits at this index of the hidden word
    Correct,
    /// Letter is in the hidden word at another index
    Present,
    /// Letter is not in the hidden word
    Absent,
}

/// Feedback for a single guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    placed: Vec<Option<u8>>,
    present: LetterSet,
}

/// Reasons an outcome string can be rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeError {
    /// A digit at this character offset has no letter right before it
    DigitWithoutLetter(usize),
    /// A digit names a position past the end of the word
    PositionOutOfRange { position: usize, word_length: usize },
    /// Neither a letter nor a digit
    InvalidCharacter(char),
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DigitWithoutLetter(offset) => {
                write!(f, "digit at offset {offset} does not follow a letter")
            }
            Self::PositionOutOfRange {
                position,
                word_length,
            } => write!(
                f,
                "position {position} is outside 0..={}",
                word_length.saturating_sub(1)
            ),
            Self::InvalidCharacter(c) => write!(f, "unexpected character '{c}'"),
        }
    }
}

impl std::error::Error for OutcomeError {}

impl Outcome {
    /// Calculate the outcome when `guess` is played against a known `hidden` word
    ///
    /// Slot `i` is placed when both words share the letter there; any other
    /// guess letter found anywhere in `hidden` is present.
    ///
    /// # Examples
    /// ```
    /// use wordle_monte_carlo::core::{Outcome, Word};
    ///
    /// let guess = Word::new("angle").unwrap();
    /// let hidden = Word::new("apple").unwrap();
    /// let outcome = Outcome::from_hidden(&guess, &hidden);
    ///
    /// assert_eq!(outcome.to_string(), "a0l3e4");
    /// ```
    #[must_use]
    pub fn from_hidden(guess: &Word, hidden: &Word) -> Self {
        debug_assert_eq!(guess.len(), hidden.len(), "words must share a length");

        let placed = guess
            .bytes()
            .iter()
            .zip(hidden.bytes())
            .map(|(&g, &h)| (g == h).then_some(g))
            .collect();

        Self {
            placed,
            present: guess.letters().intersection(hidden.letters()),
        }
    }

    /// Parse the textual outcome form for a word of `word_length` letters
    ///
    /// Input is trimmed and lower-cased. Digits index the guessed word, not the
    /// outcome string. If two tokens claim the same slot, the later one wins.
    ///
    /// # Errors
    /// Returns `OutcomeError` when a digit has no preceding letter, when a
    /// digit is outside `0..word_length`, or when a character is neither an
    /// ASCII letter nor a digit.
    ///
    /// # Examples
    /// ```
    /// use wordle_monte_carlo::core::Outcome;
    ///
    /// let outcome = Outcome::decode("s0t4b1a", 5).unwrap();
    /// assert_eq!(outcome.placed_letter(0), Some(b's'));
    /// assert_eq!(outcome.placed_letter(2), None);
    /// assert!(outcome.is_present(b'a'));
    ///
    /// assert!(Outcome::decode("0s", 5).is_err());
    /// assert!(Outcome::decode("s7", 5).is_err());
    /// ```
    pub fn decode(text: &str, word_length: usize) -> Result<Self, OutcomeError> {
        let text = text.trim().to_lowercase();
        let mut placed = vec![None; word_length];
        let mut present = LetterSet::EMPTY;
        let mut pending: Option<u8> = None;

        for (offset, c) in text.chars().enumerate() {
            if c.is_ascii_lowercase() {
                let letter = c as u8;
                present.insert(letter);
                pending = Some(letter);
            } else if let Some(digit) = c.to_digit(10) {
                let letter = pending
                    .take()
                    .ok_or(OutcomeError::DigitWithoutLetter(offset))?;
                let position = digit as usize;
                if position >= word_length {
                    return Err(OutcomeError::PositionOutOfRange {
                        position,
                        word_length,
                    });
                }
                placed[position] = Some(letter);
            } else {
                return Err(OutcomeError::InvalidCharacter(c));
            }
        }

        Ok(Self { placed, present })
    }

    /// Number of slots this outcome covers
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.placed.len()
    }

    /// Letter confirmed at `index`, if any
    #[inline]
    #[must_use]
    pub fn placed_letter(&self, index: usize) -> Option<u8> {
        self.placed.get(index).copied().flatten()
    }

    /// Letters confirmed somewhere in the hidden word (placed letters included)
    #[inline]
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    #[inline]
    #[must_use]
    pub const fn is_present(&self, letter: u8) -> bool {
        self.present.contains(letter)
    }

    /// Number of slots with a confirmed letter
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placed.iter().flatten().count()
    }

    /// True when every slot has a confirmed letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.placed.iter().all(Option::is_some)
    }

    /// Per-letter feedback for `guess`, left to right
    #[must_use]
    pub fn tiles(&self, guess: &Word) -> Vec<Feedback> {
        guess
            .bytes()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if self.placed_letter(i) == Some(letter) {
                    Feedback::Correct
                } else if self.is_present(letter) {
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            })
            .collect()
    }
}

/// Canonical textual form: placed tokens by slot, then the other present letters
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = LetterSet::EMPTY;
        for (i, letter) in self.placed.iter().enumerate() {
            if let Some(letter) = *letter {
                write!(f, "{}{i}", letter as char)?;
                written.insert(letter);
            }
        }
        for letter in self.present.iter().filter(|&l| !written.contains(l)) {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
