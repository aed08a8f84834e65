//! Errors raised by the game engine

use crate::core::{MAX_WORD_LENGTH, OutcomeError, WordError};
use std::fmt;

/// Error type for game state operations
///
/// Every variant is a deterministic function of the state and the input; the
/// engine never retries and leaves the state untouched when it returns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Outcome text could not be parsed
    MalformedOutcome {
        outcome: String,
        reason: OutcomeError,
    },
    /// Filtering left no candidate, so the guess/outcome contradicts earlier feedback
    EmptyCandidatePool,
    /// Guess does not match the dictionary's word length
    InvalidGuessLength { expected: usize, found: usize },
    /// Guess is not a word
    InvalidWord(WordError),
    /// The game already ended
    GameOver,
    /// Dictionary has no words
    EmptyDictionary,
    /// Dictionary words differ in length
    MixedWordLengths { expected: usize, word: String },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOutcome { outcome, reason } => {
                write!(f, "Malformed outcome '{outcome}': {reason}")
            }
            Self::EmptyCandidatePool => write!(
                f,
                "No candidate words remain; the outcome contradicts earlier feedback"
            ),
            Self::InvalidGuessLength { expected, found } => {
                write!(f, "Guess must be exactly {expected} letters, got {found}")
            }
            Self::InvalidWord(e) => write!(f, "Invalid guess: {e}"),
            Self::GameOver => write!(f, "The game is already over"),
            Self::EmptyDictionary => write!(f, "Dictionary contains no words"),
            Self::MixedWordLengths { expected, word } => write!(
                f,
                "Dictionary word '{word}' is not {expected} letters (max {MAX_WORD_LENGTH})"
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedOutcome { reason, .. } => Some(reason),
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}
