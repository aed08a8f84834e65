//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear set semantics.

mod letters;
mod outcome;
mod word;

pub use letters::{LetterSet, PositionSet};
pub use outcome::{Feedback, Outcome, OutcomeError};
pub use word::{MAX_WORD_LENGTH, Word, WordError};
