//! Letter-frequency guess heuristic
//!
//! Scores words by how common their distinct letters are among the remaining
//! candidates, discounting letters whose role is already known. The best few
//! words form a shortlist and one of them is picked at random, which keeps
//! Monte Carlo rollouts from all following the same path.

use super::shortlist::{Scored, Shortlist};
use crate::core::{LetterSet, Word};
use crate::game::{GameError, GameState, Knowledge};
use rand::Rng;
use rand::seq::IndexedRandom;

const ALPHABET: usize = 26;

/// Relative value of each letter for the next guess
#[derive(Debug, Clone, PartialEq)]
pub struct LetterScores {
    scores: [f64; ALPHABET],
    seen: LetterSet,
}

impl LetterScores {
    /// Count letters over `words` and weight them by what `knowledge` already says
    ///
    /// Placed letters score zero, present-but-unplaced letters keep
    /// `known_penalty` of their count. Scores are normalized so the most
    /// frequent letter scores at most 1.
    #[must_use]
    pub fn from_candidates(words: &[&Word], knowledge: &Knowledge, known_penalty: f64) -> Self {
        let mut counts = [0_u32; ALPHABET];
        for word in words {
            for &letter in word.bytes() {
                counts[index(letter)] += 1;
            }
        }

        let mut scores = counts.map(f64::from);
        for letter in knowledge.included().iter() {
            if knowledge.is_positioned(letter) {
                scores[index(letter)] = 0.0;
            } else {
                scores[index(letter)] *= known_penalty;
            }
        }

        let max = scores.iter().copied().fold(1.0_f64, f64::max);
        for score in &mut scores {
            *score /= max;
        }

        let seen = words
            .iter()
            .fold(knowledge.included(), |seen, word| seen.union(word.letters()));

        Self { scores, seen }
    }

    /// Score of a single letter
    #[inline]
    #[must_use]
    pub fn letter(&self, letter: u8) -> f64 {
        self.scores[index(letter)]
    }

    /// Sum of the scores of the word's distinct letters
    #[must_use]
    pub fn word(&self, word: &Word) -> f64 {
        word.letters().iter().map(|letter| self.letter(letter)).sum()
    }

    /// Letters counted, including those already known to be present
    #[must_use]
    pub const fn seen(&self) -> LetterSet {
        self.seen
    }
}

#[inline]
fn index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Pick the next guess
///
/// With only a couple of candidates left, one of them is chosen at random.
/// Otherwise the choice is uniform over [`shortlist`].
///
/// # Errors
/// Returns `EmptyCandidatePool` when no candidate remains.
pub fn best_guess<'a, R: Rng + ?Sized>(
    state: &GameState<'a>,
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    let remaining = state.remaining_words();

    if remaining.len() <= state.config().random_pick_pool {
        return remaining
            .choose(rng)
            .copied()
            .ok_or(GameError::EmptyCandidatePool);
    }

    shortlist(state)
        .choose(rng)
        .map(|entry| entry.word)
        .ok_or(GameError::EmptyCandidatePool)
}

/// The top-scoring guesses for the current state, best first
///
/// While the candidates still disagree on letters we have not confirmed and
/// there is room for an exploratory turn, the whole dictionary competes, so a
/// guess that is certainly wrong may still be the most informative. Small
/// pools always include every remaining candidate.
#[must_use]
pub fn shortlist<'a>(state: &GameState<'a>) -> Vec<Scored<'a>> {
    let config = state.config();
    let knowledge = state.knowledge();
    let remaining = state.remaining_words();

    let scores = LetterScores::from_candidates(remaining, knowledge, config.letter_known_penalty);

    let explore = scores.seen().len() != knowledge.included().len()
        && state.guesses_left() > 1
        && remaining.len() > config.random_pick_pool;

    let mut top = Shortlist::with_capacity(config.shortlist_size(remaining.len()));
    if explore {
        for word in state.dictionary().words() {
            top.push_or_replace_if_better(scores.word(word), word);
        }
    } else {
        for &word in remaining {
            top.push_or_replace_if_better(scores.word(word), word);
        }
    }

    let mut entries = top.into_sorted_vec();

    if remaining.len() <= config.small_pool {
        for &word in remaining {
            if !entries.iter().any(|entry| entry.word == word) {
                entries.push(Scored {
                    score: scores.word(word),
                    word,
                });
            }
        }
    }

    entries
}
