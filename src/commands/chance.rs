//! Win-probability command
//!
//! Replays a known history of guesses and outcomes, then estimates the chance
//! of winning if a given word is played next.

use crate::game::{GameError, GameState};
use rand::Rng;

/// One past turn: the word played and its outcome text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: String,
    pub outcome: String,
}

/// Parse a `guess:outcome` pair, e.g. `slate:s0a`
///
/// An empty outcome means every letter was absent.
///
/// # Errors
///
/// Returns a message if the separator or the guess is missing.
pub fn parse_history_entry(text: &str) -> Result<HistoryEntry, String> {
    let (guess, outcome) = text
        .split_once(':')
        .ok_or_else(|| format!("expected GUESS:OUTCOME, got '{text}'"))?;

    let guess = guess.trim();
    if guess.is_empty() {
        return Err(format!("missing guess in '{text}'"));
    }

    Ok(HistoryEntry {
        guess: guess.to_string(),
        outcome: outcome.trim().to_string(),
    })
}

/// Result of a win-probability estimate
#[derive(Debug, Clone)]
pub struct ChanceResult {
    pub word: String,
    pub probability: f64,
    pub trials: usize,
    pub remaining: usize,
    pub in_dictionary: bool,
}

/// Apply `history` to `state`, then estimate the chance of winning with `word`
///
/// # Errors
///
/// Returns the first error from replaying the history, or from the estimate
/// itself (bad word, finished game).
pub fn estimate_chance<R: Rng + ?Sized>(
    mut state: GameState<'_>,
    history: &[HistoryEntry],
    word: &str,
    trials: usize,
    rng: &mut R,
) -> Result<ChanceResult, GameError> {
    for entry in history {
        state.update_with_encoded_outcome(&entry.guess, &entry.outcome)?;
    }

    let probability = state.win_probability_if_guessed(word, trials, rng)?;
    let word = word.trim().to_lowercase();

    Ok(ChanceResult {
        in_dictionary: state.dictionary().contains(&word),
        word,
        probability,
        trials,
        remaining: state.remaining_words().len(),
    })
}
