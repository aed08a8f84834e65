//! Word solving command
//!
//! Plays one game against a known hidden word and records the solution path.

use crate::core::{Feedback, Outcome, Word};
use crate::game::{GameError, GameState};
use crate::solver::Strategy;
use rand::Rng;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
    /// The target was guessed within the budget
    pub success: bool,
    /// Word determined by the outcomes but never played
    pub deduced: Option<String>,
}

impl SolveResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub outcome: Outcome,
    pub tiles: Vec<Feedback>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play `state` to the end against `target`, choosing guesses with `strategy`
///
/// # Errors
///
/// Returns `InvalidGuessLength` if the target does not fit the dictionary,
/// and propagates any error from the strategy.
pub fn play_game<S: Strategy, R: Rng + ?Sized>(
    state: &mut GameState<'_>,
    target: &Word,
    strategy: &S,
    rng: &mut R,
) -> Result<SolveResult, GameError> {
    if target.len() != state.word_length() {
        return Err(GameError::InvalidGuessLength {
            expected: state.word_length(),
            found: target.len(),
        });
    }

    let mut guesses = Vec::new();
    let mut guessed = false;

    while !state.is_game_over() {
        let candidates_before = state.remaining_words().len();
        let guess = strategy.select_guess(state, rng)?;
        let outcome = state.play(guess, target)?;

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            tiles: outcome.tiles(guess),
            outcome,
            candidates_before,
            candidates_after: state.remaining_words().len(),
        });

        if guess == target {
            guessed = true;
            break;
        }
    }

    Ok(SolveResult {
        target: target.text().to_string(),
        guesses,
        success: guessed,
        deduced: if guessed { None } else { state.solution() },
    })
}

/// Solve a specific word from a fresh game
///
/// # Errors
///
/// Returns `InvalidWord` or `InvalidGuessLength` for a bad target, and any
/// error from the strategy.
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    mut state: GameState<'_>,
    target: &str,
    strategy: &S,
    rng: &mut R,
) -> Result<SolveResult, GameError> {
    let target = state.parse_guess(target)?;
    play_game(&mut state, &target, strategy, rng)
}
