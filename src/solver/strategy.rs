//! Guess selection strategies
//!
//! Defines the Strategy trait and the two ways of picking a guess: the fast
//! letter-frequency heuristic and the slower Monte Carlo ranking built on it.

use super::{heuristic, monte_carlo};
use crate::core::Word;
use crate::game::{GameError, GameState};
use rand::Rng;

/// A strategy for selecting the next guess of a game
pub trait Strategy {
    /// Select the next guess for `state`
    ///
    /// # Errors
    /// Returns `GameOver` or `EmptyCandidatePool` when no guess can be made.
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        state: &GameState<'a>,
        rng: &mut R,
    ) -> Result<&'a Word, GameError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Simulation-ranked guesses (default, strongest)
    MonteCarlo(MonteCarloStrategy),
    /// Random pick from the heuristic shortlist
    Heuristic(HeuristicStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        state: &GameState<'a>,
        rng: &mut R,
    ) -> Result<&'a Word, GameError> {
        match self {
            Self::MonteCarlo(s) => s.select_guess(state, rng),
            Self::Heuristic(s) => s.select_guess(state, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "monte-carlo", "mc", "heuristic", "fast".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "monte-carlo" | "mc" => Some(Self::MonteCarlo(MonteCarloStrategy)),
            "heuristic" | "fast" => Some(Self::Heuristic(HeuristicStrategy)),
            _ => None,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MonteCarlo(_) => "monte-carlo",
            Self::Heuristic(_) => "heuristic",
        }
    }

    /// What the score of a suggestion means
    #[must_use]
    pub const fn score_label(&self) -> &'static str {
        match self {
            Self::MonteCarlo(_) => "expected turns",
            Self::Heuristic(_) => "letter score",
        }
    }

    /// Up to `limit` ranked suggestions with their scores, best first
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game and `EmptyCandidatePool` when no
    /// candidate remains.
    pub fn suggestions<'a, R: Rng + ?Sized>(
        &self,
        state: &GameState<'a>,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<(f64, &'a Word)>, GameError> {
        match self {
            Self::MonteCarlo(_) => state.monte_carlo_best_guesses(limit, rng),
            Self::Heuristic(_) => {
                if state.is_game_over() {
                    return Err(GameError::GameOver);
                }
                if state.remaining_words().is_empty() {
                    return Err(GameError::EmptyCandidatePool);
                }
                Ok(heuristic::shortlist(state)
                    .into_iter()
                    .take(limit)
                    .map(|entry| (entry.score, entry.word))
                    .collect())
            }
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::MonteCarlo(MonteCarloStrategy)
    }
}

/// Letter-frequency heuristic
///
/// One random pick from the shortlist; cheap enough to drive rollouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        state: &GameState<'a>,
        rng: &mut R,
    ) -> Result<&'a Word, GameError> {
        if state.is_game_over() {
            return Err(GameError::GameOver);
        }
        heuristic::best_guess(state, rng)
    }
}

/// Monte Carlo ranking
///
/// Plays the guess with the lowest expected cost over simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonteCarloStrategy;

impl Strategy for MonteCarloStrategy {
    fn select_guess<'a, R: Rng + ?Sized>(
        &self,
        state: &GameState<'a>,
        rng: &mut R,
    ) -> Result<&'a Word, GameError> {
        monte_carlo::best_choice(state, rng)
    }
}
