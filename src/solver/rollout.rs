//! Single Monte Carlo rollout
//!
//! Plays a forked game forward against a sampled hidden word, always taking
//! the heuristic's guess, until the game ends.

use crate::core::Word;
use crate::game::{GameError, GameState};
use rand::Rng;

/// Result of one simulated game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollout<'a> {
    /// First guess the heuristic made, if the game was not already over
    pub first_guess: Option<&'a Word>,
    /// Turns played in this rollout
    pub turns: usize,
    pub won: bool,
}

impl Rollout<'_> {
    /// Cost of this rollout for ranking: total turns, times `loss_penalty` on a loss
    ///
    /// `offset` is the number of turns already played before the fork.
    #[must_use]
    pub fn cost(&self, offset: usize, loss_penalty: f64) -> f64 {
        let total = (offset + self.turns) as f64;
        if self.won { total } else { total * loss_penalty }
    }
}

/// Play `state` forward against `hidden` until the game is over
///
/// A rollout is won only when `hidden` is guessed. A game that ends with the
/// word pinned down by the outcomes but never played is a loss.
///
/// # Errors
/// Propagates errors from guess selection; none occur when `hidden` is one
/// of the state's remaining words.
pub fn play_out<'a, R: Rng + ?Sized>(
    state: &mut GameState<'a>,
    hidden: &Word,
    rng: &mut R,
) -> Result<Rollout<'a>, GameError> {
    let mut first_guess = None;

    while !state.is_game_over() {
        let guess = state.best_guess(rng)?;
        first_guess.get_or_insert(guess);
        state.play(guess, hidden)?;

        if guess == hidden {
            return Ok(Rollout {
                first_guess,
                turns: state.previous_tries().len(),
                won: true,
            });
        }
    }

    Ok(Rollout {
        first_guess,
        turns: state.previous_tries().len(),
        won: false,
    })
}
