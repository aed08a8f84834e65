//! Wordle solving algorithms
//!
//! A letter-frequency heuristic proposes guesses; Monte Carlo rollouts of
//! that heuristic rank them.

pub mod heuristic;
pub mod monte_carlo;
pub mod rollout;
mod shortlist;
pub mod strategy;

pub use shortlist::{Scored, Shortlist};
pub use strategy::{HeuristicStrategy, MonteCarloStrategy, Strategy, StrategyType};
