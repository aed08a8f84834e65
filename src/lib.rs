//! Wordle Monte Carlo
//!
//! A Wordle solver that proposes guesses with a letter-frequency heuristic and
//! ranks them by simulating the rest of the game many times.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_monte_carlo::game::{Dictionary, GameState};
//! use wordle_monte_carlo::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let dictionary = Dictionary::new(words_from_slice(DICTIONARY)).unwrap();
//! let mut state = GameState::new(&dictionary);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! // `s` at index 0, `a` somewhere else, every other letter absent
//! state.update_with_encoded_outcome("slate", "s0a").unwrap();
//!
//! for (expected_turns, word) in state.monte_carlo_best_guesses(5, &mut rng).unwrap() {
//!     println!("{word}: {expected_turns:.2}");
//! }
//! ```

// Core domain types
pub mod core;

// Game state and candidate filtering
pub mod game;

// Guess heuristic and Monte Carlo evaluation
pub mod solver;

// Tuning constants
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
