//! Game engine
//!
//! Tracks knowledge, filters candidates and drives the turn-by-turn state of a
//! single puzzle or simulated branch.

mod dictionary;
mod error;
pub mod filter;
mod knowledge;
mod state;

pub use dictionary::Dictionary;
pub use error::GameError;
pub use knowledge::{Knowledge, NotPositions};
pub use state::{GameState, GameStatus};
