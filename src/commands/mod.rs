//! Command implementations

pub mod chance;
pub mod play;
pub mod simulate;
pub mod solve;

pub use chance::{ChanceResult, HistoryEntry, estimate_chance, parse_history_entry};
pub use play::run_play;
pub use simulate::{SimulationStatistics, run_simulation};
pub use solve::{GuessStep, SolveResult, play_game, solve_word};
