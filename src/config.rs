//! Solver tuning parameters
//!
//! The shortlist size and simulation budgets are empirically tuned; they are
//! kept here so callers can adjust them without touching the algorithms.

/// Fixed first-turn suggestions with their measured expected turns
pub const DEFAULT_OPENERS: &[(f64, &str)] = &[
    (3.959_705_882_352_941, "dates"),
    (3.970_299_884_659_746, "dales"),
    (3.971_229_293_809_939, "dares"),
    (3.984_014_209_591_474, "lanes"),
    (3.988_081_725_312_145, "rates"),
];

/// Tunable constants for guess scoring and Monte Carlo simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Turn budget of a new game
    pub total_guesses: usize,

    /// Weight kept by letters known to be present but not yet placed
    pub letter_known_penalty: f64,

    /// Smallest shortlist the heuristic keeps
    pub min_shortlist: usize,

    /// Largest shortlist the heuristic keeps
    pub max_shortlist: usize,

    /// Shortlist grows by one slot per this many remaining words
    pub shortlist_divisor: usize,

    /// At or below this many remaining words, all of them join the shortlist
    pub small_pool: usize,

    /// At or below this many remaining words, pick one of them at random
    pub random_pick_pool: usize,

    /// Ranking rollouts per remaining word
    pub trials_per_candidate: usize,

    /// Upper bound on ranking rollouts
    pub max_trials: usize,

    /// Multiplier applied to the turn count of a lost rollout
    pub loss_penalty: f64,

    /// Default number of trials for win-probability estimates
    pub win_probability_trials: usize,

    /// Rollouts per RNG stream (one rayon task each)
    pub trials_per_batch: usize,

    /// Suggestions returned before any guess has been made
    pub openers: &'static [(f64, &'static str)],
}

impl SolverConfig {
    /// Shortlist capacity for `remaining` candidate words
    ///
    /// `max(min_shortlist, min(ceil(remaining / divisor), max_shortlist))`
    #[must_use]
    pub fn shortlist_size(&self, remaining: usize) -> usize {
        remaining
            .div_ceil(self.shortlist_divisor.max(1))
            .min(self.max_shortlist)
            .max(self.min_shortlist)
    }

    /// Ranking rollout budget for `remaining` candidate words
    #[must_use]
    pub fn ranking_trials(&self, remaining: usize) -> usize {
        remaining
            .saturating_mul(self.trials_per_candidate)
            .min(self.max_trials)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            total_guesses: 6,
            letter_known_penalty: 0.01,
            min_shortlist: 5,
            max_shortlist: 50,
            shortlist_divisor: 5,
            small_pool: 5,
            random_pick_pool: 2,
            trials_per_candidate: 50,
            max_trials: 50_000,
            loss_penalty: 10.0,
            win_probability_trials: 2_000,
            trials_per_batch: 256,
            openers: DEFAULT_OPENERS,
        }
    }
}
