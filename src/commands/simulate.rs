//! Batch simulation
//!
//! Plays many games against hidden words drawn at random from the dictionary
//! and collects win statistics.

use super::solve::play_game;
use crate::config::SolverConfig;
use crate::game::{Dictionary, GameError, GameState};
use crate::solver::Strategy;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Statistics from a batch of simulated games
#[derive(Debug, Default)]
pub struct SimulationStatistics {
    pub games: usize,
    pub wins: usize,
    /// Turns used → number of games won in that many turns
    pub guess_distribution: FxHashMap<usize, usize>,
    /// Guess → (games it was played in, of which won)
    pub word_outcomes: FxHashMap<String, (usize, usize)>,
    /// Hidden words that were not found
    pub misses: FxHashSet<String>,
    pub total_time: Duration,
}

impl SimulationStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Mean turns over won games
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        let total: usize = self
            .guess_distribution
            .iter()
            .map(|(turns, count)| turns * count)
            .sum();
        if self.wins == 0 {
            0.0
        } else {
            total as f64 / self.wins as f64
        }
    }

    /// Win rate per guess word, for words played in more than 1/25 of the games
    ///
    /// Sorted by number of games played, most frequent first.
    #[must_use]
    pub fn frequent_words(&self) -> Vec<(&str, usize, f64)> {
        let threshold = self.games / 25;
        let mut words: Vec<(&str, usize, f64)> = self
            .word_outcomes
            .iter()
            .filter(|&(_, &(played, _))| played > threshold)
            .map(|(word, &(played, won))| (word.as_str(), played, won as f64 / played as f64))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words
    }

    fn record(&mut self, guesses: &[String], won: bool, turns: usize, hidden: &str) {
        self.games += 1;
        if won {
            self.wins += 1;
            *self.guess_distribution.entry(turns).or_insert(0) += 1;
        } else {
            self.misses.insert(hidden.to_string());
        }

        for word in guesses {
            let entry = self.word_outcomes.entry(word.clone()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += usize::from(won);
        }
    }
}

/// Play `games` games against random hidden words
///
/// With `verbose`, every game is printed above the progress bar.
///
/// # Errors
///
/// Propagates any error from the strategy.
pub fn run_simulation<S: Strategy, R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: SolverConfig,
    strategy: &S,
    games: usize,
    verbose: bool,
    rng: &mut R,
) -> Result<SimulationStatistics, GameError> {
    let pb = ProgressBar::new(games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut stats = SimulationStatistics::default();
    let start = Instant::now();

    for game in 0..games {
        let hidden = dictionary
            .words()
            .choose(rng)
            .ok_or(GameError::EmptyDictionary)?;
        let mut state = GameState::with_config(dictionary, config);
        let result = play_game(&mut state, hidden, strategy, rng)?;

        let guesses: Vec<String> = result.guesses.iter().map(|step| step.word.clone()).collect();
        stats.record(&guesses, result.success, result.turns(), hidden.text());

        if verbose {
            let verdict = if result.success {
                "won".green()
            } else {
                "lost".red()
            };
            pb.println(format!(
                "{:>5}. {} {} in {}: {}",
                game + 1,
                hidden.text().to_uppercase().bright_white(),
                verdict,
                result.turns(),
                guesses.join(" ")
            ));
        }

        if game % 10 == 0 {
            pb.set_message(format!("Win rate: {:.1}%", stats.win_rate() * 100.0));
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!("Win rate: {:.1}%", stats.win_rate() * 100.0));
    stats.total_time = start.elapsed();

    Ok(stats)
}
