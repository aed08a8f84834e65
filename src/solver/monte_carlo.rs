//! Monte Carlo guess evaluation
//!
//! Estimates how good a guess is by simulating many games against hidden
//! words sampled from the remaining candidates.
//!
//! Trials run in batches on the rayon pool. Every batch owns a `StdRng`
//! seeded from the caller's RNG before the parallel section starts, so the
//! results depend on the caller's seed and not on the number of threads.

use super::rollout;
use crate::core::Word;
use crate::game::{GameError, GameState};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Seed and trial count for each batch
fn batch_plan<R: Rng + ?Sized>(
    trials: usize,
    batch_size: usize,
    rng: &mut R,
) -> Vec<(u64, usize)> {
    let batch_size = batch_size.max(1);
    let mut plan = Vec::with_capacity(trials.div_ceil(batch_size));
    let mut left = trials;

    while left > 0 {
        let count = left.min(batch_size);
        plan.push((rng.random(), count));
        left -= count;
    }

    plan
}

fn ensure_playable(state: &GameState<'_>) -> Result<(), GameError> {
    if state.is_game_over() {
        return Err(GameError::GameOver);
    }
    if state.remaining_words().is_empty() {
        return Err(GameError::EmptyCandidatePool);
    }
    Ok(())
}

/// Sample a hidden word from the remaining candidates
fn sample_hidden<'a, R: Rng + ?Sized>(
    state: &GameState<'a>,
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    state
        .remaining_words()
        .choose(rng)
        .copied()
        .ok_or(GameError::EmptyCandidatePool)
}

/// Does playing `guess` now, then following the heuristic, win this trial?
fn trial_wins<R: Rng + ?Sized>(
    state: &GameState<'_>,
    guess: &Word,
    rng: &mut R,
) -> Result<bool, GameError> {
    let hidden = sample_hidden(state, rng)?;
    if hidden == guess {
        return Ok(true);
    }

    let mut branch = state.snapshot();
    branch.play(guess, hidden)?;
    Ok(rollout::play_out(&mut branch, hidden, rng)?.won)
}

/// Fraction of `trials` simulated games won when `guess` is played next
///
/// Returns `0.0` for zero trials.
///
/// # Errors
/// Returns `GameOver` on a finished game and `EmptyCandidatePool` when no
/// candidate remains.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_monte_carlo::core::Word;
/// use wordle_monte_carlo::game::{Dictionary, GameState};
/// use wordle_monte_carlo::solver::monte_carlo::estimate_win_rate;
///
/// let dictionary = Dictionary::from_strs(&["apple", "angle", "amble"]).unwrap();
/// let mut state = GameState::new(&dictionary);
/// state.update_with_known_outcome("angle", "apple").unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let guess = Word::new("apple").unwrap();
/// let rate = estimate_win_rate(&state, &guess, 100, &mut rng).unwrap();
/// assert!((0.0..=1.0).contains(&rate));
/// ```
pub fn estimate_win_rate<R: Rng + ?Sized>(
    state: &GameState<'_>,
    guess: &Word,
    trials: usize,
    rng: &mut R,
) -> Result<f64, GameError> {
    ensure_playable(state)?;
    if trials == 0 {
        return Ok(0.0);
    }

    let wins = batch_plan(trials, state.config().trials_per_batch, rng)
        .into_par_iter()
        .map(|(seed, count)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut wins = 0_usize;
            for _ in 0..count {
                if trial_wins(state, guess, &mut rng)? {
                    wins += 1;
                }
            }
            Ok::<_, GameError>(wins)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    Ok(wins as f64 / trials as f64)
}

/// Running cost total and sample count per first guess
type CostTable<'a> = FxHashMap<&'a Word, (f64, usize)>;

fn merge<'a>(mut into: CostTable<'a>, from: CostTable<'a>) -> CostTable<'a> {
    for (word, (sum, count)) in from {
        let entry = into.entry(word).or_insert((0.0, 0));
        entry.0 += sum;
        entry.1 += count;
    }
    into
}

/// Configured openers that exist in the dictionary, at most `limit`
fn opening_choices<'a>(state: &GameState<'a>, limit: usize) -> Vec<(f64, &'a Word)> {
    let dictionary = state.dictionary();
    state
        .config()
        .openers
        .iter()
        .filter_map(|&(expected, text)| dictionary.find(text).map(|word| (expected, word)))
        .take(limit)
        .collect()
}

/// Nothing has been learned yet, including in a snapshot with no history
fn is_opening(state: &GameState<'_>) -> bool {
    state.knowledge().is_empty() && state.remaining_words().len() == state.dictionary().len()
}

/// Rank first guesses by their mean simulated cost, lowest first
///
/// Before any guess is made the configured openers are returned without
/// simulation. Otherwise each rollout samples a hidden word, forks the state
/// and plays the heuristic forward; the cost of the rollout is charged to the
/// heuristic's first guess. A win costs the total number of turns, a loss
/// costs the total times `loss_penalty`. Ties are broken by word.
///
/// # Errors
/// Returns `GameOver` on a finished game and `EmptyCandidatePool` when no
/// candidate remains.
pub fn rank_candidates<'a, R: Rng + ?Sized>(
    state: &GameState<'a>,
    limit: usize,
    rng: &mut R,
) -> Result<Vec<(f64, &'a Word)>, GameError> {
    ensure_playable(state)?;

    if is_opening(state) {
        let openers = opening_choices(state, limit);
        if !openers.is_empty() {
            return Ok(openers);
        }
    }

    let config = state.config();
    let trials = config.ranking_trials(state.remaining_words().len());
    let offset = state.previous_tries().len();
    let penalty = config.loss_penalty;

    let batches = batch_plan(trials, config.trials_per_batch, rng)
        .into_par_iter()
        .map(|(seed, count)| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut table = CostTable::default();
            for _ in 0..count {
                let hidden = sample_hidden(state, &mut rng)?;
                let mut branch = state.snapshot();
                let rollout = rollout::play_out(&mut branch, hidden, &mut rng)?;
                if let Some(first) = rollout.first_guess {
                    let entry = table.entry(first).or_insert((0.0, 0));
                    entry.0 += rollout.cost(offset, penalty);
                    entry.1 += 1;
                }
            }
            Ok(table)
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    // Plan order, not completion order
    let table = batches.into_iter().fold(CostTable::default(), merge);

    let mut ranked: Vec<(f64, &'a Word)> = table
        .into_iter()
        .map(|(word, (sum, count))| (sum / count as f64, word))
        .collect();
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    ranked.truncate(limit);

    Ok(ranked)
}

/// The single best first guess by simulation
///
/// # Errors
/// Same as [`rank_candidates`].
pub fn best_choice<'a, R: Rng + ?Sized>(
    state: &GameState<'a>,
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    rank_candidates(state, 1, rng)?
        .first()
        .map(|&(_, word)| word)
        .ok_or(GameError::EmptyCandidatePool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::game::Dictionary;

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "react", "lanes", "dates", "rates",
        "apple", "angle", "amble", "geese", "these", "sweet",
    ];

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_strs(words).unwrap()
    }

    #[test]
    fn batch_plan_covers_every_trial() {
        let mut rng = StdRng::seed_from_u64(0);

        let plan = batch_plan(1_000, 256, &mut rng);
        let counts: Vec<usize> = plan.iter().map(|&(_, count)| count).collect();
        assert_eq!(counts, vec![256, 256, 256, 232]);

        assert!(batch_plan(0, 256, &mut rng).is_empty());
        assert_eq!(batch_plan(3, 0, &mut rng).len(), 3);
    }

    #[test]
    fn certain_win_with_single_candidate() {
        let dict = dictionary(&["apple", "angle", "amble"]);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("amble", "apple").unwrap();
        state.update_with_known_outcome("angle", "apple").unwrap();
        assert_eq!(state.remaining_words().len(), 1);

        let mut rng = StdRng::seed_from_u64(9);
        let rate = state.win_probability_if_guessed("apple", 500, &mut rng).unwrap();
        assert!((rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_trials_is_zero() {
        let dict = dictionary(WORDS);
        let state = GameState::new(&dict);
        let mut rng = StdRng::seed_from_u64(0);

        let guess = Word::new("crane").unwrap();
        assert!(estimate_win_rate(&state, &guess, 0, &mut rng).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_is_a_probability() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "grate").unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        // A guess outside the dictionary is allowed
        let rate = state.win_probability_if_guessed("cigar", 300, &mut rng).unwrap();
        assert!((0.0..=1.0).contains(&rate));
    }

    #[test]
    fn win_rate_is_reproducible_from_seed() {
        let dict = dictionary(WORDS);
        let state = GameState::new(&dict);
        let guess = Word::new("slate").unwrap();

        let first = estimate_win_rate(&state, &guess, 600, &mut StdRng::seed_from_u64(11)).unwrap();
        let second = estimate_win_rate(&state, &guess, 600, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn no_turns_left_after_guess_loses_unless_correct() {
        let dict = dictionary(&["crate", "grate", "irate"]);
        let config = SolverConfig {
            total_guesses: 1,
            ..SolverConfig::default()
        };
        let state = GameState::with_config(&dict, config);
        let mut rng = StdRng::seed_from_u64(2);

        // Only the trials whose hidden word is the guess can win
        let rate = state.win_probability_if_guessed("crate", 3_000, &mut rng).unwrap();
        assert!(rate > 0.25 && rate < 0.42, "rate {rate}");
    }

    #[test]
    fn win_rate_rejects_bad_input() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(matches!(
            state.win_probability_if_guessed("toolong", 10, &mut rng),
            Err(GameError::InvalidGuessLength { .. })
        ));

        state.update_with_known_outcome("crane", "crane").unwrap();
        assert_eq!(
            state.win_probability_if_guessed("slate", 10, &mut rng),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn first_turn_returns_openers() {
        let dict = dictionary(WORDS);
        let state = GameState::new(&dict);
        let mut rng = StdRng::seed_from_u64(0);

        let ranked = rank_candidates(&state, 10, &mut rng).unwrap();
        let words: Vec<&str> = ranked.iter().map(|(_, w)| w.text()).collect();
        assert_eq!(words, vec!["dates", "lanes", "rates"]);

        let ranked = rank_candidates(&state, 1, &mut rng).unwrap();
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].0 - 3.959_705_882_352_941).abs() < 1e-12);
    }

    #[test]
    fn snapshot_after_a_guess_is_not_an_opening() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "grate").unwrap();
        let snapshot = state.snapshot();
        assert!(snapshot.previous_tries().is_empty());

        let ranked = rank_candidates(&snapshot, 10, &mut StdRng::seed_from_u64(6)).unwrap();
        assert!(!ranked.is_empty());
        assert!(
            ranked
                .iter()
                .all(|(_, word)| !["dates", "lanes", "rates"].contains(&word.text()))
        );
        assert!(ranked.iter().all(|(cost, _)| *cost >= 1.0));
    }

    #[test]
    fn first_turn_without_openers_simulates() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "apple"]);
        let state = GameState::new(&dict);
        let mut rng = StdRng::seed_from_u64(4);

        let ranked = rank_candidates(&state, 3, &mut rng).unwrap();
        assert!(!ranked.is_empty() && ranked.len() <= 3);
        assert!(ranked.iter().all(|(cost, _)| *cost >= 1.0));
        assert!(ranked.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    }

    #[test]
    fn ranking_after_a_guess() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "grate").unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        let ranked = state.monte_carlo_best_guesses(5, &mut rng).unwrap();
        assert!(!ranked.is_empty() && ranked.len() <= 5);
        // Every turn costs at least one, plus the guess already made
        assert!(ranked.iter().all(|(cost, _)| *cost >= 2.0));
        assert!(ranked.windows(2).all(|pair| pair[0].0 <= pair[1].0));
        assert!(ranked.iter().all(|(_, word)| dict.contains(word.text())));
    }

    #[test]
    fn ranking_is_reproducible_from_seed() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("crane", "these").unwrap();

        let first = rank_candidates(&state, 5, &mut StdRng::seed_from_u64(21)).unwrap();
        let second = rank_candidates(&state, 5, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn best_choice_is_top_ranked() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "grate").unwrap();

        let best = best_choice(&state, &mut StdRng::seed_from_u64(3)).unwrap();
        let ranked = rank_candidates(&state, 1, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(best, ranked[0].1);
    }

    #[test]
    fn ranking_rejects_finished_game() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("crane", "crane").unwrap();

        assert_eq!(
            rank_candidates(&state, 5, &mut StdRng::seed_from_u64(0)),
            Err(GameError::GameOver)
        );
    }
}
