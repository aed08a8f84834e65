//! Game state machine
//!
//! A `GameState` tracks one puzzle (or one simulated branch of it): the words
//! still possible, what the outcomes taught us, and how many turns are left.

use super::{Dictionary, GameError, Knowledge, filter};
use crate::config::SolverConfig;
use crate::core::{Outcome, Word};
use crate::solver::{heuristic, monte_carlo};
use rand::Rng;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Turns remain and the hidden word is not yet determined
    InProgress,
    /// Every slot of the hidden word is known
    Won,
    /// The turn budget ran out first
    Lost,
}

/// Mutable state of one game or simulation branch
///
/// Cloning copies every owned container; only the dictionary is shared.
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    dictionary: &'a Dictionary,
    config: SolverConfig,
    remaining_words: Vec<&'a Word>,
    total_guesses: usize,
    knowledge: Knowledge,
    previous_tries: Vec<Word>,
}

impl<'a> GameState<'a> {
    /// Start a new game over `dictionary` with the default configuration
    ///
    /// # Examples
    /// ```
    /// use wordle_monte_carlo::game::{Dictionary, GameState};
    ///
    /// let dictionary = Dictionary::from_strs(&["apple", "angle", "amble"]).unwrap();
    /// let mut state = GameState::new(&dictionary);
    ///
    /// state.update_with_known_outcome("angle", "apple").unwrap();
    /// let remaining: Vec<&str> = state.remaining_words().iter().map(|w| w.text()).collect();
    /// assert_eq!(remaining, vec!["apple", "amble"]);
    /// assert!(!state.is_game_over());
    /// ```
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_config(dictionary, SolverConfig::default())
    }

    /// Start a new game with custom tuning
    #[must_use]
    pub fn with_config(dictionary: &'a Dictionary, config: SolverConfig) -> Self {
        Self {
            dictionary,
            config,
            remaining_words: dictionary.words().iter().collect(),
            total_guesses: config.total_guesses,
            knowledge: Knowledge::new(dictionary.word_length()),
            previous_tries: Vec::new(),
        }
    }

    /// Fork the state for a simulated continuation
    ///
    /// The snapshot keeps the knowledge and remaining words, starts with an
    /// empty history and a budget of the turns still left here.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self {
            dictionary: self.dictionary,
            config: self.config,
            remaining_words: self.remaining_words.clone(),
            total_guesses: self.guesses_left(),
            knowledge: self.knowledge.clone(),
            previous_tries: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Words still consistent with every outcome, in dictionary order
    #[inline]
    #[must_use]
    pub fn remaining_words(&self) -> &[&'a Word] {
        &self.remaining_words
    }

    #[inline]
    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    /// Guesses made in this state's history
    #[inline]
    #[must_use]
    pub fn previous_tries(&self) -> &[Word] {
        &self.previous_tries
    }

    /// Turn budget of this state
    #[inline]
    #[must_use]
    pub const fn total_guesses(&self) -> usize {
        self.total_guesses
    }

    #[inline]
    #[must_use]
    pub fn guesses_left(&self) -> usize {
        self.total_guesses.saturating_sub(self.previous_tries.len())
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    /// Current status; a determined word wins even on the last turn
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.knowledge.is_complete() {
            GameStatus::Won
        } else if self.previous_tries.len() >= self.total_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// The hidden word once it is determined
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        self.knowledge.solution()
    }

    /// Validate a guess against the dictionary's word length
    ///
    /// # Errors
    /// Returns `InvalidWord` for non-words and `InvalidGuessLength` for words
    /// of the wrong length.
    pub fn parse_guess(&self, text: &str) -> Result<Word, GameError> {
        let word = Word::new(text)?;
        if word.len() != self.word_length() {
            return Err(GameError::InvalidGuessLength {
                expected: self.word_length(),
                found: word.len(),
            });
        }
        Ok(word)
    }

    /// Apply a guess whose hidden word is known
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game, `InvalidWord` or
    /// `InvalidGuessLength` for a bad guess or hidden word, and
    /// `EmptyCandidatePool` when the hidden word contradicts earlier outcomes.
    pub fn update_with_known_outcome(&mut self, guess: &str, hidden: &str) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let guess = self.parse_guess(guess)?;
        let hidden = self.parse_guess(hidden)?;
        self.play(&guess, &hidden).map(|_| ())
    }

    /// Apply a guess with its textual outcome, e.g. `s0t4b1a`
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game, `InvalidWord` or
    /// `InvalidGuessLength` for a bad guess, `MalformedOutcome` for outcome
    /// text that does not parse, and `EmptyCandidatePool` when the outcome
    /// contradicts earlier outcomes.
    pub fn update_with_encoded_outcome(
        &mut self,
        guess: &str,
        outcome: &str,
    ) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let guess = self.parse_guess(guess)?;
        let decoded = Outcome::decode(outcome, self.word_length()).map_err(|reason| {
            GameError::MalformedOutcome {
                outcome: outcome.to_string(),
                reason,
            }
        })?;
        self.apply_outcome(&guess, &decoded)
    }

    /// Play `guess` against a known `hidden` word and return the outcome
    ///
    /// Both words must already have the dictionary's length.
    ///
    /// # Errors
    /// Same as [`GameState::apply_outcome`].
    pub fn play(&mut self, guess: &Word, hidden: &Word) -> Result<Outcome, GameError> {
        for found in [guess.len(), hidden.len()] {
            if found != self.word_length() {
                return Err(GameError::InvalidGuessLength {
                    expected: self.word_length(),
                    found,
                });
            }
        }
        let outcome = Outcome::from_hidden(guess, hidden);
        self.apply_outcome(guess, &outcome)?;
        Ok(outcome)
    }

    /// Fold a guess and its outcome into the state
    ///
    /// The update is atomic: the new knowledge and candidate list are built
    /// first and committed only if every check passes.
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game, `InvalidGuessLength` when the
    /// guess or outcome length differs from the dictionary's, and
    /// `EmptyCandidatePool` when the outcome contradicts earlier outcomes.
    /// No word surviving is only accepted when `guess` itself was the answer.
    pub fn apply_outcome(&mut self, guess: &Word, outcome: &Outcome) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        for found in [guess.len(), outcome.word_length()] {
            if found != self.word_length() {
                return Err(GameError::InvalidGuessLength {
                    expected: self.word_length(),
                    found,
                });
            }
        }

        if self.knowledge.contradicts(guess, outcome) {
            return Err(GameError::EmptyCandidatePool);
        }

        let mut knowledge = self.knowledge.clone();
        knowledge.apply(guess, outcome);
        let remaining = filter::retain_consistent(&self.remaining_words, guess, &knowledge);

        if remaining.is_empty() && !self.is_winning_guess(guess, &knowledge) {
            return Err(GameError::EmptyCandidatePool);
        }

        self.knowledge = knowledge;
        self.remaining_words = remaining;
        self.previous_tries.push(guess.clone());
        Ok(())
    }

    /// Propose a strong next guess from the letter-frequency heuristic
    ///
    /// # Errors
    /// Returns `EmptyCandidatePool` when no candidate remains.
    pub fn best_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Word, GameError> {
        heuristic::best_guess(self, rng)
    }

    /// Rank first guesses by simulated expected turns (lowest first)
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game and `EmptyCandidatePool` when no
    /// candidate remains.
    pub fn monte_carlo_best_guesses<R: Rng + ?Sized>(
        &self,
        limit: usize,
        rng: &mut R,
    ) -> Result<Vec<(f64, &'a Word)>, GameError> {
        monte_carlo::rank_candidates(self, limit, rng)
    }

    /// Estimated probability of winning if `guess` is played next
    ///
    /// # Errors
    /// Returns `GameOver` on a finished game, `InvalidWord` or
    /// `InvalidGuessLength` for a bad guess, and `EmptyCandidatePool` when no
    /// candidate remains.
    pub fn win_probability_if_guessed<R: Rng + ?Sized>(
        &self,
        guess: &str,
        trials: usize,
        rng: &mut R,
    ) -> Result<f64, GameError> {
        let guess = self.parse_guess(guess)?;
        monte_carlo::estimate_win_rate(self, &guess, trials, rng)
    }

    /// `guess` is the word `updated` determines and was still possible before
    fn is_winning_guess(&self, guess: &Word, updated: &Knowledge) -> bool {
        updated.solution().as_deref() == Some(guess.text())
            && (self.knowledge.admits(guess) || self.remaining_words.iter().any(|&w| w == guess))
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_strs(words).unwrap()
    }

    fn texts<'a>(state: &GameState<'a>) -> Vec<&'a str> {
        state.remaining_words().iter().map(|&w| w.text()).collect()
    }

    const WORDS: &[&str] = &[
        "crane", "slate", "irate", "crate", "grate", "trace", "react", "lanes", "dates", "rates",
        "apple", "angle", "amble", "geese", "these", "sweet",
    ];

    #[test]
    fn new_game_starts_with_full_dictionary() {
        let dict = dictionary(WORDS);
        let state = GameState::new(&dict);

        assert_eq!(state.remaining_words().len(), WORDS.len());
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.guesses_left(), 6);
        assert!(state.previous_tries().is_empty());
        assert!(state.knowledge().included().is_empty());
    }

    #[test]
    fn scenario_angle_against_apple() {
        let dict = dictionary(&["apple", "angle", "amble"]);
        let mut state = GameState::new(&dict);

        state.update_with_known_outcome("angle", "apple").unwrap();

        assert_eq!(texts(&state), vec!["apple", "amble"]);
        assert_eq!(state.knowledge().letter_at(0), Some(b'a'));
        assert_eq!(state.knowledge().letter_at(3), Some(b'l'));
        assert_eq!(state.knowledge().letter_at(4), Some(b'e'));
        assert!(state.knowledge().excluded().contains(b'n'));
        assert!(state.knowledge().excluded().contains(b'g'));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.previous_tries().len(), 1);
    }

    #[test]
    fn remaining_words_shrink_monotonically() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        let mut before = state.remaining_words().len();

        for guess in ["slate", "crane", "trace"] {
            state.update_with_known_outcome(guess, "grate").unwrap();
            let after = state.remaining_words().len();
            assert!(after <= before);
            assert!(!state.remaining_words().iter().any(|w| w.text() == guess));
            assert!(
                state
                    .remaining_words()
                    .iter()
                    .all(|w| state.knowledge().admits(w))
            );
            before = after;
        }
        assert!(texts(&state).contains(&"grate"));
    }

    #[test]
    fn encoded_outcome_matches_known_outcome() {
        let dict = dictionary(WORDS);

        for (guess, hidden) in [("slate", "lanes"), ("crane", "react"), ("geese", "these")] {
            let mut known = GameState::new(&dict);
            known.update_with_known_outcome(guess, hidden).unwrap();

            let text =
                Outcome::from_hidden(&Word::new(guess).unwrap(), &Word::new(hidden).unwrap())
                    .to_string();
            let mut encoded = GameState::new(&dict);
            encoded.update_with_encoded_outcome(guess, &text).unwrap();

            assert_eq!(known.knowledge(), encoded.knowledge());
            assert_eq!(texts(&known), texts(&encoded));
        }
    }

    #[test]
    fn winning_guess_ends_game() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);

        state.update_with_known_outcome("crate", "crate").unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert!(state.is_game_over());
        assert_eq!(state.solution().as_deref(), Some("crate"));
        assert!(state.remaining_words().is_empty());
        assert_eq!(
            state.update_with_known_outcome("slate", "crate"),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn deduced_word_ends_game() {
        let dict = dictionary(&["crane", "brine", "crabs"]);
        let mut state = GameState::new(&dict);

        state.update_with_encoded_outcome("crabs", "c0r1a2").unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(texts(&state), vec!["crane"]);

        // Slots 3 and 4 come from a different word; `crane` itself is never played
        state.update_with_encoded_outcome("brine", "r1n3e4").unwrap();
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.solution().as_deref(), Some("crane"));
        assert_eq!(texts(&state), vec!["crane"]);
    }

    #[test]
    fn budget_exhaustion_loses() {
        let dict = dictionary(WORDS);
        let config = SolverConfig {
            total_guesses: 2,
            ..SolverConfig::default()
        };
        let mut state = GameState::with_config(&dict, config);

        state.update_with_known_outcome("slate", "geese").unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        state.update_with_known_outcome("crane", "geese").unwrap();
        assert_eq!(state.status(), GameStatus::Lost);
        assert_eq!(
            state.update_with_known_outcome("these", "geese"),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn invalid_guess_length_leaves_state_untouched() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);

        assert_eq!(
            state.update_with_known_outcome("cranes", "crate"),
            Err(GameError::InvalidGuessLength {
                expected: 5,
                found: 6
            })
        );
        assert_eq!(
            state.update_with_encoded_outcome("tea", "t0"),
            Err(GameError::InvalidGuessLength {
                expected: 5,
                found: 3
            })
        );
        assert!(matches!(
            state.update_with_known_outcome("cr4ne", "crate"),
            Err(GameError::InvalidWord(_))
        ));
        assert_eq!(state.remaining_words().len(), WORDS.len());
        assert!(state.previous_tries().is_empty());
    }

    #[test]
    fn malformed_outcome_is_reported() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);

        let err = state.update_with_encoded_outcome("crane", "0c").unwrap_err();
        assert!(matches!(err, GameError::MalformedOutcome { .. }));

        let err = state.update_with_encoded_outcome("crane", "c7").unwrap_err();
        assert!(matches!(err, GameError::MalformedOutcome { .. }));
        assert!(state.previous_tries().is_empty());
    }

    #[test]
    fn contradictory_outcome_is_rejected_atomically() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "crane").unwrap();
        let before = state.clone();

        // `s` was absent, now claimed at slot 0
        let err = state.update_with_encoded_outcome("sweet", "s0").unwrap_err();
        assert_eq!(err, GameError::EmptyCandidatePool);
        assert_eq!(state.knowledge(), before.knowledge());
        assert_eq!(texts(&state), texts(&before));
        assert_eq!(state.previous_tries().len(), 1);
    }

    #[test]
    fn complete_but_contradictory_outcome_is_not_a_win() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("crane", "slate").unwrap();
        let before = state.clone();

        // c, r and n were absent; a full set of slots does not override that
        let err = state
            .update_with_encoded_outcome("crane", "c0r1a2n3e4")
            .unwrap_err();
        assert_eq!(err, GameError::EmptyCandidatePool);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.knowledge(), before.knowledge());
        assert!(state.knowledge().included().is_disjoint(state.knowledge().excluded()));

        state.update_with_encoded_outcome("slate", "s0l1a2t3e4").unwrap();
        assert_eq!(state.status(), GameStatus::Won);
        assert_eq!(state.solution().as_deref(), Some("slate"));
    }

    #[test]
    fn clone_is_independent() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        let copy = state.clone();

        state.update_with_known_outcome("slate", "crane").unwrap();

        assert_eq!(copy.remaining_words().len(), WORDS.len());
        assert!(copy.previous_tries().is_empty());
        assert!(copy.knowledge().included().is_empty());
        assert!(std::ptr::eq(copy.dictionary(), state.dictionary()));
    }

    #[test]
    fn snapshot_carries_knowledge_and_budget() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "crane").unwrap();
        state.update_with_known_outcome("trace", "crane").unwrap();

        let mut snapshot = state.snapshot();
        assert_eq!(snapshot.total_guesses(), 4);
        assert!(snapshot.previous_tries().is_empty());
        assert_eq!(snapshot.knowledge(), state.knowledge());
        assert_eq!(texts(&snapshot), texts(&state));

        snapshot.update_with_known_outcome("crane", "crane").unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.previous_tries().len(), 2);
    }

    #[test]
    fn best_guess_comes_from_remaining_when_few_left() {
        let dict = dictionary(WORDS);
        let mut state = GameState::new(&dict);
        state.update_with_known_outcome("slate", "grate").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let guess = state.best_guess(&mut rng).unwrap();
        assert!(dict.contains(guess.text()));
    }
}
