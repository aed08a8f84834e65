//! Accumulated knowledge about the hidden word
//!
//! Knowledge only grows: letters are added to the excluded and included sets,
//! slots gain a known letter, and letters gain ruled-out positions. Nothing is
//! ever removed or overwritten.

use crate::core::{LetterSet, Outcome, PositionSet, Word};
use rustc_hash::FxHashMap;

/// Letter → positions where the letter is known NOT to be
///
/// Letters never recorded answer with an empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotPositions(FxHashMap<u8, PositionSet>);

impl NotPositions {
    /// Positions ruled out for `letter` (empty if none)
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> PositionSet {
        self.0.get(&letter).copied().unwrap_or_default()
    }

    /// Record that `letter` is not at `index`
    pub fn insert(&mut self, letter: u8, index: usize) {
        self.0.entry(letter).or_default().insert(index);
    }

    /// Iterate over letters with at least one ruled-out position
    pub fn iter(&self) -> impl Iterator<Item = (u8, PositionSet)> + '_ {
        self.0.iter().map(|(&letter, &positions)| (letter, positions))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything learned from the outcomes so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    excluded: LetterSet,
    included: LetterSet,
    positions: Vec<Option<u8>>,
    not_positions: NotPositions,
}

impl Knowledge {
    /// Empty knowledge for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            excluded: LetterSet::EMPTY,
            included: LetterSet::EMPTY,
            positions: vec![None; word_length],
            not_positions: NotPositions::default(),
        }
    }

    /// Fold one guess and its outcome into the knowledge
    ///
    /// 1. Confirmed letters join the included set.
    /// 2. Guess letters that are still not included join the excluded set.
    /// 3. A slot the outcome confirms for the guessed letter becomes known;
    ///    any other slot holding an included letter rules that slot out for it.
    ///
    /// A known slot keeps its first letter.
    pub fn apply(&mut self, guess: &Word, outcome: &Outcome) {
        debug_assert_eq!(guess.len(), self.positions.len(), "guess length mismatch");

        self.included = self.included.union(outcome.present());
        self.excluded = self
            .excluded
            .union(guess.letters().difference(self.included));

        for (i, &letter) in guess.bytes().iter().enumerate() {
            if outcome.placed_letter(i) == Some(letter) {
                self.positions[i].get_or_insert(letter);
            } else if self.included.contains(letter) {
                self.not_positions.insert(letter, i);
            }
        }
    }

    /// True if `outcome` disagrees with what is already known
    ///
    /// An outcome contradicts the knowledge when it confirms an excluded
    /// letter, or places a guess letter on a slot known to hold another one.
    #[must_use]
    pub fn contradicts(&self, guess: &Word, outcome: &Outcome) -> bool {
        !outcome.present().is_disjoint(self.excluded)
            || guess.bytes().iter().enumerate().any(|(i, &letter)| {
                outcome.placed_letter(i) == Some(letter)
                    && self.letter_at(i).is_some_and(|known| known != letter)
            })
    }

    /// True if `word` satisfies every constraint
    ///
    /// Checks excluded letters, required letters, known slots and ruled-out
    /// slots. Whether the word was already guessed is the filter's concern.
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        let letters = word.letters();

        letters.is_disjoint(self.excluded)
            && self.included.is_subset(letters)
            && self
                .positions
                .iter()
                .zip(word.bytes())
                .all(|(known, &letter)| known.is_none_or(|k| k == letter))
            && word
                .bytes()
                .iter()
                .enumerate()
                .all(|(i, &letter)| !self.not_positions.positions_of(letter).contains(i))
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[inline]
    #[must_use]
    pub const fn included(&self) -> LetterSet {
        self.included
    }

    #[inline]
    #[must_use]
    pub const fn not_positions(&self) -> &NotPositions {
        &self.not_positions
    }

    /// Letter known to sit at `index`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, index: usize) -> Option<u8> {
        self.positions.get(index).copied().flatten()
    }

    /// First known slot of `letter`
    #[must_use]
    pub fn position_of(&self, letter: u8) -> Option<usize> {
        self.positions.iter().position(|&known| known == Some(letter))
    }

    /// True if `letter` has at least one known slot
    #[must_use]
    pub fn is_positioned(&self, letter: u8) -> bool {
        self.position_of(letter).is_some()
    }

    /// Number of slots with a known letter
    #[must_use]
    pub fn known_positions(&self) -> usize {
        self.positions.iter().flatten().count()
    }

    /// True before any outcome has taught anything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.included.is_empty() && self.excluded.is_empty()
    }

    /// True once every slot is known, which determines the hidden word
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    /// The hidden word, once every slot is known
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        self.positions
            .iter()
            .map(|known| known.map(char::from))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positions.len()
    }
}
