//! Compact letter and position sets
//!
//! Both sets are bitmasks: `LetterSet` has one bit per lowercase ASCII letter,
//! `PositionSet` one bit per word index. They are `Copy`, so cloning a game
//! state never shares them between branches.

use std::fmt;

/// A set of lowercase ASCII letters (`a`..=`z`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a set from the letters of a byte string
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes.iter().fold(Self::EMPTY, |set, &letter| set.with(letter))
    }

    /// Return a copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | bit(letter))
    }

    /// Add a letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters of `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if the two sets share no letter
    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// True if every letter of `self` is in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

#[inline]
const fn bit(letter: u8) -> u32 {
    if letter.is_ascii_lowercase() {
        1 << (letter - b'a')
    } else {
        0
    }
}

/// A set of word indices (0..16)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u16);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn insert(&mut self, index: usize) {
        debug_assert!(index < 16, "position index out of range");
        self.0 |= 1 << index;
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        index < 16 && self.0 & (1 << index) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..16).filter(move |&index| self.contains(index))
    }
}
