//! Word lists for Wordle solving
//!
//! Provides the embedded default dictionary and loaders for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: FxHashSet<&str> = DICTIONARY.iter().copied().collect();
        assert_eq!(unique.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_contains_openers() {
        for &(_, opener) in crate::config::DEFAULT_OPENERS {
            assert!(DICTIONARY.contains(&opener), "missing opener '{opener}'");
        }
    }
}
