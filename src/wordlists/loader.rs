//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load the words of `word_length` letters from a file
///
/// One word per line, any case. Blank lines, invalid entries and words of
/// another length are skipped; duplicates keep their first occurrence.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_monte_carlo::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(content.lines(), word_length))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_monte_carlo::wordlists::loader::words_from_slice;
/// use wordle_monte_carlo::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_words<'s>(lines: impl Iterator<Item = &'s str>, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Ok(word) = Word::new(trimmed)
            && word.len() == word_length
            && seen.insert(word.text().to_string())
        {
            words.push(word);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "sl4te", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_keeps_requested_length() {
        let text = "Crane\n\n  SLATE \ntoolong\nabc\ncr4ne\ncrane\nirate\n";
        let words = parse_words(text.lines(), 5);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);

        let short = parse_words(text.lines(), 3);
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].text(), "abc");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("no/such/dictionary.txt", 5).is_err());
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::DICTIONARY;

        let words = words_from_slice(DICTIONARY);
        assert_eq!(words.len(), DICTIONARY.len());
    }
}
