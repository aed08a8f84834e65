//! Bounded top-K selection
//!
//! A fixed-capacity min-heap: the weakest entry sits on top and is the one
//! evicted when a better word arrives.

use crate::core::Word;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A word with its heuristic score
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub score: f64,
    pub word: &'a Word,
}

impl PartialEq for Scored<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored<'_> {}

impl PartialOrd for Scored<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by score, then by word so equal scores stay deterministic
impl Ord for Scored<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(other.word))
    }
}

/// The `capacity` best-scoring words seen so far
#[derive(Debug, Clone)]
pub struct Shortlist<'a> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Scored<'a>>>,
}

impl<'a> Shortlist<'a> {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Offer a word; returns true if it was kept
    ///
    /// While below capacity every word is kept. Once full, a word replaces the
    /// current minimum only with a strictly higher score.
    pub fn push_or_replace_if_better(&mut self, score: f64, word: &'a Word) -> bool {
        let entry = Scored { score, word };

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return true;
        }

        if let Some(mut weakest) = self.heap.peek_mut()
            && score > weakest.0.score
        {
            *weakest = Reverse(entry);
            return true;
        }

        false
    }

    /// Kept entries, best first
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Scored<'a>> {
        // Ascending order of Reverse is descending order of score
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| entry)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn keeps_everything_below_capacity() {
        let list = words(&["crane", "slate", "irate"]);
        let mut shortlist = Shortlist::with_capacity(5);

        for (i, word) in list.iter().enumerate() {
            assert!(shortlist.push_or_replace_if_better(i as f64, word));
        }

        let kept = shortlist.into_sorted_vec();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[2].word.text(), "crane");
    }

    #[test]
    fn keeps_top_scores() {
        let list = words(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"]);
        let scores = [0.3, 0.9, 0.1, 0.5, 0.7];
        let mut shortlist = Shortlist::with_capacity(3);

        for (word, &score) in list.iter().zip(&scores) {
            shortlist.push_or_replace_if_better(score, word);
        }

        let kept: Vec<&str> = shortlist
            .into_sorted_vec()
            .iter()
            .map(|entry| entry.word.text())
            .collect();
        assert_eq!(kept, vec!["bbbbb", "eeeee", "ddddd"]);
    }

    #[test]
    fn equal_score_does_not_replace() {
        let list = words(&["aaaaa", "bbbbb"]);
        let mut shortlist = Shortlist::with_capacity(1);

        assert!(shortlist.push_or_replace_if_better(0.5, &list[0]));
        assert!(!shortlist.push_or_replace_if_better(0.5, &list[1]));
        assert!(!shortlist.push_or_replace_if_better(0.4, &list[1]));
        assert!(shortlist.push_or_replace_if_better(0.6, &list[1]));

        let kept = shortlist.into_sorted_vec();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].word.text(), "bbbbb");
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let list = words(&["aaaaa"]);
        let mut shortlist = Shortlist::with_capacity(0);

        assert!(!shortlist.push_or_replace_if_better(1.0, &list[0]));
        assert!(shortlist.into_sorted_vec().is_empty());
    }

    #[test]
    fn scored_orders_by_score_then_word() {
        let list = words(&["aaaaa", "bbbbb"]);
        let low = Scored {
            score: 0.1,
            word: &list[1],
        };
        let high = Scored {
            score: 0.2,
            word: &list[0],
        };
        let tie = Scored {
            score: 0.1,
            word: &list[0],
        };

        assert!(low < high);
        assert!(tie < low);
    }
}
