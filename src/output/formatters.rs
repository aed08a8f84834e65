//! Formatting utilities for terminal output

use crate::core::{Feedback, Outcome, Word};
use colored::{ColoredString, Colorize};

/// Format per-letter feedback as an emoji string
#[must_use]
pub fn tiles_to_emoji(tiles: &[Feedback]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬜',
        })
        .collect()
}

fn colored_letter(letter: char, tile: Feedback) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match tile {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(guess: &Word, outcome: &Outcome) -> String {
    guess
        .text()
        .chars()
        .zip(outcome.tiles(guess))
        .map(|(letter, tile)| colored_letter(letter, tile).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width] before the cast
    let filled = if max > 0.0 {
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a probability in [0, 1] as a bar
#[must_use]
pub fn probability_bar(probability: f64, width: usize) -> String {
    create_progress_bar(probability, 1.0, width)
}

/// Format a probability as a percentage colored by how likely it is
#[must_use]
pub fn colored_percentage(probability: f64) -> ColoredString {
    let text = format!("{:.1}%", probability * 100.0);
    if probability >= 0.9 {
        text.green().bold()
    } else if probability >= 0.6 {
        text.yellow()
    } else {
        text.red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn tiles_to_emoji_all_absent() {
        let guess = word("crane");
        let outcome = Outcome::from_hidden(&guess, &word("sloth"));
        assert_eq!(tiles_to_emoji(&outcome.tiles(&guess)), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn tiles_to_emoji_mixed() {
        let guess = word("angle");
        let outcome = Outcome::from_hidden(&guess, &word("apple"));
        assert_eq!(tiles_to_emoji(&outcome.tiles(&guess)), "🟩⬜⬜🟩🟩");
    }

    #[test]
    fn colored_tiles_contains_letters() {
        colored::control::set_override(false);
        let guess = word("slate");
        let outcome = Outcome::from_hidden(&guess, &word("lanes"));
        assert_eq!(colored_tiles(&guess, &outcome), " S  L  A  T  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(150.0, 100.0, 4), "████");
        assert_eq!(create_progress_bar(-1.0, 100.0, 4), "░░░░");
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn probability_bar_scales() {
        assert_eq!(probability_bar(0.25, 8), "██░░░░░░");
    }
}
